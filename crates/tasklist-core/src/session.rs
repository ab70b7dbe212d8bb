use tracing::{
  debug,
  error,
  info
};

use crate::source::FetchError;
use crate::store::TaskStore;
use crate::task::{
  Task,
  TaskId
};
use crate::view::TaskListView;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
)]
pub enum LoadState {
  #[default]
  Loading,
  Ready,
  Failed(FetchError)
}

/// Everything the page can ask the session to do.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum Action {
  Loaded(Vec<Task>),
  LoadFailed(FetchError),
  SetQuery(String),
  SetDraft(String),
  Submit,
  BeginEdit(TaskId),
  CancelEdit,
  ToggleImportant(TaskId),
  RequestDelete(TaskId),
  ConfirmDelete,
  CancelDelete
}

/// Single owner of the page state: the store, the view over it and the
/// startup load result.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Session {
  store: TaskStore,
  view:  TaskListView,
  load:  LoadState
}

impl Default for Session {
  fn default() -> Self {
    Self::new()
  }
}

impl Session {
  pub fn new() -> Self {
    Self {
      store: TaskStore::new(),
      view:  TaskListView::new(),
      load:  LoadState::Loading
    }
  }

  pub fn store(&self) -> &TaskStore {
    &self.store
  }

  pub fn view(&self) -> &TaskListView {
    &self.view
  }

  pub fn load_state(&self) -> &LoadState {
    &self.load
  }

  pub fn visible_tasks(&self) -> Vec<&Task> {
    self.view.filtered(&self.store)
  }

  pub fn pending_delete(
    &self
  ) -> Option<&Task> {
    self.view.pending_delete(&self.store)
  }

  #[tracing::instrument(skip(self))]
  pub fn apply(&mut self, action: Action) {
    match action {
      | Action::Loaded(tasks) => {
        if self.load != LoadState::Loading {
          debug!("ignoring late load result");
          return;
        }
        info!(
          count = tasks.len(),
          "initial tasks loaded"
        );
        self.store =
          TaskStore::from_tasks(tasks);
        self.load = LoadState::Ready;
      }
      | Action::LoadFailed(err) => {
        if self.load != LoadState::Loading {
          return;
        }
        error!(error = %err, "initial load failed");
        self.load = LoadState::Failed(err);
      }
      | other
        if self.load != LoadState::Ready =>
      {
        debug!(action = ?other, "session not ready; dropping action");
      }
      | Action::SetQuery(query) => {
        self.view.set_search_query(query);
      }
      | Action::SetDraft(text) => {
        self.view.set_draft(text);
      }
      | Action::Submit => {
        let outcome =
          self.view.submit(&mut self.store);
        debug!(?outcome, "form submitted");
      }
      | Action::BeginEdit(id) => {
        self.view.begin_edit(&self.store, id);
      }
      | Action::CancelEdit => {
        self.view.cancel_edit();
      }
      | Action::ToggleImportant(id) => {
        self.store.toggle_important(id);
      }
      | Action::RequestDelete(id) => {
        let request = self
          .view
          .request_delete(&mut self.store, id);
        debug!(?request, "delete requested");
      }
      | Action::ConfirmDelete => {
        self
          .view
          .confirm_delete(&mut self.store);
      }
      | Action::CancelDelete => {
        self.view.cancel_delete();
      }
    }
  }
}
