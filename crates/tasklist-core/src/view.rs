use tracing::{
  debug,
  info
};

use crate::filter::filter_tasks;
use crate::store::{
  DeleteOutcome,
  MIN_TASKS,
  TaskStore
};
use crate::task::{
  Task,
  TaskId
};
use crate::validate::{
  ValidationError,
  validate_submission
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum DeleteState {
  #[default]
  Idle,
  PendingConfirmation(TaskId)
}

/// What a delete request turned into.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum DeleteRequest {
  Deleted(Task),
  AwaitingConfirmation(TaskId),
  Blocked,
  Ignored
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum SubmitOutcome {
  Added(Task),
  Edited(TaskId),
  Rejected(ValidationError)
}

/// Form, search and delete-confirmation state layered over a
/// [`TaskStore`]. Holds no copy of the tasks; the filtered list is
/// derived from the store on every read.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskListView {
  query:   String,
  draft:   String,
  editing: Option<TaskId>,
  error:   Option<ValidationError>,
  delete:  DeleteState
}

impl TaskListView {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn search_query(&self) -> &str {
    &self.query
  }

  pub fn set_search_query(
    &mut self,
    query: impl Into<String>
  ) {
    self.query = query.into();
    debug!(query = %self.query, "search query changed");
  }

  pub fn filtered<'a>(
    &self,
    store: &'a TaskStore
  ) -> Vec<&'a Task> {
    filter_tasks(
      store.tasks(),
      &self.query
    )
  }

  pub fn draft(&self) -> &str {
    &self.draft
  }

  pub fn set_draft(
    &mut self,
    text: impl Into<String>
  ) {
    self.draft = text.into();
    self.error = None;
  }

  pub fn form_error(
    &self
  ) -> Option<ValidationError> {
    self.error
  }

  pub fn editing(&self) -> Option<TaskId> {
    self.editing
  }

  pub fn delete_state(
    &self
  ) -> DeleteState {
    self.delete
  }

  pub fn pending_delete<'a>(
    &self,
    store: &'a TaskStore
  ) -> Option<&'a Task> {
    match self.delete {
      | DeleteState::PendingConfirmation(
        id
      ) => store.get(id),
      | DeleteState::Idle => None
    }
  }

  pub fn floor_reached(
    &self,
    store: &TaskStore
  ) -> bool {
    store.at_floor()
  }

  #[tracing::instrument(
    skip(self, store),
    fields(editing = ?self.editing)
  )]
  pub fn submit(
    &mut self,
    store: &mut TaskStore
  ) -> SubmitOutcome {
    let outcome = match self.editing {
      | Some(id) => {
        match store.edit(id, &self.draft) {
          | Ok(_) => SubmitOutcome::Edited(id),
          | Err(err) => {
            SubmitOutcome::Rejected(err)
          }
        }
      }
      | None => {
        match validate_submission(
          &self.draft,
          store.tasks(),
          MIN_TASKS
        )
        .and_then(|name| {
          store.add(name.as_str())
        }) {
          | Ok(task) => {
            SubmitOutcome::Added(task)
          }
          | Err(err) => {
            SubmitOutcome::Rejected(err)
          }
        }
      }
    };

    match &outcome {
      | SubmitOutcome::Rejected(err) => {
        info!(error = %err, "submission rejected");
        self.error = Some(*err);
      }
      | SubmitOutcome::Added(_)
      | SubmitOutcome::Edited(_) => {
        self.editing = None;
        self.draft.clear();
        self.error = None;
      }
    }
    outcome
  }

  /// Seeds the form with the task's name. Returns `false` for unknown ids.
  pub fn begin_edit(
    &mut self,
    store: &TaskStore,
    id: TaskId
  ) -> bool {
    let Some(task) = store.get(id) else {
      return false;
    };
    self.editing = Some(id);
    self.draft = task.name.clone();
    self.error = None;
    debug!(id, "editing task");
    true
  }

  pub fn cancel_edit(&mut self) {
    self.editing = None;
    self.draft.clear();
    self.error = None;
  }

  #[tracing::instrument(skip(self, store))]
  pub fn request_delete(
    &mut self,
    store: &mut TaskStore,
    id: TaskId
  ) -> DeleteRequest {
    if self.delete != DeleteState::Idle {
      return DeleteRequest::Ignored;
    }
    let Some(task) = store.get(id) else {
      return DeleteRequest::Ignored;
    };
    if store.at_floor() {
      return DeleteRequest::Blocked;
    }

    if task.is_important {
      self.delete =
        DeleteState::PendingConfirmation(id);
      debug!(id, "awaiting delete confirmation");
      return DeleteRequest::AwaitingConfirmation(id);
    }

    self.remove(store, id)
  }

  /// Deletes the pending task. Returns `None` when nothing was pending or
  /// the store refused.
  #[tracing::instrument(skip(self, store))]
  pub fn confirm_delete(
    &mut self,
    store: &mut TaskStore
  ) -> Option<Task> {
    let DeleteState::PendingConfirmation(
      id
    ) = std::mem::take(&mut self.delete)
    else {
      return None;
    };

    match self.remove(store, id) {
      | DeleteRequest::Deleted(task) => {
        Some(task)
      }
      | _ => None
    }
  }

  pub fn cancel_delete(&mut self) {
    if let DeleteState::PendingConfirmation(
      id
    ) = self.delete
    {
      debug!(id, "delete cancelled");
    }
    self.delete = DeleteState::Idle;
  }

  fn remove(
    &mut self,
    store: &mut TaskStore,
    id: TaskId
  ) -> DeleteRequest {
    match store.delete(id) {
      | DeleteOutcome::Removed(task) => {
        if self.editing == Some(id) {
          self.cancel_edit();
        }
        DeleteRequest::Deleted(task)
      }
      | DeleteOutcome::Blocked => {
        DeleteRequest::Blocked
      }
      | DeleteOutcome::Missing => {
        DeleteRequest::Ignored
      }
    }
  }
}
