mod storage;

use std::rc::Rc;

use gloo::console::log;
use tasklist_core::{
  Action,
  LoadState,
  Session,
  TaskId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use crate::api::fetch_initial_tasks;
use crate::components::{
  ConfirmDeleteModal,
  SearchBar,
  TaskForm,
  TaskList
};
use self::storage::load_config;

/// Reducer wrapper around the session. Each dispatch clones the current
/// session, applies the action and hands Yew a fresh value.
#[derive(Clone, PartialEq)]
struct SessionState(Session);

impl Reducible for SessionState {
  type Action = Action;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = self.0.clone();
    next.apply(action);
    Rc::new(Self(next))
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(load_config);
  let session = use_reducer(|| {
    SessionState(Session::new())
  });

  {
    let session = session.clone();
    let source = config.source.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "requesting startup tasks"
      );
      wasm_bindgen_futures::spawn_local(
        async move {
          match fetch_initial_tasks(
            &source
          )
          .await
          {
            | Ok(tasks) => {
              session.dispatch(
                Action::Loaded(tasks)
              )
            }
            | Err(err) => {
              tracing::error!(error = ?err, "startup fetch failed");
              session.dispatch(
                Action::LoadFailed(err)
              );
            }
          }
        }
      );
      || ()
    });
  }

  let state = &session.0;
  match state.load_state() {
    | LoadState::Loading => {
      return html! { <div>{ "Loading..." }</div> };
    }
    | LoadState::Failed(err) => {
      return html! { <div>{ format!("Error: {err}") }</div> };
    }
    | LoadState::Ready => {}
  }

  let on_query = {
    let session = session.clone();
    Callback::from(move |query: String| {
      session
        .dispatch(Action::SetQuery(query))
    })
  };
  let on_draft = {
    let session = session.clone();
    Callback::from(move |text: String| {
      session
        .dispatch(Action::SetDraft(text))
    })
  };
  let on_submit = {
    let session = session.clone();
    Callback::from(move |_: ()| {
      ui_debug(
        "form.submit",
        "submit fired"
      );
      session.dispatch(Action::Submit)
    })
  };
  let on_cancel_edit = {
    let session = session.clone();
    Callback::from(
      move |_: MouseEvent| {
        session
          .dispatch(Action::CancelEdit)
      }
    )
  };
  let on_toggle_important = {
    let session = session.clone();
    Callback::from(move |id: TaskId| {
      session.dispatch(
        Action::ToggleImportant(id)
      )
    })
  };
  let on_delete = {
    let session = session.clone();
    Callback::from(move |id: TaskId| {
      ui_debug(
        "task.delete",
        &format!("requested {id}")
      );
      session.dispatch(
        Action::RequestDelete(id)
      )
    })
  };
  let on_edit = {
    let session = session.clone();
    Callback::from(move |id: TaskId| {
      session
        .dispatch(Action::BeginEdit(id))
    })
  };
  let on_confirm_delete = {
    let session = session.clone();
    Callback::from(
      move |_: MouseEvent| {
        session
          .dispatch(Action::ConfirmDelete)
      }
    )
  };
  let on_cancel_delete = {
    let session = session.clone();
    Callback::from(
      move |_: MouseEvent| {
        session
          .dispatch(Action::CancelDelete)
      }
    )
  };

  let view = state.view();
  let floor_reached =
    view.floor_reached(state.store());
  let visible = state
    .visible_tasks()
    .into_iter()
    .cloned()
    .collect::<Vec<_>>();
  let pending = state.pending_delete().cloned();

  html! {
      <div class="container">
          <h1>{ "Todo List" }</h1>
          {
              if floor_reached {
                  html! { <p class="floor-notice">{ "You should have at least two records." }</p> }
              } else {
                  html! {}
              }
          }
          <SearchBar
              query={view.search_query().to_string()}
              on_change={on_query}
          />
          <TaskForm
              draft={view.draft().to_string()}
              editing={view.editing().is_some()}
              error={view.form_error().map(|err| err.to_string())}
              on_input={on_draft}
              on_submit={on_submit}
              on_cancel={on_cancel_edit}
          />
          <TaskList
              tasks={visible}
              delete_disabled={floor_reached}
              on_toggle_important={on_toggle_important}
              on_delete={on_delete}
              on_edit={on_edit}
          />
          <ConfirmDeleteModal
              task={pending}
              on_cancel={on_cancel_delete}
              on_confirm={on_confirm_delete}
          />
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
