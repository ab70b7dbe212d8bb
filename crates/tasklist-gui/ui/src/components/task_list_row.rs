use tasklist_core::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:                Task,
  pub delete_disabled:     bool,
  pub on_toggle_important: Callback<TaskId>,
  pub on_delete:           Callback<TaskId>,
  pub on_edit:             Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.task.id;
  let important =
    props.task.is_important;
  let on_toggle_important =
    props.on_toggle_important.clone();
  let on_delete =
    props.on_delete.clone();
  let on_edit = props.on_edit.clone();

  html! {
      <li class="task-row">
          <span class="name">{ &props.task.name }</span>
          <button
              class={classes!("icon-btn", "star", important.then_some("on"))}
              type="button"
              title={if important { "Unmark important" } else { "Mark important" }}
              onclick={move |_| on_toggle_important.emit(id)}
          >
              { if important { "★" } else { "☆" } }
          </button>
          <button
              class="icon-btn delete"
              type="button"
              title="Delete"
              disabled={props.delete_disabled}
              onclick={move |_| on_delete.emit(id)}
          >
              { "🗑" }
          </button>
          <button
              class="icon-btn edit"
              type="button"
              title="Edit"
              onclick={move |_| on_edit.emit(id)}
          >
              { "✎" }
          </button>
      </li>
  }
}
