use tasklist_core::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:               Vec<Task>,
  pub delete_disabled:     bool,
  pub on_toggle_important: Callback<TaskId>,
  pub on_delete:           Callback<TaskId>,
  pub on_edit:             Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <ul class="task-list">
          {
              for props.tasks.iter().cloned().map(|task| html! {
                  <TaskListRow
                      key={task.id}
                      task={task.clone()}
                      delete_disabled={props.delete_disabled}
                      on_toggle_important={props.on_toggle_important.clone()}
                      on_delete={props.on_delete.clone()}
                      on_edit={props.on_edit.clone()}
                  />
              })
          }
      </ul>
  }
}
