use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub draft:     String,
  pub editing:   bool,
  pub error:     Option<String>,
  pub on_input:  Callback<String>,
  pub on_submit: Callback<()>,
  pub on_cancel: Callback<MouseEvent>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let oninput = {
    let on_input = props.on_input.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };
  let onsubmit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
      }
    )
  };

  let submit_label = if props.editing {
    "Update Task"
  } else {
    "Add Task"
  };

  html! {
      <form class="task-form" {onsubmit}>
          <div>
              <input
                  class={classes!("field", props.error.is_some().then_some("invalid"))}
                  type="text"
                  placeholder="Task Name"
                  aria-label="Task Name"
                  value={props.draft.clone()}
                  {oninput}
              />
              {
                  if let Some(error) = &props.error {
                      html! { <div class="field-help error">{ error }</div> }
                  } else {
                      html! {}
                  }
              }
          </div>
          <button class="btn" type="submit">{ submit_label }</button>
          {
              if props.editing {
                  html! {
                      <button
                          class="btn secondary"
                          type="button"
                          onclick={props.on_cancel.clone()}
                      >
                          { "Cancel" }
                      </button>
                  }
              } else {
                  html! {}
              }
          }
      </form>
  }
}
