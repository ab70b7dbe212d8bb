use tasklist_core::Task;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ConfirmDeleteModalProps {
  /// Task awaiting confirmation; the prompt is hidden when `None`.
  pub task:       Option<Task>,
  pub on_cancel:  Callback<MouseEvent>,
  pub on_confirm: Callback<MouseEvent>
}

#[function_component(ConfirmDeleteModal)]
pub fn confirm_delete_modal(
  props: &ConfirmDeleteModalProps
) -> Html {
  if props.task.is_none() {
    return html! {};
  }

  html! {
      <div class="modal-backdrop" onclick={props.on_cancel.clone()}>
          <div
              class="modal modal-sm"
              role="dialog"
              onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
          >
              <div class="header">{ "Are you Sure Want to Delete Important Task" }</div>
              <div class="footer">
                  <button
                      class="btn plain"
                      type="button"
                      onclick={props.on_cancel.clone()}
                  >
                      { "Cancel" }
                  </button>
                  <button
                      class="btn danger"
                      type="button"
                      onclick={props.on_confirm.clone()}
                  >
                      { "Delete" }
                  </button>
              </div>
          </div>
      </div>
  }
}
