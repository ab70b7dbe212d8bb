mod api;
mod app;
mod components;

use web_sys::Element;
use yew::Renderer;

use crate::app::App;

const MOUNT_ID: &str = "app";

fn mount_point() -> Option<Element> {
  web_sys::window()?
    .document()?
    .get_element_by_id(MOUNT_ID)
}

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  match mount_point() {
    | Some(root) => {
      tracing::info!(
        mount = MOUNT_ID,
        "mounting todo list"
      );
      Renderer::<App>::with_root(root)
        .render();
    }
    | None => {
      tracing::warn!(
        mount = MOUNT_ID,
        "mount element missing; \
         rendering into body"
      );
      Renderer::<App>::new().render();
    }
  }
}
