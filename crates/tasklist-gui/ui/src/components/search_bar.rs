use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
  pub query:     String,
  pub on_change: Callback<String>
}

#[function_component(SearchBar)]
pub fn search_bar(
  props: &SearchBarProps
) -> Html {
  let oninput = {
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_change.emit(input.value());
      }
    )
  };

  html! {
      <input
          class="field search"
          type="search"
          placeholder="Search"
          aria-label="Search"
          value={props.query.clone()}
          {oninput}
      />
  }
}
