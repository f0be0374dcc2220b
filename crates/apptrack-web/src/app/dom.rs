use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element
};

pub fn document() -> Option<Document> {
  web_sys::window()
    .and_then(|window| window.document())
}

/// Every element matching `selector`. An
/// invalid selector yields nothing.
pub fn query_all(
  document: &Document,
  selector: &str
) -> Vec<Element> {
  let list =
    match document.query_selector_all(
      selector
    ) {
      | Ok(list) => list,
      | Err(error) => {
        tracing::warn!(
          selector,
          ?error,
          "invalid selector"
        );
        return vec![];
      }
    };

  (0..list.length())
    .filter_map(|index| list.item(index))
    .filter_map(|node| {
      node.dyn_into::<Element>().ok()
    })
    .collect()
}

pub fn query_one(
  document: &Document,
  selector: &str
) -> Option<Element> {
  document
    .query_selector(selector)
    .ok()
    .flatten()
}

pub fn add_class(
  element: &Element,
  class: &str
) {
  if let Err(error) =
    element.class_list().add_1(class)
  {
    tracing::warn!(
      class,
      ?error,
      "failed adding class"
    );
  }
}

pub fn remove_class(
  element: &Element,
  class: &str
) {
  if let Err(error) =
    element.class_list().remove_1(class)
  {
    tracing::warn!(
      class,
      ?error,
      "failed removing class"
    );
  }
}
