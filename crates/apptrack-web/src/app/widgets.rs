use apptrack_core::contract::{
  AUTOFOCUS_CANDIDATES,
  POPOVER_TRIGGERS,
  TOOLTIP_TRIGGERS
};
use tracing::{
  debug,
  warn
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  HtmlInputElement
};

use super::dom;
use crate::interop;

pub fn init_tooltips(document: &Document) {
  for element in
    dom::query_all(document, TOOLTIP_TRIGGERS)
  {
    if let Err(error) =
      interop::init_tooltip(&element)
    {
      warn!(%error, "tooltip not initialised");
    }
  }
}

pub fn init_popovers(document: &Document) {
  for element in
    dom::query_all(document, POPOVER_TRIGGERS)
  {
    if let Err(error) =
      interop::init_popover(&element)
    {
      warn!(%error, "popover not initialised");
    }
  }
}

pub fn focus_first_empty_input(
  document: &Document
) {
  let Some(input) = dom::query_one(
    document,
    AUTOFOCUS_CANDIDATES
  )
  .and_then(|element| {
    element
      .dyn_into::<HtmlInputElement>()
      .ok()
  }) else {
    return;
  };

  if input.value().is_empty() {
    if let Err(error) = input.focus() {
      warn!(?error, "autofocus failed");
    } else {
      debug!(
        name = %input.name(),
        "focused first empty input"
      );
    }
  }
}
