use apptrack_core::contract::{
  ATTR_CURRENT_STATUS,
  STATUS_FORMS,
  STATUS_SELECT
};
use apptrack_core::status_gate::{
  self,
  GateDecision
};
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  HtmlSelectElement
};

use super::dom;

pub fn attach(document: &Document) {
  for form in
    dom::query_all(document, STATUS_FORMS)
  {
    let target = form.clone();
    EventListener::new_with_options(
      &form,
      "submit",
      EventListenerOptions::
        enable_prevent_default(),
      move |event| {
        let Some(select) = target
          .query_selector(STATUS_SELECT)
          .ok()
          .flatten()
          .and_then(|element| {
            element
              .dyn_into::<HtmlSelectElement>()
              .ok()
          })
        else {
          return;
        };

        let requested = select.value();
        let current = target
          .get_attribute(ATTR_CURRENT_STATUS);
        let decision = status_gate::evaluate(
          current.as_deref(),
          &requested
        );

        if !status_gate::allows_submit(
          &decision,
          gloo::dialogs::confirm
        ) {
          event.prevent_default();
          debug!(
            requested = %requested,
            declined = matches!(
              decision,
              GateDecision::Confirm(_)
            ),
            "status submit cancelled"
          );
        }
      }
    )
    .forget();
  }
}
