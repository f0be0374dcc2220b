use apptrack_core::contract::{
  VALIDATED_CLASS,
  VALIDATED_FORMS
};
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  HtmlFormElement
};

use super::dom;

pub fn attach(document: &Document) {
  let forms = dom::query_all(
    document,
    VALIDATED_FORMS
  );
  debug!(
    count = forms.len(),
    "attaching validation gates"
  );

  for element in forms {
    let Ok(form) = element
      .dyn_into::<HtmlFormElement>()
    else {
      continue;
    };

    let target = form.clone();
    EventListener::new_with_options(
      &form,
      "submit",
      EventListenerOptions::
        enable_prevent_default(),
      move |event| {
        if !target.check_validity() {
          event.prevent_default();
          event.stop_propagation();
          debug!(
            "form failed constraint \
             checks; submit blocked"
          );
        }
        dom::add_class(
          &target,
          VALIDATED_CLASS
        );
      }
    )
    .forget();
  }
}
