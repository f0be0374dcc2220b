use std::rc::Rc;

use apptrack_core::config::PageContext;
use apptrack_core::contract::{
  ATTR_COPY,
  COPY_BUTTONS
};
use apptrack_core::copy::{
  CopyFeedback,
  CopyPhase
};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use tracing::{
  debug,
  warn
};
use web_sys::{
  Document,
  Element
};

use super::dom;
use crate::interop;

pub fn attach(
  document: &Document,
  ctx: &Rc<PageContext>
) {
  for button in
    dom::query_all(document, COPY_BUTTONS)
  {
    let target = button.clone();
    let ctx = Rc::clone(ctx);
    EventListener::new(
      &button,
      "click",
      move |_| {
        let Some(text) =
          target.get_attribute(ATTR_COPY)
        else {
          warn!(
            attribute = ATTR_COPY,
            "copy button has nothing \
             to copy"
          );
          return;
        };

        let button = target.clone();
        let revert_after =
          ctx.config.copy_feedback_ms;
        wasm_bindgen_futures::spawn_local(
          async move {
            match interop::write_clipboard(
              &text
            )
            .await
            {
              | Ok(()) => show_copied(
                button,
                revert_after
              ),
              | Err(error) => {
                warn!(%error, "copy failed");
              }
            }
          }
        );
      }
    )
    .forget();
  }
}

fn show_copied(
  button: Element,
  revert_after: u32
) {
  let feedback =
    CopyFeedback::capture(button.inner_html());
  button.set_inner_html(feedback.copied_html());
  swap_classes(&button, CopyPhase::Copied);
  debug!("copied to clipboard");

  Timeout::new(revert_after, move || {
    button
      .set_inner_html(feedback.revert_html());
    swap_classes(&button, CopyPhase::Reverted);
  })
  .forget();
}

fn swap_classes(
  button: &Element,
  phase: CopyPhase
) {
  let (remove, add) = phase.class_swap();
  dom::remove_class(button, remove);
  dom::add_class(button, add);
}
