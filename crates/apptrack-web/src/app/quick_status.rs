use std::cell::RefCell;
use std::rc::Rc;

use apptrack_core::config::PageContext;
use apptrack_core::contract::{
  ATTR_APPLICATION_ID,
  ATTR_STATUS,
  QUICK_STATUS_BUTTONS,
  QuickStatusTarget
};
use apptrack_core::quick_status::{
  QuickStatusOutcome,
  QuickStatusTracker,
  StatusUpdate
};
use gloo::events::EventListener;
use tracing::{
  debug,
  info,
  warn
};
use web_sys::Document;

use super::{
  alerts,
  dom
};
use crate::api;

pub fn attach(
  document: &Document,
  ctx: &Rc<PageContext>
) {
  let buttons = dom::query_all(
    document,
    QUICK_STATUS_BUTTONS
  );
  if buttons.is_empty() {
    return;
  }

  let tracker = Rc::new(RefCell::new(
    QuickStatusTracker::default()
  ));

  for button in buttons {
    let target_el = button.clone();
    let document = document.clone();
    let ctx = Rc::clone(ctx);
    let tracker = Rc::clone(&tracker);

    EventListener::new(
      &button,
      "click",
      move |_| {
        let application_id = target_el
          .get_attribute(ATTR_APPLICATION_ID);
        let status =
          target_el.get_attribute(ATTR_STATUS);
        let parsed =
          QuickStatusTarget::from_attributes(
            application_id,
            status
          );
        let target = match parsed {
          | Ok(target) => target,
          | Err(error) => {
            warn!(
              %error,
              "quick status button is \
               misconfigured"
            );
            return;
          }
        };

        let ticket =
          tracker.borrow_mut().begin(&target);
        let document = document.clone();
        let ctx = Rc::clone(&ctx);
        let tracker = Rc::clone(&tracker);

        wasm_bindgen_futures::spawn_local(
          async move {
            let response =
              api::post_quick_status(
                &ctx,
                target.application_id,
                &target.status
              )
              .await;
            let outcome = tracker
              .borrow_mut()
              .finish(
                &target, ticket, response
              );
            render(&document, &ctx, outcome);
          }
        );
      }
    )
    .forget();
  }
}

fn render(
  document: &Document,
  ctx: &PageContext,
  outcome: QuickStatusOutcome
) {
  match &outcome {
    | QuickStatusOutcome::Apply(update) => {
      apply(document, ctx, update);
    }
    | QuickStatusOutcome::Stale => {}
    | QuickStatusOutcome::Failed(_) => {
      let report = ctx
        .config
        .report_quick_status_errors;
      if let Some(alert) =
        outcome.failure_alert(report)
        && let Err(error) = alerts::prepend(
          document,
          &ctx.config.alert_container,
          &alert
        )
      {
        warn!(
          %error,
          "failed showing error alert"
        );
      }
    }
  }
}

fn apply(
  document: &Document,
  ctx: &PageContext,
  update: &StatusUpdate
) {
  match document
    .get_element_by_id(&update.badge_id)
  {
    | Some(badge) => {
      badge.set_text_content(Some(
        &update.badge_text
      ));
      badge.set_class_name(&update.badge_class);
    }
    | None => {
      debug!(
        badge = %update.badge_id,
        "no status badge on page"
      );
    }
  }

  if let Err(error) = alerts::prepend(
    document,
    &ctx.config.alert_container,
    &update.alert
  ) {
    warn!(
      %error,
      "failed showing status alert"
    );
  }

  info!(
    badge = %update.badge_id,
    status = %update.badge_text,
    "status updated"
  );
}
