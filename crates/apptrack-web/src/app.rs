mod alerts;
mod clipboard;
mod deadlines;
mod dom;
mod page_config;
mod quick_status;
mod search;
mod status_forms;
mod theme;
mod validation;
mod widgets;

use std::rc::Rc;

use gloo::events::EventListener;
use tracing::{
  error,
  info
};

/// Runs the page bootstrap once the
/// document has been parsed.
pub fn run_when_ready() {
  let Some(document) = dom::document()
  else {
    error!(
      "no document available; page \
       script not attached"
    );
    return;
  };

  if is_still_parsing(
    &document.ready_state()
  ) {
    EventListener::once(
      &document,
      "DOMContentLoaded",
      |_| boot()
    )
    .forget();
  } else {
    boot();
  }
}

/// `document.readyState` is a plain
/// string; only `loading` means the
/// template is not fully parsed yet.
fn is_still_parsing(
  ready_state: &str
) -> bool {
  ready_state == "loading"
}

#[tracing::instrument]
fn boot() {
  let Some(document) = dom::document()
  else {
    error!("document vanished before boot");
    return;
  };

  let ctx =
    Rc::new(page_config::load(&document));

  alerts::schedule_auto_dismiss(
    &document,
    ctx.config.alert_dismiss_ms
  );
  validation::attach(&document);
  widgets::init_tooltips(&document);
  widgets::init_popovers(&document);
  widgets::focus_first_empty_input(
    &document
  );
  deadlines::colorize(&document);
  status_forms::attach(&document);
  clipboard::attach(&document, &ctx);
  theme::attach(&document, &ctx);
  quick_status::attach(&document, &ctx);
  search::attach(&document, &ctx);

  info!("page behaviours attached");
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_loading_state_defers_boot() {
    assert!(is_still_parsing("loading"));
    assert!(!is_still_parsing(
      "interactive"
    ));
    assert!(!is_still_parsing("complete"));
  }
}
