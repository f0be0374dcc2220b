use apptrack_core::alert::{
  Alert,
  DISMISS_ATTRIBUTE,
  DISMISS_BUTTON_CLASS,
  DISMISS_TARGET
};
use apptrack_core::contract::DISMISSIBLE_ALERTS;
use gloo::timers::callback::Timeout;
use tracing::{
  debug,
  warn
};
use wasm_bindgen::JsValue;
use web_sys::Document;

use super::dom;
use crate::interop;

/// One timer for the whole page. Alerts
/// inserted after it fires stay open.
pub fn schedule_auto_dismiss(
  document: &Document,
  delay_ms: u32
) {
  let document = document.clone();
  Timeout::new(delay_ms, move || {
    let alerts = dom::query_all(
      &document,
      DISMISSIBLE_ALERTS
    );
    debug!(
      count = alerts.len(),
      "auto-dismissing alerts"
    );
    for alert in alerts {
      if let Err(error) =
        interop::close_alert(&alert)
      {
        warn!(%error, "failed closing alert");
      }
    }
  })
  .forget();
}

/// Inserts `alert` as the first child of
/// the page container.
pub fn prepend(
  document: &Document,
  container_selector: &str,
  alert: &Alert
) -> Result<(), String> {
  let container = dom::query_one(
    document,
    container_selector
  )
  .ok_or_else(|| {
    format!(
      "alert container not found: \
       {container_selector}"
    )
  })?;

  let banner = document
    .create_element("div")
    .map_err(describe)?;
  banner.set_class_name(&alert.class_name());
  banner.set_text_content(Some(&format!(
    "{} ",
    alert.message
  )));

  let close = document
    .create_element("button")
    .map_err(describe)?;
  close
    .set_attribute("type", "button")
    .map_err(describe)?;
  close.set_class_name(DISMISS_BUTTON_CLASS);
  close
    .set_attribute(
      DISMISS_ATTRIBUTE,
      DISMISS_TARGET
    )
    .map_err(describe)?;
  banner
    .append_with_node_1(&close)
    .map_err(describe)?;

  container
    .prepend_with_node_1(&banner)
    .map_err(describe)
}

fn describe(error: JsValue) -> String {
  format!("dom error: {error:?}")
}
