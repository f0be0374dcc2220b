//! Bindings to the Bootstrap bundle and
//! the async clipboard API loaded by the
//! host page.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(
    js_namespace = bootstrap,
    js_name = Alert
  )]
  type BootstrapAlert;

  #[wasm_bindgen(
    catch,
    constructor,
    js_namespace = bootstrap,
    js_class = "Alert"
  )]
  fn new(
    element: &Element
  ) -> Result<BootstrapAlert, JsValue>;

  #[wasm_bindgen(method, catch)]
  fn close(
    this: &BootstrapAlert
  ) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(
    js_namespace = bootstrap,
    js_name = Tooltip
  )]
  type BootstrapTooltip;

  #[wasm_bindgen(
    catch,
    constructor,
    js_namespace = bootstrap,
    js_class = "Tooltip"
  )]
  fn new(
    element: &Element
  ) -> Result<BootstrapTooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(
    js_namespace = bootstrap,
    js_name = Popover
  )]
  type BootstrapPopover;

  #[wasm_bindgen(
    catch,
    constructor,
    js_namespace = bootstrap,
    js_class = "Popover"
  )]
  fn new(
    element: &Element
  ) -> Result<BootstrapPopover, JsValue>;
}

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(
    catch,
    js_namespace = ["navigator", "clipboard"],
    js_name = writeText
  )]
  fn clipboard_write_text(
    text: &str
  ) -> Result<Promise, JsValue>;
}

pub fn close_alert(
  element: &Element
) -> Result<(), String> {
  BootstrapAlert::new(element)
    .and_then(|alert| alert.close())
    .map_err(|e| {
      format!("bootstrap alert error: {e:?}")
    })
}

pub fn init_tooltip(
  element: &Element
) -> Result<(), String> {
  BootstrapTooltip::new(element)
    .map(|_| ())
    .map_err(|e| {
      format!(
        "bootstrap tooltip error: {e:?}"
      )
    })
}

pub fn init_popover(
  element: &Element
) -> Result<(), String> {
  BootstrapPopover::new(element)
    .map(|_| ())
    .map_err(|e| {
      format!(
        "bootstrap popover error: {e:?}"
      )
    })
}

pub async fn write_clipboard(
  text: &str
) -> Result<(), String> {
  let promise = clipboard_write_text(text)
    .map_err(|e| {
      format!("clipboard unavailable: {e:?}")
    })?;
  JsFuture::from(promise)
    .await
    .map(|_| ())
    .map_err(|e| {
      format!(
        "clipboard write rejected: {e:?}"
      )
    })
}
