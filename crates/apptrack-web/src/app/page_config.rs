use apptrack_core::config::{
  CONFIG_ELEMENT_ID,
  OVERRIDE_ATTRIBUTE_PREFIX,
  PageConfig,
  PageContext
};
use tracing::{
  debug,
  error,
  warn
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  HtmlInputElement
};

use super::dom;

/// Defaults, then the JSON config
/// element, then `data-apptrack-*`
/// attributes on `<html>`. A broken
/// source is logged and skipped.
pub fn load(
  document: &Document
) -> PageContext {
  let mut config = document
    .get_element_by_id(CONFIG_ELEMENT_ID)
    .and_then(|element| {
      element.text_content()
    })
    .map(|raw| {
      PageConfig::from_json(&raw)
        .unwrap_or_else(|error| {
          error!(
            %error,
            "failed parsing page config; \
             using defaults"
          );
          PageConfig::default()
        })
    })
    .unwrap_or_default();

  let overrides = root_overrides(document);
  if !overrides.is_empty()
    && let Err(error) =
      config.apply_overrides(overrides)
  {
    error!(
      %error,
      "ignoring page config overrides"
    );
  }

  let csrf_token = read_csrf_token(
    document,
    &config
  );
  PageContext::new(config, csrf_token)
}

fn root_overrides(
  document: &Document
) -> Vec<(String, String)> {
  let Some(root) =
    document.document_element()
  else {
    return vec![];
  };

  root
    .get_attribute_names()
    .iter()
    .filter_map(|name| name.as_string())
    .filter(|name| {
      name.starts_with(
        OVERRIDE_ATTRIBUTE_PREFIX
      )
    })
    .filter_map(|name| {
      let value = root.get_attribute(&name)?;
      Some((name, value))
    })
    .collect()
}

fn read_csrf_token(
  document: &Document,
  config: &PageConfig
) -> Option<String> {
  let token = dom::query_one(
    document,
    &config.csrf_selector()
  )
  .and_then(|element| {
    element
      .dyn_into::<HtmlInputElement>()
      .ok()
  })
  .map(|input| input.value());

  match &token {
    | Some(_) => {
      debug!(
        field = %config.csrf_field,
        "captured csrf token"
      );
    }
    | None => {
      warn!(
        field = %config.csrf_field,
        "no csrf field on page; quick \
         status requests go out \
         without a token"
      );
    }
  }
  token
}
