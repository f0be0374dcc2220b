use anyhow::{
  Context,
  anyhow,
  bail
};
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  info
};

pub const CONFIG_ELEMENT_ID: &str =
  "apptrack-config";
pub const OVERRIDE_ATTRIBUTE_PREFIX:
  &str = "data-apptrack-";
pub const APPLICATION_ID_PLACEHOLDER:
  &str = "{id}";

/// Page-level knobs. Every field has a
/// default so the server template only
/// needs to render what it changes.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct PageConfig {
  pub alert_dismiss_ms:   u32,
  pub copy_feedback_ms:   u32,
  pub search_debounce_ms: u32,
  pub theme_storage_key:  String,
  pub theme_attribute:    String,
  pub quick_status_path:  String,
  pub csrf_header:        String,
  pub csrf_field:         String,
  pub alert_container:    String,
  pub search_input_id:    String,
  pub theme_toggle_id:    String,
  pub report_quick_status_errors:
    bool
}

impl Default for PageConfig {
  fn default() -> Self {
    Self {
      alert_dismiss_ms:           5_000,
      copy_feedback_ms:           2_000,
      search_debounce_ms:         500,
      theme_storage_key:          "theme"
        .to_string(),
      theme_attribute:
        "data-bs-theme".to_string(),
      quick_status_path:
        "/applications/{id}/quick-status"
          .to_string(),
      csrf_header:
        "X-CSRFToken".to_string(),
      csrf_field:
        "csrf_token".to_string(),
      alert_container:
        ".container.py-4".to_string(),
      search_input_id:
        "globalSearch".to_string(),
      theme_toggle_id:
        "darkModeToggle".to_string(),
      report_quick_status_errors: false
    }
  }
}

impl PageConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_json(
    raw: &str
  ) -> anyhow::Result<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      debug!(
        "empty page config; using \
         defaults"
      );
      return Ok(Self::default());
    }

    let cfg: Self =
      serde_json::from_str(trimmed)
        .context(
          "failed to parse page config \
           json"
        )?;
    cfg.validate()?;
    info!("loaded page config");
    Ok(cfg)
  }

  /// Applies `data-apptrack-*` style
  /// overrides. Keys may carry the
  /// attribute prefix and use dashes or
  /// underscores. The batch is applied
  /// whole or not at all.
  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) -> anyhow::Result<()>
  where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    let mut candidate = self.clone();
    for (k, v) in overrides {
      let key = k
        .strip_prefix(
          OVERRIDE_ATTRIBUTE_PREFIX
        )
        .unwrap_or(&k)
        .replace('-', "_");
      debug!(
        key = %key,
        value = %v,
        "applying override"
      );
      candidate.set(&key, &v)?;
    }
    candidate.validate()?;

    *self = candidate;
    Ok(())
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    match key {
      | "alert_dismiss_ms" => {
        self.alert_dismiss_ms =
          parse_millis(key, value)?;
      }
      | "copy_feedback_ms" => {
        self.copy_feedback_ms =
          parse_millis(key, value)?;
      }
      | "search_debounce_ms" => {
        self.search_debounce_ms =
          parse_millis(key, value)?;
      }
      | "theme_storage_key" => {
        self.theme_storage_key =
          value.to_string();
      }
      | "theme_attribute" => {
        self.theme_attribute =
          value.to_string();
      }
      | "quick_status_path" => {
        self.quick_status_path =
          value.to_string();
      }
      | "csrf_header" => {
        self.csrf_header =
          value.to_string();
      }
      | "csrf_field" => {
        self.csrf_field =
          value.to_string();
      }
      | "alert_container" => {
        self.alert_container =
          value.to_string();
      }
      | "search_input_id" => {
        self.search_input_id =
          value.to_string();
      }
      | "theme_toggle_id" => {
        self.theme_toggle_id =
          value.to_string();
      }
      | "report_quick_status_errors" => {
        self
          .report_quick_status_errors =
          parse_bool(value)
            .ok_or_else(|| {
              anyhow!(
                "invalid boolean for \
                 {key}: {value}"
              )
            })?;
      }
      | other => {
        bail!(
          "unknown page config key: \
           {other}"
        )
      }
    }
    Ok(())
  }

  pub fn validate(
    &self
  ) -> anyhow::Result<()> {
    for (name, value) in [
      (
        "alert_dismiss_ms",
        self.alert_dismiss_ms
      ),
      (
        "copy_feedback_ms",
        self.copy_feedback_ms
      ),
      (
        "search_debounce_ms",
        self.search_debounce_ms
      )
    ] {
      if value == 0 {
        bail!(
          "{name} must be greater than \
           zero"
        );
      }
    }

    for (name, value) in [
      (
        "theme_storage_key",
        &self.theme_storage_key
      ),
      (
        "theme_attribute",
        &self.theme_attribute
      ),
      ("csrf_header", &self.csrf_header),
      ("csrf_field", &self.csrf_field),
      (
        "alert_container",
        &self.alert_container
      )
    ] {
      if value.trim().is_empty() {
        bail!("{name} must not be empty");
      }
    }

    if !is_header_token(&self.csrf_header)
    {
      bail!(
        "csrf_header is not a valid \
         header name: {:?}",
        self.csrf_header
      );
    }

    if !self
      .quick_status_path
      .contains(APPLICATION_ID_PLACEHOLDER)
    {
      bail!(
        "quick_status_path must contain \
         {APPLICATION_ID_PLACEHOLDER}: {}",
        self.quick_status_path
      );
    }

    Ok(())
  }

  pub fn quick_status_url(
    &self,
    application_id: u64
  ) -> String {
    self.quick_status_path.replace(
      APPLICATION_ID_PLACEHOLDER,
      &application_id.to_string()
    )
  }

  /// Selector for the hidden CSRF field.
  pub fn csrf_selector(&self) -> String {
    format!(
      "[name=\"{}\"]",
      self.csrf_field
    )
  }
}

/// Values resolved once at bootstrap and
/// handed to every handler, instead of
/// re-reading the document per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
  pub config:     PageConfig,
  pub csrf_token: Option<String>
}

impl PageContext {
  pub fn new(
    config: PageConfig,
    csrf_token: Option<String>
  ) -> Self {
    let csrf_token =
      csrf_token.filter(|token| {
        !token.trim().is_empty()
      });
    Self {
      config,
      csrf_token
    }
  }
}

/// RFC 9110 `token`: visible ASCII
/// without separators.
fn is_header_token(name: &str) -> bool {
  !name.is_empty()
    && name.bytes().all(|b| {
      b.is_ascii_alphanumeric()
        || b"!#$%&'*+-.^_`|~".contains(&b)
    })
}

fn parse_millis(
  key: &str,
  value: &str
) -> anyhow::Result<u32> {
  value.trim().parse::<u32>().with_context(
    || {
      format!(
        "invalid milliseconds for \
         {key}: {value}"
      )
    }
  )
}

fn parse_bool(v: &str) -> Option<bool> {
  match v.trim().to_ascii_lowercase().as_str()
  {
    | "1" | "true" | "yes" | "on" => {
      Some(true)
    }
    | "0" | "false" | "no" | "off" => {
      Some(false)
    }
    | _ => None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_page_behaviour() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.alert_dismiss_ms, 5_000);
    assert_eq!(cfg.copy_feedback_ms, 2_000);
    assert_eq!(
      cfg.search_debounce_ms,
      500
    );
    assert_eq!(
      cfg.theme_storage_key,
      "theme"
    );
    assert!(cfg.validate().is_ok());
    assert_eq!(
      cfg.quick_status_url(42),
      "/applications/42/quick-status"
    );
    assert_eq!(
      cfg.csrf_selector(),
      "[name=\"csrf_token\"]"
    );
  }

  #[test]
  fn json_fills_missing_fields_with_defaults(
  ) {
    let cfg = PageConfig::from_json(
      r#"{"search_debounce_ms": 300}"#
    )
    .expect("parse config");
    assert_eq!(
      cfg.search_debounce_ms,
      300
    );
    assert_eq!(cfg.alert_dismiss_ms, 5_000);

    let blank = PageConfig::from_json(
      "  \n"
    )
    .expect("blank config");
    assert_eq!(blank, PageConfig::default());
  }

  #[test]
  fn json_rejects_path_without_placeholder(
  ) {
    let err = PageConfig::from_json(
      r#"{"quick_status_path": "/status"}"#
    )
    .expect_err("path must be rejected");
    assert!(
      err.to_string().contains("{id}")
    );
  }

  #[test]
  fn overrides_accept_attribute_names() {
    let mut cfg = PageConfig::default();
    cfg
      .apply_overrides([
        (
          "data-apptrack-search-debounce-ms"
            .to_string(),
          "750".to_string()
        ),
        (
          "report-quick-status-errors"
            .to_string(),
          "on".to_string()
        )
      ])
      .expect("apply overrides");
    assert_eq!(
      cfg.search_debounce_ms,
      750
    );
    assert!(cfg.report_quick_status_errors);
  }

  #[test]
  fn overrides_reject_bad_input() {
    let mut cfg = PageConfig::default();
    assert!(
      cfg
        .apply_overrides([(
          "unknown".to_string(),
          "1".to_string()
        )])
        .is_err()
    );
    assert!(
      cfg
        .apply_overrides([(
          "copy_feedback_ms".to_string(),
          "soon".to_string()
        )])
        .is_err()
    );
    assert!(
      cfg
        .apply_overrides([(
          "alert_dismiss_ms".to_string(),
          "0".to_string()
        )])
        .is_err()
    );
  }

  #[test]
  fn failed_batch_leaves_config_untouched(
  ) {
    let mut cfg = PageConfig::default();
    let err = cfg
      .apply_overrides([
        (
          "search-debounce-ms".to_string(),
          "750".to_string()
        ),
        (
          "bogus".to_string(),
          "1".to_string()
        )
      ])
      .expect_err("unknown key rejected");
    assert!(
      err.to_string().contains("bogus")
    );
    assert_eq!(cfg, PageConfig::default());

    assert!(
      cfg
        .apply_overrides([(
          "alert_dismiss_ms".to_string(),
          "0".to_string()
        )])
        .is_err()
    );
    assert_eq!(cfg, PageConfig::default());
  }

  #[test]
  fn csrf_header_must_be_a_header_name() {
    let mut cfg = PageConfig::default();
    for bad in
      ["X CSRF", "X-Token:", "Tök", "a\nb"]
    {
      assert!(
        cfg
          .apply_overrides([(
            "csrf_header".to_string(),
            bad.to_string()
          )])
          .is_err(),
        "accepted {bad:?}"
      );
    }
    assert_eq!(cfg.csrf_header, "X-CSRFToken");

    cfg
      .apply_overrides([(
        "csrf_header".to_string(),
        "X-XSRF-TOKEN".to_string()
      )])
      .expect("valid header name");
    assert_eq!(cfg.csrf_header, "X-XSRF-TOKEN");

    assert!(
      PageConfig::from_json(
        r#"{"csrf_header": "bad header"}"#
      )
      .is_err()
    );
  }

  #[test]
  fn context_drops_blank_tokens() {
    let ctx = PageContext::new(
      PageConfig::default(),
      Some("   ".to_string())
    );
    assert_eq!(ctx.csrf_token, None);
  }
}
