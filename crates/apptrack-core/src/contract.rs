//! Selectors, class names and data
//! attributes the server template is
//! expected to render.

use anyhow::{
  Context,
  anyhow
};

pub const DISMISSIBLE_ALERTS: &str =
  ".alert:not(.alert-permanent)";
pub const VALIDATED_FORMS: &str =
  ".needs-validation";
pub const VALIDATED_CLASS: &str =
  "was-validated";
pub const TOOLTIP_TRIGGERS: &str =
  "[data-bs-toggle=\"tooltip\"]";
pub const POPOVER_TRIGGERS: &str =
  "[data-bs-toggle=\"popover\"]";
pub const AUTOFOCUS_CANDIDATES: &str =
  "form input[type=\"text\"], form \
   input[type=\"email\"], form \
   input[type=\"password\"]";
pub const DEADLINE_CELLS: &str =
  "[data-deadline]";
pub const STATUS_FORMS: &str =
  ".status-update-form";
pub const STATUS_SELECT: &str = "select";
pub const COPY_BUTTONS: &str =
  ".btn-copy";
pub const QUICK_STATUS_BUTTONS: &str =
  ".quick-status-btn";

pub const ATTR_DEADLINE: &str =
  "data-deadline";
pub const ATTR_CURRENT_STATUS: &str =
  "data-current-status";
pub const ATTR_APPLICATION_ID: &str =
  "data-application-id";
pub const ATTR_STATUS: &str =
  "data-status";
pub const ATTR_COPY: &str = "data-copy";

pub fn status_badge_id(
  application_id: u64
) -> String {
  format!("status-badge-{application_id}")
}

/// What a quick-status button asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickStatusTarget {
  pub application_id: u64,
  pub status:         String
}

impl QuickStatusTarget {
  pub fn from_attributes(
    application_id: Option<String>,
    status: Option<String>
  ) -> anyhow::Result<Self> {
    let raw_id =
      application_id.ok_or_else(|| {
        anyhow!(
          "missing {ATTR_APPLICATION_ID}"
        )
      })?;
    let application_id = raw_id
      .trim()
      .parse::<u64>()
      .with_context(|| {
        format!(
          "invalid {ATTR_APPLICATION_ID}: \
           {raw_id}"
        )
      })?;
    let status = status
      .filter(|s| !s.trim().is_empty())
      .ok_or_else(|| {
        anyhow!("missing {ATTR_STATUS}")
      })?;

    Ok(Self {
      application_id,
      status
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn badge_ids_follow_template_naming() {
    assert_eq!(
      status_badge_id(7),
      "status-badge-7"
    );
  }

  #[test]
  fn quick_status_target_requires_both_attributes(
  ) {
    let target =
      QuickStatusTarget::from_attributes(
        Some(" 12 ".to_string()),
        Some("Offer".to_string())
      )
      .expect("valid target");
    assert_eq!(target.application_id, 12);
    assert_eq!(target.status, "Offer");

    assert!(
      QuickStatusTarget::from_attributes(
        None,
        Some("Offer".to_string())
      )
      .is_err()
    );
    assert!(
      QuickStatusTarget::from_attributes(
        Some("abc".to_string()),
        Some("Offer".to_string())
      )
      .is_err()
    );
    assert!(
      QuickStatusTarget::from_attributes(
        Some("3".to_string()),
        Some(" ".to_string())
      )
      .is_err()
    );
  }
}
