use serde::{
  Deserialize,
  Serialize
};

/// Fallback badge color for labels
/// outside the known vocabulary.
pub const DEFAULT_STATUS_COLOR: &str =
  "secondary";

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
pub enum ApplicationStatus {
  #[serde(rename = "Not Started")]
  NotStarted,
  #[serde(rename = "In Progress")]
  InProgress,
  Submitted,
  Interview,
  Offer,
  Accepted,
  Rejected,
  Waitlisted,
  Withdrawn
}

impl ApplicationStatus {
  pub const ALL: [Self; 9] = [
    Self::NotStarted,
    Self::InProgress,
    Self::Submitted,
    Self::Interview,
    Self::Offer,
    Self::Accepted,
    Self::Rejected,
    Self::Waitlisted,
    Self::Withdrawn
  ];

  pub fn label(self) -> &'static str {
    match self {
      | Self::NotStarted => {
        "Not Started"
      }
      | Self::InProgress => {
        "In Progress"
      }
      | Self::Submitted => "Submitted",
      | Self::Interview => "Interview",
      | Self::Offer => "Offer",
      | Self::Accepted => "Accepted",
      | Self::Rejected => "Rejected",
      | Self::Waitlisted => {
        "Waitlisted"
      }
      | Self::Withdrawn => "Withdrawn"
    }
  }

  /// Exact, case-sensitive match on the
  /// label the server renders.
  pub fn from_label(
    label: &str
  ) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|status| {
        status.label() == label
      })
  }

  /// Bootstrap color keyword used for
  /// `badge bg-<color>`.
  pub fn color(self) -> &'static str {
    match self {
      | Self::NotStarted
      | Self::Withdrawn => "secondary",
      | Self::InProgress => "info",
      | Self::Submitted => "primary",
      | Self::Interview
      | Self::Waitlisted => "warning",
      | Self::Offer | Self::Accepted => {
        "success"
      }
      | Self::Rejected => "danger"
    }
  }

  /// Terminal transitions ask the user
  /// before the form is submitted.
  pub fn requires_confirmation(
    self
  ) -> bool {
    matches!(
      self,
      Self::Rejected | Self::Withdrawn
    )
  }
}

impl std::fmt::Display
  for ApplicationStatus
{
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>
  ) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

pub fn status_color(
  label: &str
) -> &'static str {
  ApplicationStatus::from_label(label)
    .map(ApplicationStatus::color)
    .unwrap_or(DEFAULT_STATUS_COLOR)
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct QuickStatusRequest {
  pub status: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct QuickStatusResponse {
  #[serde(default)]
  pub success:      bool,
  #[serde(default)]
  pub status_color: String,
  #[serde(default)]
  pub new_status:   Option<String>,
  #[serde(default)]
  pub error:        Option<String>
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn labels_match_server_vocabulary() {
    for status in ApplicationStatus::ALL
    {
      assert_eq!(
        ApplicationStatus::from_label(
          status.label()
        ),
        Some(status)
      );
    }
    assert_eq!(
      ApplicationStatus::from_label(
        "rejected"
      ),
      None
    );
  }

  #[test]
  fn serde_uses_display_labels() {
    let json = serde_json::to_string(
      &ApplicationStatus::NotStarted
    )
    .expect("serialize status");
    assert_eq!(json, "\"Not Started\"");

    let parsed: ApplicationStatus =
      serde_json::from_str(
        "\"In Progress\""
      )
      .expect("parse status");
    assert_eq!(
      parsed,
      ApplicationStatus::InProgress
    );
  }

  #[test]
  fn unknown_labels_fall_back_to_secondary(
  ) {
    assert_eq!(
      status_color("Rejected"),
      "danger"
    );
    assert_eq!(
      status_color("Archived"),
      DEFAULT_STATUS_COLOR
    );
  }

  #[test]
  fn only_terminal_statuses_need_confirmation(
  ) {
    let confirmed: Vec<_> =
      ApplicationStatus::ALL
        .into_iter()
        .filter(|status| {
          status.requires_confirmation()
        })
        .collect();
    assert_eq!(
      confirmed,
      vec![
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn
      ]
    );
  }

  #[test]
  fn response_tolerates_missing_fields() {
    let response: QuickStatusResponse =
      serde_json::from_str(
        r#"{
          "success": true,
          "status_color": "danger"
        }"#
      )
      .expect("parse response");
    assert!(response.success);
    assert_eq!(
      response.status_color,
      "danger"
    );
    assert_eq!(response.new_status, None);

    let empty: QuickStatusResponse =
      serde_json::from_str("{}")
        .expect("parse empty response");
    assert!(!empty.success);
  }

  #[test]
  fn request_body_has_single_status_field(
  ) {
    let body = serde_json::to_value(
      QuickStatusRequest {
        status: "Offer".to_string()
      }
    )
    .expect("serialize request");
    assert_eq!(
      body,
      serde_json::json!({
        "status": "Offer"
      })
    );
  }
}
