use apptrack_shared::ApplicationStatus;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
  /// Same status as rendered; the submit
  /// is dropped without a prompt.
  Cancel,
  /// Ask the user first; declining
  /// cancels the submit.
  Confirm(String),
  Proceed
}

pub fn confirmation_prompt(
  status: &str
) -> String {
  format!(
    "Are you sure you want to mark this \
     application as {status}?"
  )
}

pub fn evaluate(
  current: Option<&str>,
  requested: &str
) -> GateDecision {
  if current == Some(requested) {
    debug!(
      status = requested,
      "status unchanged; cancelling \
       submit"
    );
    return GateDecision::Cancel;
  }

  match ApplicationStatus::from_label(
    requested
  ) {
    | Some(status)
      if status.requires_confirmation() =>
    {
      GateDecision::Confirm(
        confirmation_prompt(
          status.label()
        )
      )
    }
    | _ => GateDecision::Proceed
  }
}

/// Folds the user's answer into the
/// final decision to let the form submit.
pub fn allows_submit(
  decision: &GateDecision,
  confirm: impl FnOnce(&str) -> bool
) -> bool {
  match decision {
    | GateDecision::Cancel => false,
    | GateDecision::Confirm(prompt) => {
      confirm(prompt)
    }
    | GateDecision::Proceed => true
  }
}
