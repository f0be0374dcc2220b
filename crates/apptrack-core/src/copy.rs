pub const COPIED_LABEL_HTML: &str =
  "<i class=\"fas fa-check\"></i> \
   Copied!";
pub const IDLE_CLASS: &str =
  "btn-outline-secondary";
pub const COPIED_CLASS: &str =
  "btn-success";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CopyPhase {
  Copied,
  Reverted
}

impl CopyPhase {
  /// `(remove, add)` class pair for the
  /// button entering this phase.
  pub fn class_swap(
    self
  ) -> (&'static str, &'static str) {
    match self {
      | Self::Copied => {
        (IDLE_CLASS, COPIED_CLASS)
      }
      | Self::Reverted => {
        (COPIED_CLASS, IDLE_CLASS)
      }
    }
  }
}

/// Remembers the label a copy button had
/// before the confirmation swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
  original_html: String
}

impl CopyFeedback {
  pub fn capture(
    original_html: String
  ) -> Self {
    Self { original_html }
  }

  pub fn copied_html(
    &self
  ) -> &'static str {
    COPIED_LABEL_HTML
  }

  pub fn revert_html(&self) -> &str {
    &self.original_html
  }
}
