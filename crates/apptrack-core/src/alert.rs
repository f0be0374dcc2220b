#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum AlertKind {
  Success,
  Danger
}

impl AlertKind {
  fn color(self) -> &'static str {
    match self {
      | Self::Success => "success",
      | Self::Danger => "danger"
    }
  }
}

pub const DISMISS_BUTTON_CLASS: &str =
  "btn-close";
pub const DISMISS_ATTRIBUTE: &str =
  "data-bs-dismiss";
pub const DISMISS_TARGET: &str = "alert";

/// A dismissible banner prepended to the
/// page container. The message is set as
/// text, never as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
  pub kind:    AlertKind,
  pub message: String
}

impl Alert {
  pub fn success(
    message: impl Into<String>
  ) -> Self {
    Self {
      kind:    AlertKind::Success,
      message: message.into()
    }
  }

  pub fn danger(
    message: impl Into<String>
  ) -> Self {
    Self {
      kind:    AlertKind::Danger,
      message: message.into()
    }
  }

  pub fn class_name(&self) -> String {
    format!(
      "alert alert-{} alert-dismissible \
       fade show",
      self.kind.color()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn class_names_are_bootstrap_dismissible(
  ) {
    assert_eq!(
      Alert::success("ok").class_name(),
      "alert alert-success \
       alert-dismissible fade show"
    );
    assert_eq!(
      Alert::danger("no").class_name(),
      "alert alert-danger \
       alert-dismissible fade show"
    );
  }
}
