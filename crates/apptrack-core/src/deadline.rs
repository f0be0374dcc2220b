use std::num::IntErrorKind;

use chrono::NaiveDate;
use regex::Regex;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DeadlineUrgency {
  Overdue,
  Imminent,
  Approaching,
  Relaxed
}

impl DeadlineUrgency {
  pub fn classify(
    days_remaining: i64
  ) -> Self {
    match days_remaining {
      | d if d < 0 => Self::Overdue,
      | 0..=3 => Self::Imminent,
      | 4..=7 => Self::Approaching,
      | _ => Self::Relaxed
    }
  }

  /// Classes added to the cell; empty
  /// when nothing should change.
  pub fn css_classes(
    self
  ) -> &'static [&'static str] {
    match self {
      | Self::Overdue => {
        &["text-danger", "fw-bold"]
      }
      | Self::Imminent => {
        &["text-danger"]
      }
      | Self::Approaching => {
        &["text-warning"]
      }
      | Self::Relaxed => &[]
    }
  }
}

/// Reads a `data-deadline` value the way
/// `parseInt` would: leading whitespace
/// and sign, then digits, trailing text
/// ignored. Out-of-range values clamp
/// to the `i64` bounds so they keep
/// their sign.
pub fn parse_days_attribute(
  raw: &str
) -> Option<i64> {
  let leading_re =
    Regex::new(r"^\s*(?P<days>[+-]?[0-9]+)")
      .ok()?;
  let captures =
    leading_re.captures(raw)?;

  let digits =
    captures.name("days")?.as_str();

  match digits.parse::<i64>() {
    | Ok(days) => Some(days),
    | Err(error) => {
      match error.kind() {
        | IntErrorKind::PosOverflow => {
          Some(i64::MAX)
        }
        | IntErrorKind::NegOverflow => {
          Some(i64::MIN)
        }
        | _ => None
      }
    }
  }
}

pub fn urgency_for_attribute(
  raw: &str
) -> Option<DeadlineUrgency> {
  parse_days_attribute(raw)
    .map(DeadlineUrgency::classify)
}

pub fn days_remaining(
  deadline: NaiveDate,
  today: NaiveDate
) -> i64 {
  (deadline - today).num_days()
}
