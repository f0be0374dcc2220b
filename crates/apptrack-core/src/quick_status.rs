use apptrack_shared::{
  QuickStatusResponse,
  status_color
};
use tracing::{
  debug,
  warn
};

use crate::alert::Alert;
use crate::contract::{
  QuickStatusTarget,
  status_badge_id
};
use crate::ticket::{
  Ticket,
  TicketBook
};

/// DOM changes for a confirmed status
/// change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
  pub badge_id:    String,
  pub badge_text:  String,
  pub badge_class: String,
  pub alert:       Alert
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickStatusOutcome {
  Apply(StatusUpdate),
  Failed(String),
  /// A newer request for the same
  /// application was issued meanwhile.
  Stale
}

impl QuickStatusOutcome {
  /// Banner for the failure path, when
  /// the page opted into reporting it.
  pub fn failure_alert(
    &self,
    report_errors: bool
  ) -> Option<Alert> {
    match self {
      | Self::Failed(reason)
        if report_errors =>
      {
        Some(Alert::danger(format!(
          "Status update failed: {reason}"
        )))
      }
      | _ => None
    }
  }
}

/// One in-flight ticket per application
/// so responses cannot land out of order.
#[derive(Debug, Default)]
pub struct QuickStatusTracker {
  tickets: TicketBook<u64>
}

impl QuickStatusTracker {
  pub fn begin(
    &mut self,
    target: &QuickStatusTarget
  ) -> Ticket {
    let ticket = self
      .tickets
      .issue(target.application_id);
    debug!(
      application_id =
        target.application_id,
      status = %target.status,
      ?ticket,
      "quick status request issued"
    );
    ticket
  }

  pub fn finish(
    &mut self,
    target: &QuickStatusTarget,
    ticket: Ticket,
    response: Result<
      QuickStatusResponse,
      String
    >
  ) -> QuickStatusOutcome {
    if !self.tickets.settle(
      &target.application_id,
      ticket
    ) {
      debug!(
        application_id =
          target.application_id,
        ?ticket,
        "dropping stale quick status \
         response"
      );
      return QuickStatusOutcome::Stale;
    }

    let outcome = resolve(target, response);
    if let QuickStatusOutcome::Failed(
      reason
    ) = &outcome
    {
      warn!(
        application_id =
          target.application_id,
        reason = %reason,
        "quick status update failed"
      );
    }
    outcome
  }

  pub fn in_flight(&self) -> usize {
    self.tickets.in_flight()
  }
}

pub fn resolve(
  target: &QuickStatusTarget,
  response: Result<
    QuickStatusResponse,
    String
  >
) -> QuickStatusOutcome {
  let response = match response {
    | Ok(response) => response,
    | Err(error) => {
      return QuickStatusOutcome::Failed(
        error
      );
    }
  };

  if !response.success {
    return QuickStatusOutcome::Failed(
      response.error.unwrap_or_else(
        || {
          "server reported failure"
            .to_string()
        }
      )
    );
  }

  let status = response
    .new_status
    .filter(|s| !s.trim().is_empty())
    .unwrap_or_else(|| {
      target.status.clone()
    });
  let color = if response
    .status_color
    .trim()
    .is_empty()
  {
    status_color(&status).to_string()
  } else {
    response.status_color
  };

  QuickStatusOutcome::Apply(
    StatusUpdate {
      badge_id:    status_badge_id(
        target.application_id
      ),
      badge_class: format!(
        "badge bg-{color}"
      ),
      alert:       Alert::success(
        format!(
          "Status updated to {status}"
        )
      ),
      badge_text:  status
    }
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn target(
    id: u64,
    status: &str
  ) -> QuickStatusTarget {
    QuickStatusTarget {
      application_id: id,
      status:         status.to_string()
    }
  }

  fn ok(color: &str) -> QuickStatusResponse {
    QuickStatusResponse {
      success:      true,
      status_color: color.to_string(),
      new_status:   None,
      error:        None
    }
  }

  #[test]
  fn success_updates_badge_and_alerts() {
    let outcome = resolve(
      &target(5, "Rejected"),
      Ok(ok("danger"))
    );
    let QuickStatusOutcome::Apply(update) =
      outcome
    else {
      panic!("expected apply");
    };
    assert_eq!(
      update.badge_id,
      "status-badge-5"
    );
    assert_eq!(update.badge_text, "Rejected");
    assert_eq!(
      update.badge_class,
      "badge bg-danger"
    );
    assert_eq!(
      update.alert,
      Alert::success(
        "Status updated to Rejected"
      )
    );
  }

  #[test]
  fn server_status_and_color_fallbacks() {
    let mut response = ok("");
    response.new_status =
      Some("Offer".to_string());
    let outcome = resolve(
      &target(1, "Interview"),
      Ok(response)
    );
    let QuickStatusOutcome::Apply(update) =
      outcome
    else {
      panic!("expected apply");
    };
    assert_eq!(update.badge_text, "Offer");
    assert_eq!(
      update.badge_class,
      "badge bg-success"
    );
  }

  #[test]
  fn failures_are_reported_only_when_enabled(
  ) {
    let outcome = resolve(
      &target(1, "Offer"),
      Ok(QuickStatusResponse {
        success: false,
        error: Some(
          "Access denied".to_string()
        ),
        ..QuickStatusResponse::default()
      })
    );
    assert_eq!(
      outcome,
      QuickStatusOutcome::Failed(
        "Access denied".to_string()
      )
    );
    assert_eq!(
      outcome.failure_alert(false),
      None
    );
    assert_eq!(
      outcome.failure_alert(true),
      Some(Alert::danger(
        "Status update failed: Access \
         denied"
      ))
    );

    let network = resolve(
      &target(1, "Offer"),
      Err("request error".to_string())
    );
    assert!(matches!(
      network,
      QuickStatusOutcome::Failed(_)
    ));
  }

  #[test]
  fn stale_responses_never_apply() {
    let mut tracker =
      QuickStatusTracker::default();
    let first_target = target(9, "Offer");
    let second_target =
      target(9, "Rejected");
    let first =
      tracker.begin(&first_target);
    let second =
      tracker.begin(&second_target);

    let late = tracker.finish(
      &second_target,
      second,
      Ok(ok("danger"))
    );
    assert!(matches!(
      late,
      QuickStatusOutcome::Apply(_)
    ));

    let stale = tracker.finish(
      &first_target,
      first,
      Ok(ok("success"))
    );
    assert_eq!(
      stale,
      QuickStatusOutcome::Stale
    );
    assert_eq!(tracker.in_flight(), 0);
  }

  #[test]
  fn different_applications_do_not_interfere(
  ) {
    let mut tracker =
      QuickStatusTracker::default();
    let a = target(1, "Offer");
    let b = target(2, "Submitted");
    let ta = tracker.begin(&a);
    let tb = tracker.begin(&b);
    let first = tracker.finish(
      &a,
      ta,
      Ok(ok("success"))
    );
    let second = tracker.finish(
      &b,
      tb,
      Ok(ok("primary"))
    );
    assert!(matches!(
      first,
      QuickStatusOutcome::Apply(_)
    ));
    assert!(matches!(
      second,
      QuickStatusOutcome::Apply(_)
    ));
  }
}
