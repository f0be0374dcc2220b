use tracing::trace;

use crate::ticket::{
  Ticket,
  TicketBook
};

/// Trailing-edge debounce. Every input
/// arms a new ticket; a timer that fires
/// with an older ticket does nothing.
#[derive(Debug)]
pub struct Debouncer {
  delay_ms: u32,
  tickets:  TicketBook<()>
}

impl Debouncer {
  pub fn new(delay_ms: u32) -> Self {
    Self {
      delay_ms,
      tickets: TicketBook::default()
    }
  }

  pub fn delay_ms(&self) -> u32 {
    self.delay_ms
  }

  pub fn arm(&mut self) -> Ticket {
    let ticket = self.tickets.issue(());
    trace!(?ticket, "debounce armed");
    ticket
  }

  /// Called from the timer. True at most
  /// once per pause.
  pub fn fire(
    &mut self,
    ticket: Ticket
  ) -> bool {
    self.tickets.settle(&(), ticket)
  }
}
