use std::collections::HashMap;
use std::hash::Hash;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
  PartialOrd, Ord,
)]
pub struct Ticket(u64);

/// Issues increasing tickets per key.
/// Only the newest ticket for a key may
/// act; older holders must back off.
#[derive(Debug)]
pub struct TicketBook<K> {
  next:   u64,
  latest: HashMap<K, Ticket>
}

impl<K> Default for TicketBook<K> {
  fn default() -> Self {
    Self {
      next:   0,
      latest: HashMap::new()
    }
  }
}

impl<K: Eq + Hash> TicketBook<K> {
  pub fn issue(
    &mut self,
    key: K
  ) -> Ticket {
    self.next += 1;
    let ticket = Ticket(self.next);
    self.latest.insert(key, ticket);
    ticket
  }

  pub fn is_latest(
    &self,
    key: &K,
    ticket: Ticket
  ) -> bool {
    self.latest.get(key) == Some(&ticket)
  }

  /// Clears the key when `ticket` is
  /// still the newest. Returns whether it
  /// was.
  pub fn settle(
    &mut self,
    key: &K,
    ticket: Ticket
  ) -> bool {
    if self.is_latest(key, ticket) {
      self.latest.remove(key);
      true
    } else {
      false
    }
  }

  pub fn in_flight(&self) -> usize {
    self.latest.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn newer_ticket_supersedes_older() {
    let mut book = TicketBook::default();
    let first = book.issue(7_u64);
    let second = book.issue(7_u64);

    assert!(first < second);
    assert!(!book.is_latest(&7, first));
    assert!(book.is_latest(&7, second));
    assert!(!book.settle(&7, first));
    assert!(book.settle(&7, second));
    assert_eq!(book.in_flight(), 0);
  }

  #[test]
  fn keys_are_independent() {
    let mut book = TicketBook::default();
    let a = book.issue("a");
    let b = book.issue("b");
    assert!(book.is_latest(&"a", a));
    assert!(book.is_latest(&"b", b));
    assert_eq!(book.in_flight(), 2);
  }

  #[test]
  fn settled_ticket_is_no_longer_latest() {
    let mut book = TicketBook::default();
    let t = book.issue(1_u64);
    assert!(book.settle(&1, t));
    assert!(!book.is_latest(&1, t));
  }
}
