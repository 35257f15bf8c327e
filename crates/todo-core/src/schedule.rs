//! One-shot deferred work with cancellation.
//!
//! The store hands out a [`ScheduledRemoval`] when a row starts
//! disappearing. Whoever owns the event loop runs it after
//! [`ScheduledRemoval::delay`]: the browser through a `gloo` timeout, tests
//! through [`ManualTimers`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
  cancelled: Rc<Cell<bool>>
}

impl CancelToken {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn cancel(&self) {
    self.cancelled.set(true);
  }

  pub fn is_cancelled(&self) -> bool {
    self.cancelled.get()
  }

  pub fn same_as(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.cancelled, &other.cancelled)
  }
}

#[derive(Debug, Clone)]
pub struct ScheduledRemoval {
  pub id:    String,
  pub delay: Duration,
  token:     CancelToken
}

impl ScheduledRemoval {
  pub fn new(
    id: String,
    delay: Duration,
    token: CancelToken
  ) -> Self {
    Self {
      id,
      delay,
      token
    }
  }

  pub fn token(&self) -> &CancelToken {
    &self.token
  }

  pub fn is_cancelled(&self) -> bool {
    self.token.is_cancelled()
  }
}

/// Virtual clock for deferred removals. Nothing fires until
/// [`ManualTimers::advance`] moves time past an entry's deadline.
#[derive(Debug, Default)]
pub struct ManualTimers {
  now:     Duration,
  entries: Vec<(Duration, ScheduledRemoval)>
}

impl ManualTimers {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn schedule(
    &mut self,
    removal: ScheduledRemoval
  ) {
    let due = self.now + removal.delay;
    self.entries.push((due, removal));
  }

  pub fn pending(&self) -> usize {
    self.entries.len()
  }

  /// Moves the clock forward and returns every removal that came due, in
  /// deadline order. Cancelled removals are still returned; the store
  /// decides what a cancelled removal means.
  pub fn advance(
    &mut self,
    by: Duration
  ) -> Vec<ScheduledRemoval> {
    self.now += by;
    let now = self.now;

    let (mut due, waiting): (Vec<_>, Vec<_>) =
      self
        .entries
        .drain(..)
        .partition(|(at, _)| *at <= now);
    self.entries = waiting;

    due.sort_by_key(|(at, _)| *at);
    due
      .into_iter()
      .map(|(_, removal)| removal)
      .collect()
  }
}
