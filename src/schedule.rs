//! Debounced, cooperative scheduling of overflow checks
//!
//! The engine runs single-threaded and event-driven: instead of timers it
//! keeps one pending deadline that the host pumps with the current time.
//! Queueing while a deadline is pending replaces it; nothing is queued behind
//! an active pass.

/// A single-slot debouncer over host-supplied millisecond timestamps
#[derive(Debug, Default)]
pub struct Debouncer {
    /// Deadline of the pending invocation, if any
    pending: Option<u64>,
}

impl Debouncer {
    /// Create an idle debouncer
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an invocation `delay_ms` from `now_ms`, superseding any
    /// pending one
    pub fn queue(&mut self, now_ms: u64, delay_ms: u64) {
        self.pending = Some(now_ms.saturating_add(delay_ms));
    }

    /// Take the pending invocation if its deadline has passed
    pub fn take_ready(&mut self, now_ms: u64) -> bool {
        match self.pending {
            Some(deadline) if now_ms >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Check whether an invocation is pending
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending invocation
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
