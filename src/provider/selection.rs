//! Debounce and suppression for selection-changed notifications
//!
//! Jumping to an occurrence moves selections itself, and every such move
//! comes back as another notification. The gate delays acting on a click
//! until the UI has settled, then ignores everything for a short while so
//! its own echoes are dropped instead of handled.
//!
//! Time is passed in by the caller, which keeps the gate independent of any
//! particular event loop.

use std::time::{Duration, Instant};

/// Wait before acting on a selection
pub const SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Notifications dropped after acting
pub const SUPPRESS_WINDOW: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
enum GateState {
    Idle,
    Pending { due: Instant, target: String },
    Suppressed { until: Instant },
}

#[derive(Debug, Clone)]
pub struct SelectionGate {
    state: GateState,
    settle: Duration,
    suppress: Duration,
}

impl Default for SelectionGate {
    fn default() -> Self {
        Self::new(SETTLE_DELAY, SUPPRESS_WINDOW)
    }
}

impl SelectionGate {
    pub fn new(settle: Duration, suppress: Duration) -> Self {
        Self {
            state: GateState::Idle,
            settle,
            suppress,
        }
    }

    /// Offer a notification for `target`. Returns false when it was dropped.
    pub fn notify(&mut self, target: &str, now: Instant) -> bool {
        self.expire(now);
        match self.state {
            GateState::Idle => {
                self.state = GateState::Pending {
                    due: now + self.settle,
                    target: target.to_string(),
                };
                true
            }
            GateState::Pending { .. } | GateState::Suppressed { .. } => false,
        }
    }

    /// Release the pending target once its delay has passed.
    ///
    /// Releasing starts the suppression window.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        self.expire(now);
        let due = match &self.state {
            GateState::Pending { due, .. } => *due,
            _ => return None,
        };
        if due > now {
            return None;
        }

        let released = std::mem::replace(
            &mut self.state,
            GateState::Suppressed {
                until: now + self.suppress,
            },
        );
        match released {
            GateState::Pending { target, .. } => Some(target),
            _ => None,
        }
    }

    /// When the host should call [`SelectionGate::poll`] next
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.state {
            GateState::Pending { due, .. } => Some(*due),
            GateState::Suppressed { until } => Some(*until),
            GateState::Idle => None,
        }
    }

    pub fn is_busy(&self, now: Instant) -> bool {
        match &self.state {
            GateState::Idle => false,
            GateState::Pending { .. } => true,
            GateState::Suppressed { until } => now < *until,
        }
    }

    fn expire(&mut self, now: Instant) {
        if let GateState::Suppressed { until } = self.state {
            if now >= until {
                self.state = GateState::Idle;
            }
        }
    }
}
