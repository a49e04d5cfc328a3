//! Debounce timer for re-parsing quick-entry input.

use std::time::{Duration, Instant};

/// Shortest debounce the quick-entry screen allows.
pub const MIN_DELAY: Duration = Duration::from_millis(300);
/// Longest debounce the quick-entry screen allows.
pub const MAX_DELAY: Duration = Duration::from_millis(800);

/// A cancellable delayed trigger.
///
/// Each [`touch`](Self::touch) pushes the deadline back; [`fire`](Self::fire)
/// reports true once, after the input has been quiet for `delay`. The
/// caller supplies every instant, so the timer is trivially testable.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer, clamping `delay` to the allowed window.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay.clamp(MIN_DELAY, MAX_DELAY),
            deadline: None,
        }
    }

    /// The effective delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm or re-arm the timer.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending trigger.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a trigger is waiting.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the trigger if its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
