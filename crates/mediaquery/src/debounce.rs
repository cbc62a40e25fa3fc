//! Trailing-edge debouncer.
//!
//! Each trigger pushes the deadline out to `now + window`. The debouncer fires
//! once the caller polls at or past the deadline, i.e. one window after the
//! last trigger in a burst.

use std::time::{Duration, Instant};

/// Default quiescence window for resize notifications.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record an event, replacing any pending deadline.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Returns true exactly once per burst, when `now` has reached the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_after_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.trigger(start);
        assert!(!debouncer.poll(start + ms(99)));
        assert!(debouncer.poll(start + ms(100)));

        // Fired; nothing pending now
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(start + ms(500)));
    }

    #[test]
    fn test_trigger_resets_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.trigger(start);
        debouncer.trigger(start + ms(60));

        // Would have fired for the first trigger, still inside the second window
        assert!(!debouncer.poll(start + ms(120)));
        assert_eq!(debouncer.deadline(), Some(start + ms(160)));
        assert!(debouncer.poll(start + ms(160)));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(50));

        debouncer.trigger(start);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(start + ms(1000)));
    }

    #[test]
    fn test_no_trigger_never_fires() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.poll(Instant::now() + ms(1000)));
        assert_eq!(debouncer.window(), DEFAULT_WINDOW);
    }
}
