//! Search-input debounce.
//!
//! Rapid edits within the window collapse to a single filter pass using
//! only the final value; a newer edit supersedes an older pending one.
//! Time is passed in explicitly so the behavior is testable.

use std::time::{Duration, Instant};

pub struct Debounce {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record an edit. Replaces any pending value and restarts the window.
    pub fn edit(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now));
    }

    /// The pending value once its window has elapsed. Returns at most once
    /// per edit burst.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, at)) if now.duration_since(*at) >= self.window => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Drop any pending edit without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn test_fires_only_after_quiet_period() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(WINDOW);

        debounce.edit("r".to_string(), t0);
        assert_eq!(debounce.poll(t0 + Duration::from_millis(100)), None);
        assert_eq!(
            debounce.poll(t0 + Duration::from_millis(300)),
            Some("r".to_string())
        );
    }

    #[test]
    fn test_rapid_edits_collapse_to_last_value() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(WINDOW);

        debounce.edit("r".to_string(), t0);
        debounce.edit("ru".to_string(), t0 + Duration::from_millis(50));
        debounce.edit("rus".to_string(), t0 + Duration::from_millis(100));
        debounce.edit("rust".to_string(), t0 + Duration::from_millis(150));

        // Window restarts from the last edit, so nothing fires early.
        assert_eq!(debounce.poll(t0 + Duration::from_millis(300)), None);

        // Exactly one invocation, with the final value.
        assert_eq!(
            debounce.poll(t0 + Duration::from_millis(450)),
            Some("rust".to_string())
        );
        assert_eq!(debounce.poll(t0 + Duration::from_millis(900)), None);
    }

    #[test]
    fn test_cancel_discards_pending_edit() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(WINDOW);

        debounce.edit("stale".to_string(), t0);
        debounce.cancel();
        assert_eq!(debounce.poll(t0 + WINDOW), None);
    }
}
