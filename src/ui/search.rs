//! Keystroke debouncing for interactive search.

use std::time::{Duration, Instant};

use crate::constants::search::DEBOUNCE_MS;

/// Holds the latest typed query and releases it once input has been quiet
/// for the debounce window. Time is injected so tests need no sleeping.
pub struct SearchDebouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
    committed: String,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            committed: String::new(),
        }
    }

    /// Records a keystroke. Each call restarts the quiet-period timer.
    pub fn update(&mut self, query: &str, now: Instant) {
        self.pending = Some((query.to_string(), now));
    }

    /// Returns the query to commit once the window has elapsed since the
    /// last keystroke, at most once per typed query.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let (query, typed_at) = self.pending.as_ref()?;
        if now.duration_since(*typed_at) < self.window {
            return None;
        }
        let query = query.clone();
        self.pending = None;
        self.committed = query.clone();
        Some(query)
    }

    /// The last committed query.
    pub fn current(&self) -> &str {
        &self.committed
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_query_until_window_elapses() {
        let mut debouncer = SearchDebouncer::with_window(Duration::from_millis(500));
        let t0 = Instant::now();
        debouncer.update("tbi", t0);
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(200)), None);
        assert_eq!(
            debouncer.poll(t0 + Duration::from_millis(500)),
            Some("tbi".to_string())
        );
        // Committed once; nothing further to release
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(900)), None);
        assert_eq!(debouncer.current(), "tbi");
    }

    #[test]
    fn test_new_keystroke_restarts_the_window() {
        let mut debouncer = SearchDebouncer::with_window(Duration::from_millis(500));
        let t0 = Instant::now();
        debouncer.update("t", t0);
        debouncer.update("tb", t0 + Duration::from_millis(400));
        // 500ms after the first keystroke but only 100ms after the second
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(500)), None);
        assert_eq!(
            debouncer.poll(t0 + Duration::from_millis(900)),
            Some("tb".to_string())
        );
    }

    #[test]
    fn test_idle_debouncer_releases_nothing() {
        let mut debouncer = SearchDebouncer::new();
        assert_eq!(debouncer.poll(Instant::now()), None);
        assert_eq!(debouncer.current(), "");
    }
}
