// Search module - debounced query matching
//
// Typing in the journal filter shouldn't re-scan the log buffer on every
// keystroke. The debouncer records the last edit instant and reports ready
// exactly once after a quiet period; the match itself is a case-insensitive
// substring test. Both halves take explicit instants so behavior is testable
// without sleeping.

use std::time::{Duration, Instant};

/// Default quiet period before a pending query is applied.
pub const DEFAULT_QUIET: Duration = Duration::from_millis(300);

/// Tracks edits to a query and fires once the typing pauses.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    /// Set on every edit, cleared when the pause fires.
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending_since: None,
        }
    }

    /// An edit happened; (re)start the quiet period.
    pub fn touch(&mut self) {
        self.touch_at(Instant::now());
    }

    pub fn touch_at(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    /// True while an edit is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Poll from the frame tick: returns true exactly once per burst of
    /// edits, after the quiet period has passed.
    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    pub fn ready_at(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.saturating_duration_since(since) >= self.quiet => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET)
    }
}

/// Case-insensitive substring match. An empty (or all-whitespace) query
/// matches everything, so a cleared filter shows the full list.
pub fn matches(query: &str, haystack: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}
