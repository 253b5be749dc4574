//! Stale-response guard for page fetches.
//!
//! Every fetch takes a token from the page's tracker before awaiting. When
//! the response arrives it is only applied if no newer fetch has started
//! since, so switching tabs quickly can never leave an older payload on screen.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generation: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every earlier token.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Invalidate any in-flight request without starting a new one (page unmount).
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// `Some(value)` if `token` is still current, `None` if it went stale.
    pub fn accept<T>(&self, token: RequestToken, value: T) -> Option<T> {
        self.is_current(token).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_is_current() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let tracker = RequestTracker::new();
        let weekly = tracker.begin();
        let monthly = tracker.begin();

        // Monthly resolves first, then the slow weekly response arrives.
        assert_eq!(tracker.accept(monthly, "monthly"), Some("monthly"));
        assert_eq!(tracker.accept(weekly, "weekly"), None);
    }

    #[test]
    fn test_clones_share_generation() {
        let page = RequestTracker::new();
        let task = page.clone();
        let token = task.begin();
        page.begin();
        assert!(!task.is_current(token));
    }

    #[test]
    fn test_cancel_invalidates_in_flight() {
        let tracker = RequestTracker::new();
        let token = tracker.begin();
        tracker.cancel();
        assert!(tracker.accept(token, ()).is_none());
    }
}
