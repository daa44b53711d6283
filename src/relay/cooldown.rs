use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

const COOLDOWN_WINDOW_MS: i64 = 10 * 60 * 1000;

/// Minimum interval between notifications for the same pull request number.
pub fn cooldown_window() -> Duration {
    Duration::milliseconds(COOLDOWN_WINDOW_MS)
}

/// Tracks when each pull request was last announced, so that rapid series of
/// events for the same pull request (pushes, review requests, label churn)
/// collapse into a single notification per window.
///
/// Entries are never removed; the map grows for the lifetime of the process,
/// which is acceptable because all state is reset on restart.
///
/// Known limitation: keyed by pull request number alone, so two repositories
/// with colliding numbers share a cooldown window.
#[derive(Debug, Default)]
pub struct CooldownTracker {
    last_notified: HashMap<u64, DateTime<Utc>>,
}

impl CooldownTracker {
    /// Returns true if a notification for this pull request was already sent
    /// within the cooldown window.
    pub fn should_suppress(&self, pr_number: u64, now: DateTime<Utc>) -> bool {
        self.last_notified
            .get(&pr_number)
            .is_some_and(|last| *last + cooldown_window() > now)
    }

    /// Records that a notification is being sent now.
    ///
    /// Must only be called after `should_suppress` returned false, so that
    /// suppressed events do not extend the window. No await point may occur
    /// between the check and this call.
    pub fn record_notification(&mut self, pr_number: u64, now: DateTime<Utc>) {
        self.last_notified.insert(pr_number, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    #[test]
    fn first_notification_is_not_suppressed() {
        let tracker = CooldownTracker::default();
        assert!(!tracker.should_suppress(42, at(0)));
    }

    #[test]
    fn repeat_within_window_is_suppressed() {
        let mut tracker = CooldownTracker::default();
        tracker.record_notification(42, at(0));
        assert!(tracker.should_suppress(42, at(5)));
        assert!(tracker.should_suppress(42, at(9)));
    }

    #[test]
    fn repeat_after_window_is_allowed() {
        let mut tracker = CooldownTracker::default();
        tracker.record_notification(42, at(0));
        assert!(!tracker.should_suppress(42, at(10)));
    }

    #[test]
    fn windows_are_tracked_per_pull_request() {
        let mut tracker = CooldownTracker::default();
        tracker.record_notification(42, at(0));
        assert!(!tracker.should_suppress(43, at(5)));
    }
}
