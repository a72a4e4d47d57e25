//! Writing streak state machine
//!
//! Tracks consecutive calendar days with at least one entry creation.
//! The transitions are pure; persisting the record is the repository's
//! concern.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Persisted streak record, lazily created with defaults on first read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreakRecord {
    pub current: u32,
    pub longest: u32,
    pub last_active_date: Option<NaiveDate>,
}

impl StreakRecord {
    /// Register entry-creation activity for `today`.
    ///
    /// Idempotent within a day: multiple entries on the same date do not
    /// inflate the streak. A gap of more than one day resets the count.
    pub fn record_activity(&mut self, today: NaiveDate) {
        if self.last_active_date == Some(today) {
            return;
        }

        let yesterday = today - Duration::days(1);
        if self.last_active_date == Some(yesterday) {
            self.current += 1;
        } else {
            self.current = 1;
        }

        self.last_active_date = Some(today);
        self.longest = self.longest.max(self.current);
    }

    /// Expire the streak if more than one day has passed since the last
    /// activity. Returns true when the record changed and needs persisting.
    ///
    /// `longest` and `last_active_date` are never touched by expiry.
    pub fn check(&mut self, now: NaiveDate) -> bool {
        let Some(last) = self.last_active_date else {
            return false;
        };

        if (now - last).num_days() > 1 && self.current != 0 {
            self.current = 0;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn first_activity_starts_streak() {
        let mut streak = StreakRecord::default();
        streak.record_activity(day(10));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 1);
        assert_eq!(streak.last_active_date, Some(day(10)));
    }

    #[test]
    fn record_activity_is_idempotent_per_day() {
        let mut streak = StreakRecord::default();
        streak.record_activity(day(10));
        let once = streak;
        streak.record_activity(day(10));
        assert_eq!(streak, once);
    }

    #[test]
    fn consecutive_days_extend_streak() {
        let mut streak = StreakRecord::default();
        streak.record_activity(day(10));
        streak.record_activity(day(11));
        streak.record_activity(day(12));
        assert_eq!(streak.current, 3);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn gap_resets_current_streak() {
        let mut streak = StreakRecord::default();
        streak.record_activity(day(10));
        streak.record_activity(day(15));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 1);
    }

    #[test]
    fn longest_survives_reset() {
        let mut streak = StreakRecord::default();
        for d in 10..=12 {
            streak.record_activity(day(d));
        }
        streak.record_activity(day(20));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn longest_is_non_decreasing() {
        let mut streak = StreakRecord::default();
        let mut max_seen = 0;
        for d in [1, 2, 3, 7, 8, 20, 21, 22, 23] {
            streak.record_activity(day(d));
            assert!(streak.longest >= max_seen);
            assert!(streak.longest >= streak.current);
            max_seen = streak.longest;
        }
    }

    #[test]
    fn check_expires_after_gap() {
        let mut streak = StreakRecord::default();
        streak.record_activity(day(10));
        let changed = streak.check(day(13));
        assert!(changed);
        assert_eq!(streak.current, 0);
        assert_eq!(streak.longest, 1);
        assert_eq!(streak.last_active_date, Some(day(10)));
    }

    #[test]
    fn check_keeps_streak_within_grace() {
        let mut streak = StreakRecord::default();
        streak.record_activity(day(10));

        assert!(!streak.check(day(10)));
        assert_eq!(streak.current, 1);

        // Yesterday's activity still counts
        assert!(!streak.check(day(11)));
        assert_eq!(streak.current, 1);
    }

    #[test]
    fn check_without_prior_activity_is_noop() {
        let mut streak = StreakRecord::default();
        assert!(!streak.check(day(10)));
        assert_eq!(streak, StreakRecord::default());
    }

    #[test]
    fn check_on_expired_streak_reports_no_change() {
        let mut streak = StreakRecord::default();
        streak.record_activity(day(10));
        assert!(streak.check(day(13)));
        // Second check finds nothing left to expire
        assert!(!streak.check(day(14)));
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let mut streak = StreakRecord::default();
        streak.record_activity(day(10));
        let json = serde_json::to_string(&streak).unwrap();
        assert!(json.contains("\"lastActiveDate\""));
    }
}
