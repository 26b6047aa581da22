//! Which major version lines are shown as still active.
//!
//! The release tables only store dates; the `"present"` sentinel is a
//! presentation convention. A line counts as active when its most recent
//! release falls inside a trailing window ending today.

use chrono::{Days, NaiveDate};
use pgtl_core::entities::LastRelease;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentPolicy {
    active_window_days: u32,
}

impl PresentPolicy {
    #[must_use]
    pub const fn new(active_window_days: u32) -> Self {
        Self { active_window_days }
    }

    /// Never substitute `Present`; every lifespan keeps its last release date.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(0)
    }

    #[must_use]
    pub const fn active_window_days(&self) -> u32 {
        self.active_window_days
    }

    /// Map a line's last release date to its displayed end.
    #[must_use]
    pub fn resolve(&self, last_release: NaiveDate, today: NaiveDate) -> LastRelease {
        if self.active_window_days == 0 {
            return LastRelease::On(last_release);
        }
        let cutoff = today
            .checked_sub_days(Days::new(u64::from(self.active_window_days)))
            .unwrap_or(NaiveDate::MIN);
        if last_release >= cutoff {
            LastRelease::Present
        } else {
            LastRelease::On(last_release)
        }
    }
}

impl Default for PresentPolicy {
    fn default() -> Self {
        Self::new(180)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2025, 5, 8), LastRelease::Present)]
    #[case(date(2024, 12, 3), LastRelease::Present)]
    #[case(date(2024, 12, 2), LastRelease::On(date(2024, 12, 2)))]
    #[case(date(2021, 11, 11), LastRelease::On(date(2021, 11, 11)))]
    fn window_boundary(#[case] last: NaiveDate, #[case] expected: LastRelease) {
        // 2025-06-01 minus 180 days is 2024-12-03.
        let policy = PresentPolicy::new(180);
        assert_eq!(policy.resolve(last, date(2025, 6, 1)), expected);
    }

    #[test]
    fn disabled_policy_keeps_dates() {
        let policy = PresentPolicy::disabled();
        assert_eq!(
            policy.resolve(date(2025, 5, 8), date(2025, 6, 1)),
            LastRelease::On(date(2025, 5, 8))
        );
    }
}
