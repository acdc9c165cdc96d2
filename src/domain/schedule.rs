//! Start-time policy for scheduled matches.
//!
//! The game service triggers simulation once wall-clock time passes
//! `startAt`. Backdating the start makes a fresh match eligible right away.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

/// Offset the game service expects start times in.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 2;

/// How far in the past a new match starts.
pub const DEFAULT_BACKDATE_MINUTES: i64 = 5;

/// Largest accepted backdate: one week.
pub const MAX_BACKDATE_MINUTES: i64 = 7 * 24 * 60;

const SECONDS_PER_HOUR: i32 = 3600;

/// Computes `startAt` for new matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulePolicy {
    offset: FixedOffset,
    backdate: TimeDelta,
}

impl SchedulePolicy {
    /// Build a policy. Returns `None` for an offset chrono cannot represent
    /// (beyond ±24h) or a backdate outside `0..=MAX_BACKDATE_MINUTES`.
    #[must_use]
    pub fn new(utc_offset_hours: i32, backdate_minutes: i64) -> Option<Self> {
        if !(0..=MAX_BACKDATE_MINUTES).contains(&backdate_minutes) {
            return None;
        }
        let offset = FixedOffset::east_opt(utc_offset_hours.checked_mul(SECONDS_PER_HOUR)?)?;
        let backdate = TimeDelta::try_minutes(backdate_minutes)?;
        Some(Self { offset, backdate })
    }

    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    #[must_use]
    pub const fn backdate(&self) -> TimeDelta {
        self.backdate
    }

    /// Start time for a match created at `now`. `None` when the result
    /// falls outside chrono's date range.
    #[must_use]
    pub fn start_at(&self, now: DateTime<Utc>) -> Option<DateTime<FixedOffset>> {
        now.with_timezone(&self.offset)
            .checked_sub_signed(self.backdate)
    }
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_UTC_OFFSET_HOURS, DEFAULT_BACKDATE_MINUTES)
            .expect("default schedule constants are in range")
    }
}
