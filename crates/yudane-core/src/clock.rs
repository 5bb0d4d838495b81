//! Date and time sources.
//!
//! Days are local calendar days: the seal breaks and streaks advance at local
//! midnight.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{YudaneError, YudaneResult};

/// Source of the current local date and time.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    /// Pin the clock to an exact instant.
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Pin the clock to noon on the given day.
    pub fn on(date: NaiveDate) -> Self {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
        Self::at(date.and_time(noon))
    }

    /// Move the clock forward by whole days.
    pub fn advance_days(&mut self, days: i64) {
        self.now += TimeDelta::days(days);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> YudaneResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| YudaneError::InvalidDate(s.to_string()))
}

/// Time left until the next local midnight.
pub fn time_until_midnight(now: NaiveDateTime) -> TimeDelta {
    now.date()
        .succ_opt()
        .map(|tomorrow| tomorrow.and_time(NaiveTime::MIN) - now)
        .unwrap_or_else(TimeDelta::zero)
}

/// Format a duration as `HH:MM:SS`. Negative durations show as zero.
pub fn format_countdown(remaining: TimeDelta) -> String {
    let total = remaining.num_seconds().max(0);
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
