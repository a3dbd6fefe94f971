//! Campaign clock.
//!
//! The clock is stored as a single count of elapsed hours. The
//! years/months/days/hours breakdown is always derived from that count and is
//! never stored or mutated on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const HOURS_IN_DAY: u64 = 24;
pub const DAYS_IN_MONTH: u64 = 30;
pub const MONTHS_IN_YEAR: u64 = 12;

pub const HOURS_IN_MONTH: u64 = HOURS_IN_DAY * DAYS_IN_MONTH;
pub const HOURS_IN_YEAR: u64 = HOURS_IN_MONTH * MONTHS_IN_YEAR;

/// Normalized breakdown of a clock value, as shown to the user and as written
/// to the `time` field of the persisted state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockParts {
    #[serde(default)]
    pub years: u64,
    #[serde(default)]
    pub months: u64,
    #[serde(default)]
    pub days: u64,
    #[serde(default)]
    pub hours: u64,
}

impl ClockParts {
    pub fn new(years: u64, months: u64, days: u64, hours: u64) -> Self {
        Self {
            years,
            months,
            days,
            hours,
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.hours < HOURS_IN_DAY && self.days < DAYS_IN_MONTH && self.months < MONTHS_IN_YEAR
    }
}

/// `years*12*30*24 + months*30*24 + days*24 + hours`.
///
/// Accepts non-normalized breakdowns too (e.g. 30 hours), folding every field
/// into the total. Saturates instead of overflowing.
pub fn to_total_hours(parts: &ClockParts) -> u64 {
    parts
        .years
        .saturating_mul(HOURS_IN_YEAR)
        .saturating_add(parts.months.saturating_mul(HOURS_IN_MONTH))
        .saturating_add(parts.days.saturating_mul(HOURS_IN_DAY))
        .saturating_add(parts.hours)
}

/// Division/modulo cascade, largest unit first.
///
/// Totals are unsigned: a negative elapsed time cannot be expressed and is
/// outside this domain.
pub fn from_total_hours(total: u64) -> ClockParts {
    let years = total / HOURS_IN_YEAR;
    let mut rest = total % HOURS_IN_YEAR;
    let months = rest / HOURS_IN_MONTH;
    rest %= HOURS_IN_MONTH;
    let days = rest / HOURS_IN_DAY;
    let hours = rest % HOURS_IN_DAY;

    ClockParts {
        years,
        months,
        days,
        hours,
    }
}

/// Elapsed campaign time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "ClockParts", into = "ClockParts")]
pub struct Clock(u64);

impl Clock {
    pub const ZERO: Clock = Clock(0);

    pub fn from_hours(total: u64) -> Self {
        Self(total)
    }

    pub fn total_hours(&self) -> u64 {
        self.0
    }

    pub fn parts(&self) -> ClockParts {
        from_total_hours(self.0)
    }

    /// Clock moved forward by `hours`.
    pub fn plus(&self, hours: u64) -> Self {
        Self(self.0.saturating_add(hours))
    }

    /// Signed hours elapsed since `instant`; negative when `instant` lies
    /// ahead of the clock (e.g. an imported event stamped in the future).
    pub fn since(&self, instant: u64) -> i128 {
        i128::from(self.0) - i128::from(instant)
    }
}

impl From<ClockParts> for Clock {
    fn from(parts: ClockParts) -> Self {
        Clock(to_total_hours(&parts))
    }
}

impl From<Clock> for ClockParts {
    fn from(clock: Clock) -> Self {
        clock.parts()
    }
}

impl fmt::Display for ClockParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}y, {}m, {}d, {}h",
            self.years, self.months, self.days, self.hours
        )
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parts().fmt(f)
    }
}
