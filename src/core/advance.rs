//! Moving the campaign clock forward.
//!
//! Advancing is the only operation that lowers an event countdown: every
//! running countdown is reduced by the same delta and floored at zero.

use crate::errors::{AppError, AppResult};
use crate::models::clock::{HOURS_IN_DAY, HOURS_IN_MONTH};
use crate::models::{AppState, Clock, Timeline};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Units accepted by a custom advance.
///
/// A month is a flat 30 days here, the same length the clock uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Hours,
    Days,
    Weeks,
    Months,
}

impl TimeUnit {
    pub fn hours(&self) -> u64 {
        match self {
            TimeUnit::Hours => 1,
            TimeUnit::Days => HOURS_IN_DAY,
            TimeUnit::Weeks => HOURS_IN_DAY * 7,
            TimeUnit::Months => HOURS_IN_MONTH,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed advance buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Short rest, 1 hour
    Short,
    /// A watch, 4 hours
    Watch,
    /// Long rest, 8 hours
    Long,
}

impl Preset {
    pub fn hours(&self) -> u64 {
        match self {
            Preset::Short => 1,
            Preset::Watch => 4,
            Preset::Long => 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Short => "Short Rest (1 Hour)",
            Preset::Watch => "A Watch (4 Hours)",
            Preset::Long => "Long Rest (8 Hours)",
        }
    }
}

/// Validate a custom amount and convert it to hours.
///
/// Zero and negative values are rejected; the caller must not advance.
pub fn custom_hours(value: i64, unit: TimeUnit) -> AppResult<u64> {
    if value <= 0 {
        return Err(AppError::InvalidAmount(value));
    }
    Ok((value as u64).saturating_mul(unit.hours()))
}

/// Countdown after `delta` hours: running countdowns drop (floored at 0),
/// absent or already-expired ones stay as they are.
pub fn decrement_remaining(remaining: Option<u64>, delta: u64) -> Option<u64> {
    match remaining {
        Some(r) if r > 0 => Some(r.saturating_sub(delta)),
        other => other,
    }
}

/// Advance `clock` and `timeline` by `delta_hours`.
pub fn advance(clock: Clock, mut timeline: Timeline, delta_hours: u64) -> (Clock, Timeline) {
    let new_clock = clock.plus(delta_hours);

    for ev in timeline.iter_mut() {
        ev.time_remaining = decrement_remaining(ev.time_remaining, delta_hours);
    }

    (new_clock, timeline)
}

/// [`advance`] applied to a whole snapshot.
pub fn advance_state(state: AppState, delta_hours: u64) -> AppState {
    let AppState {
        time,
        events,
        extra,
    } = state;
    let (time, events) = advance(time, events, delta_hours);
    AppState {
        time,
        events,
        extra,
    }
}
