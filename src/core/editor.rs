//! Create, update and delete timeline events.

use crate::errors::{AppError, AppResult};
use crate::models::{Clock, Event, EventId, Timeline};
use chrono::Utc;

/// Values submitted by the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    /// Hours remaining counted from the moment the form is submitted.
    pub time_remaining: Option<u64>,
}

impl EventForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>, time_remaining: Option<u64>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            time_remaining,
        }
    }

    /// Form pre-filled from a stored event.
    ///
    /// The countdown is expressed "from now" so that submitting the form
    /// unchanged re-bases back to the stored value.
    pub fn from_event(event: &Event, clock: Clock) -> Self {
        let elapsed = clock.since(event.time_created);
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            // stored + elapsed, not the raw stored value: an untouched
            // expired countdown stays expired instead of being cleared
            time_remaining: event
                .time_remaining
                .map(|r| clamp_hours(i128::from(r) + elapsed)),
        }
    }
}

fn validate_title(title: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::EmptyTitle);
    }
    Ok(())
}

/// Fresh id: wall-clock milliseconds, bumped past every id in use.
pub fn next_id(timeline: &Timeline) -> EventId {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    match timeline.max_id() {
        Some(max) if max.0 >= now => EventId(max.0.saturating_add(1)),
        _ => EventId(now),
    }
}

/// Build a new event stamped with the current clock.
///
/// The countdown is stored exactly as given.
pub fn create(form: EventForm, clock: Clock, id: EventId) -> AppResult<Event> {
    validate_title(&form.title)?;

    Ok(Event::new(
        id,
        form.title,
        form.description,
        clock.total_hours(),
        form.time_remaining,
    ))
}

fn clamp_hours(hours: i128) -> u64 {
    u64::try_from(hours.max(0)).unwrap_or(u64::MAX)
}

/// Countdown to store when the form says `from_now` hours remain:
/// `max(0, from_now - (clock - time_created))`.
pub fn rebase_remaining(from_now: u64, clock: Clock, time_created: u64) -> u64 {
    clamp_hours(i128::from(from_now) - clock.since(time_created))
}

/// Replace title, description and countdown of event `id`.
///
/// Unknown ids leave the timeline unchanged. An absent countdown clears the
/// stored one.
pub fn update(id: EventId, form: EventForm, clock: Clock, mut timeline: Timeline) -> AppResult<Timeline> {
    validate_title(&form.title)?;

    if let Some(ev) = timeline.get_mut(id) {
        ev.title = form.title;
        ev.description = form.description;
        ev.time_remaining = form
            .time_remaining
            .map(|r| rebase_remaining(r, clock, ev.time_created));
    }

    Ok(timeline)
}

/// Remove event `id`, if present.
pub fn delete(id: EventId, mut timeline: Timeline) -> Timeline {
    timeline.remove(id);
    timeline
}
