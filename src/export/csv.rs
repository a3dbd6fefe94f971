use crate::errors::AppResult;
use crate::models::AppState;
use serde::Serialize;
use std::path::Path;

/// Flat timeline row for CSV export.
#[derive(Serialize)]
struct TimelineRow<'a> {
    id: u64,
    title: &'a str,
    description: &'a str,
    created_hours: u64,
    created_at: String,
    time_remaining: Option<u64>,
    status: &'static str,
}

/// Write the timeline (sorted by creation time) as CSV.
pub fn write_csv(path: &Path, state: &AppState) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for ev in state.events.sorted() {
        let status = if !ev.is_timed() {
            "untimed"
        } else if ev.is_expired() {
            "expired"
        } else {
            "running"
        };

        wtr.serialize(TimelineRow {
            id: ev.id.value(),
            title: &ev.title,
            description: &ev.description,
            created_hours: ev.time_created,
            created_at: crate::models::clock::from_total_hours(ev.time_created).to_string(),
            time_remaining: ev.time_remaining,
            status,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
