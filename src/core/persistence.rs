//! Snapshot, restore, export and import of the campaign state.
//!
//! Two boundaries with different failure policies:
//! - the key-value store (`save`/`load`/`clear`) never fails the caller; errors
//!   are logged and the session keeps working from memory;
//! - the file boundary (`export_bytes`/`import_bytes`) reports every failure,
//!   since it is always an explicit user action.

use crate::db::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{AppState, Clock, Timeline};
use serde_json::Value;

/// Fixed key of the snapshot in the key-value store.
pub const STATE_KEY: &str = "dndTimelineState";

pub fn snapshot(clock: Clock, timeline: &Timeline) -> AppState {
    AppState::new(clock, timeline.clone())
}

/// Write `state` under [`STATE_KEY`]. Returns whether the write went through.
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, state: &AppState) -> bool {
    let encoded = match serde_json::to_string(state) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize campaign state");
            return false;
        }
    };

    match store.set(STATE_KEY, &encoded) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, "failed to save campaign state; changes are kept in memory only");
            false
        }
    }
}

/// Read the stored snapshot. Missing, unreadable or malformed values all
/// come back as `None`.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Option<AppState> {
    let raw = match store.get(STATE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::error!(error = %e, "failed to load campaign state from store");
            return None;
        }
    };

    match decode(raw.as_bytes()) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::warn!(error = %e, "stored campaign state is not usable; starting fresh");
            None
        }
    }
}

/// [`load`], falling back to the zeroed initial state.
pub fn load_or_initial<S: KeyValueStore + ?Sized>(store: &S) -> AppState {
    load(store).unwrap_or_else(AppState::initial)
}

/// Reset to the initial state and persist the reset.
pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> AppState {
    let state = AppState::initial();
    save(store, &state);
    state
}

/// Pretty-printed JSON, same schema as the stored value.
pub fn export_bytes(state: &AppState) -> AppResult<Vec<u8>> {
    let mut out = serde_json::to_vec_pretty(state)?;
    out.push(b'\n');
    Ok(out)
}

/// Parse an externally supplied file.
pub fn import_bytes(bytes: &[u8]) -> AppResult<AppState> {
    decode(bytes)
}

/// Shared decoder: JSON object with truthy `time` and `events` fields.
fn decode(bytes: &[u8]) -> AppResult<AppState> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| AppError::ImportParse(e.to_string()))?;

    let has_field = |name: &str| {
        value
            .get(name)
            .is_some_and(|v| !v.is_null() && v != &Value::Bool(false))
    };

    if !has_field("time") || !has_field("events") {
        return Err(AppError::ImportMissingFields);
    }

    serde_json::from_value(value).map_err(|e| AppError::ImportParse(e.to_string()))
}
