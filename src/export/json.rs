use crate::errors::AppResult;
use crate::models::AppState;
use crate::core::persistence;
use std::path::Path;

/// Write the campaign state as pretty-printed JSON.
pub fn write_json(path: &Path, state: &AppState) -> AppResult<()> {
    let bytes = persistence::export_bytes(state)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
