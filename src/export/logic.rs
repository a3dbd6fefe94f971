use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::notify_export_success;
use crate::errors::AppResult;
use crate::models::AppState;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Resolve the output path: a directory gets `default_name` appended.
    pub fn resolve_path(file: &str, default_name: &str) -> PathBuf {
        let path = expand_tilde(file);
        if path.is_dir() {
            path.join(default_name)
        } else {
            path
        }
    }

    /// Export the campaign.
    ///
    /// - `json`: the full state, same schema as the store; importable
    /// - `csv`: one row per event, sorted by creation time
    ///
    /// Returns the path written to.
    pub fn export(
        state: &AppState,
        format: ExportFormat,
        file: &str,
        default_name: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = Self::resolve_path(file, default_name);

        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Json => write_json(&path, state)?,
            ExportFormat::Csv => write_csv(&path, state)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(path)
    }
}
