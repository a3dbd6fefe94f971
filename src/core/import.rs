use crate::core::session::Session;
use crate::db::KeyValueStore;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::fs;

/// High-level logic for the `import` command.
pub struct ImportLogic;

impl ImportLogic {
    /// Read `file` and replace the session state with it.
    ///
    /// The whole file is read before anything is touched, so a failed read or
    /// parse leaves the session exactly as it was.
    pub fn import<S: KeyValueStore>(session: &mut Session<S>, file: &str) -> AppResult<()> {
        let path = expand_tilde(file);
        let bytes = fs::read(&path)?;
        session.import_bytes(&bytes)?;
        tracing::info!(path = %path.display(), "campaign state imported");
        Ok(())
    }
}
