pub mod add;
pub mod advance;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod status;

use crate::config::Config;
use crate::core::session::Session;
use crate::db::log::ttlog_quiet;
use crate::db::store::CampaignStore;

/// Open the configured store and restore the campaign from it.
///
/// A store that cannot be opened does not stop the command: the session
/// then runs from the initial state and keeps its changes in memory.
pub(crate) fn open_session(cfg: &Config) -> Session<CampaignStore> {
    Session::open(CampaignStore::open(&cfg.database))
}

/// Record a state change in the internal log (non-blocking).
pub(crate) fn audit(session: &Session<CampaignStore>, operation: &str, target: &str, message: &str) {
    if let Some(pool) = session.store().pool() {
        ttlog_quiet(&pool.conn, operation, target, message);
    }
}
