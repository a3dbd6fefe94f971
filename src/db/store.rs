//! Store used by the CLI commands: the SQLite file when it can be opened,
//! otherwise a scratch store that lives only as long as the process.

use super::KeyValueStore;
use super::memory::MemoryStore;
use super::pool::DbPool;
use crate::errors::AppResult;

pub enum CampaignStore {
    Sqlite(DbPool),
    Memory(MemoryStore),
}

impl CampaignStore {
    /// Open the SQLite store at `path`, degrading to memory on failure.
    pub fn open(path: &str) -> Self {
        match DbPool::new(path) {
            Ok(pool) => CampaignStore::Sqlite(pool),
            Err(e) => {
                tracing::error!(
                    path,
                    error = %e,
                    "cannot open store; changes are kept in memory only"
                );
                CampaignStore::Memory(MemoryStore::new())
            }
        }
    }

    /// The SQLite pool, if the store file was opened.
    pub fn pool(&self) -> Option<&DbPool> {
        match self {
            CampaignStore::Sqlite(pool) => Some(pool),
            CampaignStore::Memory(_) => None,
        }
    }

    pub fn is_memory(&self) -> bool {
        matches!(self, CampaignStore::Memory(_))
    }
}

impl KeyValueStore for CampaignStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            CampaignStore::Sqlite(pool) => pool.get(key),
            CampaignStore::Memory(mem) => mem.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        match self {
            CampaignStore::Sqlite(pool) => pool.set(key, value),
            CampaignStore::Memory(mem) => mem.set(key, value),
        }
    }
}
