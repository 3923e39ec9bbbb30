use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::Catalog;
use crate::io::clock::SystemClock;
use crate::io::config_io::{self, ConfigError};
use crate::io::storage::FileStorage;
use crate::model::config::AppConfig;
use crate::store::{StoreOptions, TaskStore};

/// Everything one run of `lb` works with: where data lives, its config, the
/// built-in catalog and the (not yet hydrated) task store.
pub struct Session {
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub catalog: Catalog,
    pub store: TaskStore<FileStorage>,
}

impl Session {
    /// Resolve the data directory and read its config. Does not touch the
    /// persisted tasks; call `store.hydrate()` for that.
    pub fn open(data_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let data_dir = config_io::data_dir(data_dir)?;
        let config = config_io::read_config(&data_dir)?;
        Ok(Self::with_config(data_dir, config))
    }

    pub fn with_config(data_dir: PathBuf, config: AppConfig) -> Self {
        let options = StoreOptions {
            key: config.store.key.clone(),
            debounce: Duration::from_millis(config.store.debounce_ms),
        };
        let store = TaskStore::with_clock(FileStorage::new(&data_dir), SystemClock, options);
        Session {
            data_dir,
            config,
            catalog: Catalog::builtin(),
            store,
        }
    }
}
