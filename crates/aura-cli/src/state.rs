use std::path::PathBuf;

use aura_core::models::locale::Locale;
use aura_storage::{FileStore, HealthStore, default_data_dir};

use crate::config::AuraConfig;

/// Everything a command needs: resolved config, display language, and the
/// opened data store.
pub struct AppState {
    pub config: AuraConfig,
    pub locale: Locale,
    pub health: HealthStore<FileStore>,
}

impl AppState {
    /// Resolve overrides against the config and open the store.
    ///
    /// Precedence: command-line flag, then config, then built-in default.
    pub fn open(
        config: AuraConfig,
        lang: Option<Locale>,
        data_dir: Option<PathBuf>,
    ) -> eyre::Result<Self> {
        let locale = lang.unwrap_or(config.language);
        let dir = match data_dir.or_else(|| config.data_dir.clone()) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let store = FileStore::open(&dir)?;
        tracing::debug!(dir = %dir.display(), %locale, "opened data store");

        Ok(Self {
            config,
            locale,
            health: HealthStore::new(store),
        })
    }
}
