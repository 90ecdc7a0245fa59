use crate::config::settings::AppConfig;
use crate::infrastructure::storage::local::StorageDirs;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: StorageDirs,
}

impl AppState {
    pub fn new(config: AppConfig, storage: StorageDirs) -> Self {
        Self { config, storage }
    }
}
