//! Application configuration assembled once by the composition root.

use api::ApiConfig;

/// Prefix applied to every key written to local/session storage.
pub const STORAGE_KEY_PREFIX: &str = "app-";

/// Language used when the requested one has no embedded catalog.
pub const DEFAULT_LANGUAGE_KEY: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key_prefix: STORAGE_KEY_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}
