use ongod_core::{CurrencyStyle, PricingConfig};
use serde::Deserialize;
use std::env;

use crate::history_repo::DEFAULT_MAX_ENTRIES;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    "data/ongod-store.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: DEFAULT_MAX_ENTRIES }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CurrencyConfig {
    #[serde(default)]
    pub style: CurrencyStyle,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layers `{dir}/default`, `{dir}/{RUN_MODE}`, `{dir}/local`, then `ONGOD__*` env vars
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Never checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // e.g. `ONGOD__SERVER__PORT=8080`
            .add_source(
                config::Environment::with_prefix("ONGOD")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }
}
