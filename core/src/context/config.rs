//! Application configuration
//!
//! Re-exports the shared config types from raidbook-types and adds
//! persistence and path resolution for `AppConfig`.

use std::path::PathBuf;

pub use raidbook_types::{AppConfig, DEFAULT_ERA_ORDER, DifficultyLabels};

use super::ConfigError;

const APP_NAME: &str = "raidbook";
const CONFIG_NAME: &str = "config";

/// Extension trait for AppConfig loading and path resolution
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn overrides_file(&self) -> PathBuf;
}

fn try_load() -> Result<AppConfig, ConfigError> {
    Ok(confy::load(APP_NAME, CONFIG_NAME)?)
}

impl AppConfigExt for AppConfig {
    /// Load the stored config, falling back to defaults if it cannot be read
    fn load() -> Self {
        try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            Self::default()
        })
    }

    /// Toggle snapshot location: the configured path, else
    /// `<config dir>/raidbook/overrides.toml`
    fn overrides_file(&self) -> PathBuf {
        if let Some(path) = &self.overrides_path {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME).join("overrides.toml"))
            .unwrap_or_else(|| PathBuf::from("overrides.toml"))
    }
}
