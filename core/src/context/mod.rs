//! Application context: configuration and its persistence

mod config;
mod error;

pub use config::{AppConfig, AppConfigExt, DEFAULT_ERA_ORDER, DifficultyLabels};
pub use error::ConfigError;
