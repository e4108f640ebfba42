//! Error types for catalog loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading a raid catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse catalog TOML")]
    Parse(#[from] toml::de::Error),

    #[error("raid #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("raid #{index} ({name}) has no player count/difficulty and its description does not name one")]
    MissingSlot { index: usize, name: String },
}
