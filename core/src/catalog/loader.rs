//! Catalog loading
//!
//! A catalog file is a TOML document of `[[raid]]` tables:
//!
//! ```toml
//! [[raid]]
//! name = "战宝迦兰"
//! level = 70
//! version = "风起稻香"
//! description = "25人英雄模式 - 首个大型团本"
//! active = false
//! ```
//!
//! `player_count` and `difficulty` may be given explicitly; otherwise they
//! are read from the description prefix.

use std::fs;
use std::path::Path;

use raidbook_types::Difficulty;
use serde::Deserialize;

use super::entry::parse_slot;
use super::{Catalog, CatalogError, RaidEntry};
use crate::serde_defaults::default_true;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "raid")]
    raids: Vec<CatalogRecord>,
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    name: String,
    level: u32,
    version: String,
    #[serde(default)]
    player_count: Option<u8>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    description: String,
    #[serde(default = "default_true")]
    active: bool,
}

impl CatalogRecord {
    fn into_entry(self, index: usize) -> Result<RaidEntry, CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { index });
        }

        // Explicit fields win; the description fills whatever is missing
        let parsed = parse_slot(&self.description);
        let player_count = self.player_count.or(parsed.map(|(count, _)| count));
        let difficulty = self.difficulty.or(parsed.map(|(_, d)| d));

        let (Some(player_count), Some(difficulty)) = (player_count, difficulty) else {
            return Err(CatalogError::MissingSlot {
                index,
                name: self.name,
            });
        };

        Ok(RaidEntry {
            name: self.name,
            level: self.level,
            version: self.version,
            player_count,
            difficulty,
            description: self.description,
            base_active: self.active,
        })
    }
}

fn build_catalog(file: CatalogFile) -> Result<Catalog, CatalogError> {
    let entries = file
        .raids
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_entry(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Catalog::new(entries))
}

/// Parse a catalog from TOML text
pub fn load_catalog_str(content: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(content)?;
    build_catalog(file)
}

/// Load a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let file: CatalogFile =
        toml::from_str(&content).map_err(|source| CatalogError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = build_catalog(file)?;
    tracing::info!(path = %path.display(), entries = catalog.len(), "Loaded raid catalog");
    Ok(catalog)
}
