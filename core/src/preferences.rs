//! Toggle preferences - manual raid toggles saved between sessions
//!
//! Stored separately from the catalog so users can:
//! - Keep their toggles when the catalog file is updated
//! - Share catalog files without personal settings mixed in
//!
//! Snapshots are re-applied through [`OverrideState::toggle`], so the
//! override state stays the only thing that mutates slot flags.

use std::path::{Path, PathBuf};

use raidbook_types::Difficulty;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::merge::{OverrideState, RaidKey};

// ═══════════════════════════════════════════════════════════════════════════
// Snapshot Types
// ═══════════════════════════════════════════════════════════════════════════

/// One manually toggled slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleRecord {
    pub name: String,
    pub level: u32,
    pub version: String,
    pub player_count: u8,
    pub difficulty: Difficulty,
    pub active: bool,
}

impl ToggleRecord {
    pub fn new(key: &RaidKey, active: bool) -> Self {
        Self {
            name: key.name.clone(),
            level: key.level,
            version: key.version.clone(),
            player_count: key.player_count,
            difficulty: key.difficulty,
            active,
        }
    }

    pub fn key(&self) -> RaidKey {
        RaidKey::new(
            self.name.clone(),
            self.level,
            self.version.clone(),
            self.player_count,
            self.difficulty,
        )
    }
}

/// Slots whose state differs from the catalog default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSnapshot {
    #[serde(default, rename = "toggle")]
    pub toggles: Vec<ToggleRecord>,
}

impl ToggleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every slot that no longer matches its catalog default
    pub fn capture(state: &OverrideState) -> Self {
        let mut toggles: Vec<ToggleRecord> = state
            .changes()
            .map(|(key, active)| ToggleRecord::new(key, active))
            .collect();
        // Stable file contents regardless of map order
        toggles.sort_by(|a, b| a.key().cmp(&b.key()));
        Self { toggles }
    }

    /// Bring `state` in line with the snapshot. Slots the catalog no longer
    /// has are skipped. Returns the number of slots flipped.
    pub fn reapply(&self, state: &mut OverrideState) -> usize {
        let mut applied = 0;
        for record in &self.toggles {
            let key = record.key();
            match state.is_active(&key) {
                Ok(current) if current != record.active => {
                    if state.toggle(&key).is_ok() {
                        applied += 1;
                    }
                }
                Ok(_) => {}
                Err(_) => {
                    tracing::warn!(key = %key, "Saved toggle refers to a raid slot not in the catalog");
                }
            }
        }
        applied
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    /// Load a snapshot from a TOML file. A missing file is an empty snapshot.
    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path).map_err(|source| PreferencesError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| PreferencesError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the snapshot to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PreferencesError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        std::fs::write(path, content).map_err(|source| PreferencesError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), toggles = self.len(), "Saved raid toggles");
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Error Types
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("IO error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse toggles in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize toggles")]
    Serialize(#[from] toml::ser::Error),
}
