//! Shared configuration types for raidbook
//!
//! This crate contains the serializable types shared between the catalog
//! engine (raidbook-core) and the interactive front end.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Difficulty
// ─────────────────────────────────────────────────────────────────────────────

/// Difficulty tier of a single raid slot.
///
/// Serialized lowercase; catalog files may also use the in-game labels
/// (`普通`, `英雄`, `挑战`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "普通")]
    Normal,
    #[serde(alias = "英雄")]
    Heroic,
    #[serde(alias = "挑战")]
    Challenge,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Normal, Difficulty::Heroic, Difficulty::Challenge];

    /// In-game label for this tier
    pub fn native_label(&self) -> &'static str {
        match self {
            Difficulty::Normal => "普通",
            Difficulty::Heroic => "英雄",
            Difficulty::Challenge => "挑战",
        }
    }

    /// Parse either the serialized name (`heroic`) or the in-game label (`英雄`)
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|d| {
            d.native_label() == s || d.as_str().eq_ignore_ascii_case(s)
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Normal => "normal",
            Difficulty::Heroic => "heroic",
            Difficulty::Challenge => "challenge",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.native_label())
    }
}

/// Default display label for each difficulty tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyLabels {
    #[serde(default = "default_normal_label")]
    pub normal: String,
    #[serde(default = "default_heroic_label")]
    pub heroic: String,
    #[serde(default = "default_challenge_label")]
    pub challenge: String,
}

fn default_normal_label() -> String {
    Difficulty::Normal.native_label().to_string()
}

fn default_heroic_label() -> String {
    Difficulty::Heroic.native_label().to_string()
}

fn default_challenge_label() -> String {
    Difficulty::Challenge.native_label().to_string()
}

impl Default for DifficultyLabels {
    fn default() -> Self {
        Self {
            normal: default_normal_label(),
            heroic: default_heroic_label(),
            challenge: default_challenge_label(),
        }
    }
}

impl DifficultyLabels {
    pub fn get(&self, difficulty: Difficulty) -> &str {
        match difficulty {
            Difficulty::Normal => &self.normal,
            Difficulty::Heroic => &self.heroic,
            Difficulty::Challenge => &self.challenge,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Config
// ─────────────────────────────────────────────────────────────────────────────

/// Expansion eras, newest first. Raids are shown in sections following this order.
pub const DEFAULT_ERA_ORDER: &[&str] = &[
    "丝路风雨",
    "横刀断浪",
    "奉天证道",
    "世外蓬莱",
    "重制版",
    "风骨霸刀",
    "剑胆琴心",
    "安史之乱",
    "巴蜀风云",
    "风起稻香",
];

fn default_catalog_path() -> String {
    "data/catalog.toml".to_string()
}

fn default_era_order() -> Vec<String> {
    DEFAULT_ERA_ORDER.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog TOML file with `[[raid]]` entries
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Where manual toggles are persisted. `None` uses the platform config dir.
    #[serde(default)]
    pub overrides_path: Option<String>,

    #[serde(default = "default_era_order")]
    pub era_order: Vec<String>,

    #[serde(default)]
    pub difficulty_labels: DifficultyLabels,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            overrides_path: None,
            era_order: default_era_order(),
            difficulty_labels: DifficultyLabels::default(),
        }
    }
}
