use raidbook_types::Difficulty;

use crate::merge::RaidKey;

/// One difficulty slot of a raid, as it appears in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaidEntry {
    pub name: String,
    /// Content tier (70, 80, 95, ...)
    pub level: u32,
    /// Expansion era this raid belongs to
    pub version: String,
    pub player_count: u8,
    pub difficulty: Difficulty,
    pub description: String,
    /// Whether the slot starts out enabled
    pub base_active: bool,
}

impl RaidEntry {
    pub fn new(
        name: impl Into<String>,
        level: u32,
        version: impl Into<String>,
        player_count: u8,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            version: version.into(),
            player_count,
            difficulty,
            description: String::new(),
            base_active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_base_active(mut self, active: bool) -> Self {
        self.base_active = active;
        self
    }

    pub fn key(&self) -> RaidKey {
        RaidKey::of(self)
    }
}

/// Read the slot prefix of a catalog description.
///
/// Descriptions start with `{N}人{难度}`, e.g. `25人英雄模式 - 首个大型团本`.
/// A bare `{N}人模式` means the normal tier.
pub fn parse_slot(description: &str) -> Option<(u8, Difficulty)> {
    let s = description.trim_start();
    let digits_end = s.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }

    let player_count: u8 = s[..digits_end].parse().ok()?;
    let rest = s[digits_end..].strip_prefix('人')?;

    if let Some(difficulty) = Difficulty::ALL
        .into_iter()
        .find(|d| rest.starts_with(d.native_label()))
    {
        return Some((player_count, difficulty));
    }

    rest.starts_with("模式")
        .then_some((player_count, Difficulty::Normal))
}
