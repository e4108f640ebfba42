use std::fmt;

use raidbook_types::Difficulty;

use crate::catalog::RaidEntry;

/// Identity of one difficulty slot.
///
/// Compared field by field. The `Display` form (`25人英雄战宝迦兰`) is only
/// for humans and logs; two keys that print the same are not necessarily equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RaidKey {
    pub name: String,
    pub level: u32,
    pub version: String,
    pub player_count: u8,
    pub difficulty: Difficulty,
}

impl RaidKey {
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
        }
    }

    /// Derive the key of a catalog entry
    pub fn of(entry: &RaidEntry) -> Self {
        Self {
            name: entry.name.clone(),
            level: entry.level,
            version: entry.version.clone(),
            player_count: entry.player_count,
            difficulty: entry.difficulty,
        }
    }

    /// Whether `entry` occupies this slot (no allocation)
    pub fn matches(&self, entry: &RaidEntry) -> bool {
        self.name == entry.name
            && self.level == entry.level
            && self.version == entry.version
            && self.player_count == entry.player_count
            && self.difficulty == entry.difficulty
    }
}

impl From<&RaidEntry> for RaidKey {
    fn from(entry: &RaidEntry) -> Self {
        Self::of(entry)
    }
}

impl fmt::Display for RaidKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}人{}{} ({} Lv{})",
            self.player_count,
            self.difficulty.native_label(),
            self.name,
            self.version,
            self.level
        )
    }
}
