use std::fmt;

use hashbrown::{HashMap, HashSet};
use raidbook_types::DifficultyLabels;

use super::{MergeError, OverrideState, RaidKey};
use crate::catalog::RaidEntry;

/// Identity of a merged raid: `(name, level, version)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId {
    pub name: String,
    pub level: u32,
    pub version: String,
}

impl GroupId {
    pub fn of(entry: &RaidEntry) -> Self {
        Self {
            name: entry.name.clone(),
            level: entry.level,
            version: entry.version.clone(),
        }
    }

    fn matches(&self, entry: &RaidEntry) -> bool {
        self.name == entry.name && self.level == entry.level && self.version == entry.version
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} Lv{})", self.name, self.version, self.level)
    }
}

/// All difficulty slots of one raid, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRaid {
    id: GroupId,
    raids: Vec<RaidEntry>,
    /// Label overrides; slots without one use the tier default
    difficulty_labels: HashMap<RaidKey, String>,
}

impl MergedRaid {
    /// Build a merged raid from its member entries.
    ///
    /// Members must share `(name, level, version)` and occupy distinct slots.
    /// When the raid mixes party sizes every slot is labelled with its size
    /// (`25人英雄`), since the tier alone would be ambiguous.
    pub fn from_entries(
        raids: Vec<RaidEntry>,
        labels: &DifficultyLabels,
    ) -> Result<Self, MergeError> {
        let first = raids.first().ok_or(MergeError::EmptyGroup)?;
        let id = GroupId::of(first);

        let mut seen = HashSet::with_capacity(raids.len());
        for entry in &raids {
            if !id.matches(entry) {
                return Err(MergeError::InconsistentGroup {
                    expected: id,
                    found: GroupId::of(entry),
                });
            }
            let key = entry.key();
            if seen.contains(&key) {
                return Err(MergeError::DuplicateKey { key });
            }
            seen.insert(key);
        }

        let mixed_sizes = raids
            .iter()
            .any(|e| e.player_count != first.player_count);

        let difficulty_labels = if mixed_sizes {
            raids
                .iter()
                .map(|e| {
                    let label = format!("{}人{}", e.player_count, labels.get(e.difficulty));
                    (e.key(), label)
                })
                .collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            id,
            raids,
            difficulty_labels,
        })
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.id.name
    }

    pub fn level(&self) -> u32 {
        self.id.level
    }

    pub fn version(&self) -> &str {
        &self.id.version
    }

    pub fn raids(&self) -> &[RaidEntry] {
        &self.raids
    }

    pub fn difficulty_labels(&self) -> &HashMap<RaidKey, String> {
        &self.difficulty_labels
    }

    pub fn keys(&self) -> impl Iterator<Item = RaidKey> + '_ {
        self.raids.iter().map(RaidEntry::key)
    }

    /// Display label for a slot: the stored override, else the tier default
    pub fn label<'a>(&'a self, key: &RaidKey, defaults: &'a DifficultyLabels) -> &'a str {
        self.difficulty_labels
            .get(key)
            .map(String::as_str)
            .unwrap_or_else(|| defaults.get(key.difficulty))
    }

    /// Members ordered for display: smaller parties first, then by tier.
    /// Does not change `raids()`.
    pub fn by_player_count(&self) -> Vec<&RaidEntry> {
        let mut sorted: Vec<&RaidEntry> = self.raids.iter().collect();
        sorted.sort_by_key(|e| (e.player_count, e.difficulty));
        sorted
    }

    /// At least one slot is enabled
    pub fn any_active(&self, state: &OverrideState) -> bool {
        self.raids.iter().any(|e| state.is_active_or(e))
    }

    /// Every slot is disabled
    pub fn all_disabled(&self, state: &OverrideState) -> bool {
        !self.any_active(state)
    }
}

/// Group entries into merged raids using the default labels.
pub fn group(entries: &[RaidEntry]) -> Result<Vec<MergedRaid>, MergeError> {
    group_with_labels(entries, &DifficultyLabels::default())
}

/// Group entries by `(name, level, version)`.
///
/// Output order is the order in which each group is first seen; members keep
/// catalog order.
pub fn group_with_labels(
    entries: &[RaidEntry],
    labels: &DifficultyLabels,
) -> Result<Vec<MergedRaid>, MergeError> {
    let mut index: HashMap<(&str, u32, &str), usize> = HashMap::new();
    let mut buckets: Vec<Vec<RaidEntry>> = Vec::new();

    for entry in entries {
        let slot = *index
            .entry((entry.name.as_str(), entry.level, entry.version.as_str()))
            .or_insert_with(|| {
                buckets.push(Vec::new());
                buckets.len() - 1
            });
        buckets[slot].push(entry.clone());
    }

    let merged = buckets
        .into_iter()
        .map(|raids| MergedRaid::from_entries(raids, labels))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(entries = entries.len(), raids = merged.len(), "Grouped raid catalog");
    Ok(merged)
}
