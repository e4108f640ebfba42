//! Per-slot enabled/disabled state
//!
//! Each slot is seeded from its catalog default and afterwards changes only
//! through [`OverrideState::toggle`]. Slots are independent: flipping one never
//! touches its siblings.

use hashbrown::HashMap;

use super::{MergeError, MergedRaid, RaidKey};
use crate::catalog::{Catalog, RaidEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotState {
    seed: bool,
    active: bool,
}

/// Effective active flag for every slot of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideState {
    slots: HashMap<RaidKey, SlotState>,
}

impl OverrideState {
    /// Seed every entry's slot with its catalog default.
    ///
    /// Calling this again for a reloaded catalog starts over; manual toggles
    /// are not carried across (see `preferences::ToggleSnapshot`).
    pub fn initialize(entries: &[RaidEntry]) -> Self {
        let mut slots = HashMap::with_capacity(entries.len());
        for entry in entries {
            let state = SlotState {
                seed: entry.base_active,
                active: entry.base_active,
            };
            if slots.insert(entry.key(), state).is_some() {
                tracing::warn!(key = %entry.key(), "Catalog lists the same raid slot twice");
            }
        }
        Self { slots }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::initialize(catalog.entries())
    }

    pub fn is_active(&self, key: &RaidKey) -> Result<bool, MergeError> {
        self.slots
            .get(key)
            .map(|s| s.active)
            .ok_or_else(|| MergeError::UnknownKey { key: key.clone() })
    }

    /// Effective flag for an entry, falling back to its catalog default when
    /// the slot was never seeded.
    pub fn is_active_or(&self, entry: &RaidEntry) -> bool {
        self.slots
            .get(&entry.key())
            .map_or(entry.base_active, |s| s.active)
    }

    /// Flip one slot. Returns the new value.
    pub fn toggle(&mut self, key: &RaidKey) -> Result<bool, MergeError> {
        let slot = self
            .slots
            .get_mut(key)
            .ok_or_else(|| MergeError::UnknownKey { key: key.clone() })?;
        slot.active = !slot.active;

        tracing::debug!(key = %key, active = slot.active, "Toggled raid slot");
        Ok(slot.active)
    }

    /// Switch a whole raid: if none of its slots is active all are enabled,
    /// otherwise all are disabled. Returns the value every slot now has.
    ///
    /// Nothing is changed unless every slot of the raid is known.
    pub fn toggle_raid(&mut self, raid: &MergedRaid) -> Result<bool, MergeError> {
        let mut current = Vec::with_capacity(raid.raids().len());
        for key in raid.keys() {
            let active = self.is_active(&key)?;
            current.push((key, active));
        }

        let target = !current.iter().any(|(_, active)| *active);
        for (key, active) in &current {
            if *active != target {
                self.toggle(key)?;
            }
        }

        tracing::debug!(raid = %raid.id(), active = target, "Toggled whole raid");
        Ok(target)
    }

    /// Slots whose value differs from the catalog default
    pub fn changes(&self) -> impl Iterator<Item = (&RaidKey, bool)> {
        self.slots
            .iter()
            .filter(|(_, s)| s.active != s.seed)
            .map(|(k, s)| (k, s.active))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RaidKey, bool)> {
        self.slots.iter().map(|(k, s)| (k, s.active))
    }

    pub fn contains(&self, key: &RaidKey) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
