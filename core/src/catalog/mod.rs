//! Raid catalog
//!
//! The catalog is the ordered, read-only list of raid difficulty slots the
//! rest of the crate works from. Order is meaningful: it decides the order of
//! merged raids and of eras that are not listed in the configured era order.

mod entry;
mod error;
mod loader;

pub use entry::{RaidEntry, parse_slot};
pub use error::CatalogError;
pub use loader::{load_catalog, load_catalog_str};

use raidbook_types::DifficultyLabels;

use crate::merge::{self, MergeError, MergedRaid, RaidKey};

/// Immutable, ordered collection of raid entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<RaidEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<RaidEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RaidEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RaidEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry occupying a difficulty slot
    pub fn find(&self, key: &RaidKey) -> Option<&RaidEntry> {
        self.entries.iter().find(|e| key.matches(e))
    }

    pub fn contains(&self, key: &RaidKey) -> bool {
        self.find(key).is_some()
    }

    /// Distinct eras in first-seen order
    pub fn versions(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !versions.contains(&entry.version.as_str()) {
                versions.push(&entry.version);
            }
        }
        versions
    }

    /// Fold entries into merged raids using the default difficulty labels
    pub fn group(&self) -> Result<Vec<MergedRaid>, MergeError> {
        merge::group(&self.entries)
    }

    pub fn group_with_labels(
        &self,
        labels: &DifficultyLabels,
    ) -> Result<Vec<MergedRaid>, MergeError> {
        merge::group_with_labels(&self.entries, labels)
    }
}

impl FromIterator<RaidEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = RaidEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RaidEntry;
    type IntoIter = std::slice::Iter<'a, RaidEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
