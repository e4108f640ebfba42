//! Error types for grouping and override operations

use thiserror::Error;

use super::{GroupId, RaidKey};

/// Errors from the merge engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// Two entries in one group occupy the same slot. Catalog authoring defect.
    #[error("duplicate raid slot {key}")]
    DuplicateKey { key: RaidKey },

    /// The key was never seeded, e.g. the catalog changed after initialization
    #[error("unknown raid slot {key}")]
    UnknownKey { key: RaidKey },

    /// An entry's name, level or version differs from the rest of its group
    #[error("inconsistent raid group: expected {expected}, found {found}")]
    InconsistentGroup { expected: GroupId, found: GroupId },

    /// A merged raid was built from no entries
    #[error("raid group has no entries")]
    EmptyGroup,
}
