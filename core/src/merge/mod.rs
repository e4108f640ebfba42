//! Raid merge engine
//!
//! This module provides:
//! - **Keys**: value identity of one difficulty slot
//! - **Grouping**: folds catalog entries into one [`MergedRaid`] per raid
//! - **Sections**: buckets merged raids by expansion era
//! - **Overrides**: per-slot enabled state and the toggle operations
//!
//! ```text
//!   Catalog ──group()──▶ [MergedRaid] ──sections()──▶ [EraSection]
//!      │
//!      └──OverrideState::from_catalog()──▶ OverrideState ◀── toggle()
//! ```

mod error;
mod grouping;
mod key;
mod overrides;
mod sections;

#[cfg(test)]
mod merge_tests;

pub use error::MergeError;
pub use grouping::{GroupId, MergedRaid, group, group_with_labels};
pub use key::RaidKey;
pub use overrides::OverrideState;
pub use sections::{EraSection, sections};
