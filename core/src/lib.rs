pub mod catalog;
pub mod context;
pub mod merge;
pub mod preferences;
pub mod serde_defaults;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError, RaidEntry, load_catalog, load_catalog_str};
pub use context::{AppConfig, AppConfigExt, ConfigError};
pub use merge::{
    EraSection, GroupId, MergeError, MergedRaid, OverrideState, RaidKey, group,
    group_with_labels, sections,
};
pub use preferences::{PreferencesError, ToggleRecord, ToggleSnapshot};
pub use raidbook_types::{Difficulty, DifficultyLabels};
