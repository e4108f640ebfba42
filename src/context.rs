use std::path::PathBuf;
use std::sync::Arc;

use raidbook_core::{AppConfig, AppConfigExt, Catalog, MergeError, MergedRaid, OverrideState};
use tokio::sync::RwLock;

/// A loaded catalog together with its grouping and toggle state.
#[derive(Debug)]
pub struct Session {
    pub catalog_path: PathBuf,
    pub catalog: Catalog,
    pub merged: Vec<MergedRaid>,
    pub overrides: OverrideState,
}

impl Session {
    pub fn new(
        catalog_path: PathBuf,
        catalog: Catalog,
        config: &AppConfig,
    ) -> Result<Self, MergeError> {
        let merged = catalog.group_with_labels(&config.difficulty_labels)?;
        let overrides = OverrideState::from_catalog(&catalog);
        Ok(Self {
            catalog_path,
            catalog,
            merged,
            overrides,
        })
    }
}

/// Holds all shared state for the shell.
/// Every write goes through the `RwLock`, so toggles are applied one at a time.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    session: Arc<RwLock<Option<Session>>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self::with_config(AppConfig::load())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the current session
    pub async fn set_session(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    pub fn session(&self) -> &Arc<RwLock<Option<Session>>> {
        &self.session
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
