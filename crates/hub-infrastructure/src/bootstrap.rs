//! Wiring of the session manager with its file-backed collaborators.

use std::path::Path;
use std::sync::Arc;

use hub_core::config::HubConfig;
use hub_core::error::Result;
use hub_core::notification::Notifier;
use hub_core::session::SessionManager;

use crate::catalog::StaticCatalog;
use crate::collaborators::TrackingNavigator;
use crate::config_service::ConfigService;
use crate::directory::InMemoryUserDirectory;
use crate::paths::HubPaths;
use crate::storage::FileKeyValueStore;

/// Everything a front end needs to drive the hub.
pub struct HubRuntime {
    pub manager: SessionManager,
    pub catalog: Arc<StaticCatalog>,
    pub navigator: Arc<TrackingNavigator>,
    pub config: HubConfig,
}

/// Loads the configuration under `base_dir` (or the platform config
/// directory), opens the file store and restores the persisted session.
pub async fn bootstrap(base_dir: Option<&Path>, notifier: Arc<dyn Notifier>) -> Result<HubRuntime> {
    let config_service = ConfigService::new(HubPaths::new(base_dir));
    let config = config_service.load()?;
    let storage_dir = config_service.storage_dir(&config)?;
    tracing::info!("[Bootstrap] Using storage at {:?}", storage_dir);

    bootstrap_with(config, storage_dir.as_path(), notifier).await
}

/// Same as [`bootstrap`] with an explicit configuration.
pub async fn bootstrap_with(
    config: HubConfig,
    storage_dir: &Path,
    notifier: Arc<dyn Notifier>,
) -> Result<HubRuntime> {
    let catalog = Arc::new(StaticCatalog::seeded(config.latency()));
    let navigator = Arc::new(TrackingNavigator::new());

    let manager = SessionManager::new(
        Arc::new(InMemoryUserDirectory::seeded()),
        Arc::new(FileKeyValueStore::new(storage_dir)),
        notifier,
        navigator.clone(),
        config.clone(),
    );
    manager.restore().await?;

    Ok(HubRuntime {
        manager,
        catalog,
        navigator,
        config,
    })
}
