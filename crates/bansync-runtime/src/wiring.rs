//! Service construction.
//!
//! Builds the production service graph: filesystem store plus the
//! caller-supplied actuator and privilege oracle. Document files are
//! created empty on first run so the core never observes an absent
//! document.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use bansync_core::ports::{BanActuator, PrivilegeOracle};
use bansync_core::service::BanSyncService;
use bansync_store::JsonFileStore;

use crate::config::RuntimeConfig;

/// Wire a [`BanSyncService`] over the filesystem store.
///
/// Creates `data_dir` and seeds empty documents if needed, then hands
/// back the service ready for the command layer.
pub async fn build_service<A, P>(
    config: &RuntimeConfig,
    actuator: Arc<A>,
    oracle: Arc<P>,
) -> anyhow::Result<BanSyncService<JsonFileStore, A, P>>
where
    A: BanActuator,
    P: PrivilegeOracle,
{
    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("creating data dir {}", config.data_dir.display()))?;

    let store = JsonFileStore::new(config.registry_path(), config.ban_log_path());
    store
        .initialize()
        .await
        .context("initializing data files")?;

    info!(
        registry = %config.registry_path().display(),
        ban_log = %config.ban_log_path().display(),
        "bansync service wired"
    );
    Ok(BanSyncService::new(Arc::new(store), actuator, oracle))
}
