//! # Ban Sync Service
//!
//! Orchestrates the end-to-end ban workflow and the membership commands,
//! implementing the inbound [`BanSyncApi`] port over three outbound
//! ports ([`DocumentStore`], [`BanActuator`], [`PrivilegeOracle`]).
//!
//! ## Workflow
//!
//! `sync_ban` runs: privilege check → target resolution (short-circuit
//! when the origin belongs to no network) → best-effort identity
//! resolution → local ban (fatal on failure, nothing recorded) →
//! concurrent remote fan-out with per-target failure isolation → one
//! audit record append.
//!
//! ## Concurrency
//!
//! Mutating operations on each persisted document serialize around their
//! load-modify-persist sequence behind one mutex per document. This
//! protects a single process from lost updates; concurrent writers from
//! multiple processes are an accepted limitation of the whole-document
//! persistence model.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::domain::{
    placeholder_user_name, recent, resolve_targets, BanOrigin, BanRecord, LeaveOutcome,
    RegistryState, ServerId, SyncError, UserId, DEFAULT_REASON,
};
use crate::ports::inbound::{BanSyncApi, SyncBanRequest, SyncReport};
use crate::ports::outbound::{BanActuator, DocumentStore, PrivilegeOracle};

/// Ban synchronization service.
///
/// Generic over its three collaborators so tests can wire mocks and the
/// runtime can wire the filesystem store and a platform actuator.
/// Thread-safe: share across tasks via `Arc`.
pub struct BanSyncService<S, A, P>
where
    S: DocumentStore,
    A: BanActuator,
    P: PrivilegeOracle,
{
    store: Arc<S>,
    actuator: Arc<A>,
    oracle: Arc<P>,
    /// Serializes registry load-modify-persist sequences.
    registry_lock: tokio::sync::Mutex<()>,
    /// Serializes ban-log load-modify-persist sequences.
    log_lock: tokio::sync::Mutex<()>,
}

impl<S, A, P> BanSyncService<S, A, P>
where
    S: DocumentStore,
    A: BanActuator,
    P: PrivilegeOracle,
{
    /// Wire the service to its collaborators.
    pub fn new(store: Arc<S>, actuator: Arc<A>, oracle: Arc<P>) -> Self {
        Self {
            store,
            actuator,
            oracle,
            registry_lock: tokio::sync::Mutex::new(()),
            log_lock: tokio::sync::Mutex::new(()),
        }
    }

    fn check_privilege(&self, actor: UserId, server: ServerId) -> Result<(), SyncError> {
        if self.oracle.is_privileged(actor, server) {
            Ok(())
        } else {
            warn!(%actor, %server, "privilege check failed");
            Err(SyncError::PermissionDenied { actor, server })
        }
    }

    /// Display name for the ban subject; placeholder if resolution fails.
    /// The result is informational only and never aborts the workflow.
    async fn resolve_subject_name(&self, user: UserId) -> String {
        match self.actuator.resolve_user_name(user).await {
            Ok(name) => name,
            Err(err) => {
                debug!(%user, error = %err, "display name resolution failed, using placeholder");
                placeholder_user_name(user)
            }
        }
    }

    async fn resolve_server_label(&self, server: ServerId) -> String {
        self.actuator
            .resolve_server_name(server)
            .await
            .unwrap_or_else(|_| server.to_string())
    }
}

#[async_trait]
impl<S, A, P> BanSyncApi for BanSyncService<S, A, P>
where
    S: DocumentStore,
    A: BanActuator,
    P: PrivilegeOracle,
{
    async fn create_network(
        &self,
        name: &str,
        actor: UserId,
        owner: ServerId,
    ) -> Result<(), SyncError> {
        self.check_privilege(actor, owner)?;

        let _guard = self.registry_lock.lock().await;
        let mut registry = self.store.load_registry().await?;
        registry.create(name, owner, Utc::now())?;
        self.store.store_registry(&registry).await?;

        info!(network = %name, %owner, "network created");
        Ok(())
    }

    async fn join_network(
        &self,
        name: &str,
        actor: UserId,
        server: ServerId,
    ) -> Result<(), SyncError> {
        self.check_privilege(actor, server)?;

        let _guard = self.registry_lock.lock().await;
        let mut registry = self.store.load_registry().await?;
        registry.join(name, server)?;
        self.store.store_registry(&registry).await?;

        info!(network = %name, %server, "server joined network");
        Ok(())
    }

    async fn leave_network(
        &self,
        name: &str,
        actor: UserId,
        server: ServerId,
    ) -> Result<LeaveOutcome, SyncError> {
        self.check_privilege(actor, server)?;

        let _guard = self.registry_lock.lock().await;
        let mut registry = self.store.load_registry().await?;
        let outcome = registry.leave(name, server)?;
        self.store.store_registry(&registry).await?;

        match outcome {
            LeaveOutcome::Left => info!(network = %name, %server, "server left network"),
            LeaveOutcome::Deleted => {
                info!(network = %name, %server, "last server left, network deleted")
            }
        }
        Ok(outcome)
    }

    async fn networks_for(
        &self,
        actor: UserId,
        server: ServerId,
    ) -> Result<Vec<String>, SyncError> {
        self.check_privilege(actor, server)?;

        let registry = self.store.load_registry().await?;
        Ok(registry.networks_containing(server))
    }

    async fn sync_ban(&self, request: SyncBanRequest) -> Result<SyncReport, SyncError> {
        let SyncBanRequest {
            origin,
            actor,
            user,
            reason,
        } = request;

        self.check_privilege(actor, origin)?;

        let registry: RegistryState = self.store.load_registry().await?;
        let plan = resolve_targets(origin, &registry);
        if plan.is_empty() {
            return Err(SyncError::NoNetworks(origin));
        }

        // Informational only: the ban itself needs just the numeric id.
        let user_name = self.resolve_subject_name(user).await;
        let origin_name = self.resolve_server_label(origin).await;
        let actor_name = self.resolve_subject_name(actor).await;
        let reason = reason.unwrap_or_else(|| DEFAULT_REASON.to_string());

        // Local ban first. Load-bearing: a ban that never took effect on
        // the origin must not be recorded or propagated.
        self.actuator
            .ban_user(origin, user, &format!("[Ban Sync] {reason}"))
            .await
            .map_err(|source| {
                error!(%origin, %user, error = %source, "local ban failed, aborting sync");
                SyncError::LocalBanFailed {
                    server: origin,
                    source,
                }
            })?;
        info!(%origin, %user, user_name = %user_name, "banned user on origin server");

        // Remote fan-out: each target attempted exactly once, failures
        // isolated and counted. All attempts complete before logging.
        let remote_reason = format!("[Ban Sync from {origin_name}] {reason}");
        let attempts = plan.targets.iter().map(|&target| {
            let actuator = &self.actuator;
            let reason = remote_reason.as_str();
            async move { (target, actuator.ban_user(target, user, reason).await) }
        });

        let mut remote_banned = 0;
        for (target, outcome) in futures::future::join_all(attempts).await {
            match outcome {
                Ok(()) => {
                    remote_banned += 1;
                    info!(server = %target, %user, "synced ban to server");
                }
                Err(err) => {
                    error!(server = %target, %user, error = %err, "failed to sync ban to server");
                }
            }
        }

        let record = BanRecord {
            user_id: user,
            user_name: user_name.clone(),
            reason,
            initiator_server: origin,
            initiator_server_name: origin_name,
            initiator_user: actor,
            initiator_user_name: actor_name,
            timestamp: Utc::now(),
            networks: plan.networks.clone(),
            origin: BanOrigin::BotInitiated,
        };

        {
            let _guard = self.log_lock.lock().await;
            let mut log = self.store.load_ban_log().await?;
            log.push(record);
            self.store.store_ban_log(&log).await?;
        }

        let report = SyncReport {
            user_id: user,
            user_name,
            networks: plan.networks,
            targets_attempted: plan.targets.len(),
            remote_banned,
            total_banned: 1 + remote_banned,
        };
        info!(
            %user,
            total_banned = report.total_banned,
            networks_affected = report.networks_affected(),
            "ban sync complete"
        );
        Ok(report)
    }

    async fn recent_bans(
        &self,
        actor: UserId,
        server: ServerId,
        limit: usize,
    ) -> Result<Vec<BanRecord>, SyncError> {
        self.check_privilege(actor, server)?;

        let log = self.store.load_ban_log().await?;
        Ok(recent(&log, limit))
    }
}
