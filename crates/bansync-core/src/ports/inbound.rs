//! # Inbound Port
//!
//! The operation surface exposed to the command layer. Every method
//! returns a discriminated outcome; nothing panics or throws past this
//! boundary.

use crate::domain::{BanRecord, LeaveOutcome, ServerId, SyncError, UserId};
use async_trait::async_trait;

/// A ban to issue and propagate, as supplied by the command layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncBanRequest {
    /// Server the command was issued on; the ban lands here first.
    pub origin: ServerId,
    /// Actor issuing the command (checked against the privilege oracle).
    pub actor: UserId,
    /// User to ban.
    pub user: UserId,
    /// Free-text justification; a fixed placeholder is recorded when absent.
    pub reason: Option<String>,
}

/// Outcome of a completed synchronization, reported to the caller.
///
/// Per-target failures are not listed here: the caller sees aggregate
/// counts, and individual failures go to the operational trail only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Banned user.
    pub user_id: UserId,
    /// Resolved display name (or placeholder) used in the audit record.
    pub user_name: String,
    /// Networks that were in scope for the propagation.
    pub networks: Vec<String>,
    /// Remote targets attempted (each exactly once).
    pub targets_attempted: usize,
    /// Remote targets banned successfully.
    pub remote_banned: usize,
    /// Total servers banned: 1 (origin) + remote successes.
    pub total_banned: usize,
}

impl SyncReport {
    /// Number of networks the propagation spanned.
    pub fn networks_affected(&self) -> usize {
        self.networks.len()
    }
}

/// Ban synchronization API - inbound port.
#[async_trait]
pub trait BanSyncApi: Send + Sync {
    /// Create a new network owned by `owner`, which becomes its first
    /// member.
    async fn create_network(
        &self,
        name: &str,
        actor: UserId,
        owner: ServerId,
    ) -> Result<(), SyncError>;

    /// Add `server` to an existing network.
    async fn join_network(
        &self,
        name: &str,
        actor: UserId,
        server: ServerId,
    ) -> Result<(), SyncError>;

    /// Remove `server` from a network; the network is deleted when its
    /// last member leaves.
    async fn leave_network(
        &self,
        name: &str,
        actor: UserId,
        server: ServerId,
    ) -> Result<LeaveOutcome, SyncError>;

    /// Names of every network `server` belongs to.
    async fn networks_for(
        &self,
        actor: UserId,
        server: ServerId,
    ) -> Result<Vec<String>, SyncError>;

    /// Ban a user on the origin server and propagate the ban to every
    /// server sharing a network with it.
    async fn sync_ban(&self, request: SyncBanRequest) -> Result<SyncReport, SyncError>;

    /// The `limit` newest audit records, newest first.
    async fn recent_bans(
        &self,
        actor: UserId,
        server: ServerId,
        limit: usize,
    ) -> Result<Vec<BanRecord>, SyncError>;
}
