//! # Outbound Ports
//!
//! Traits for external collaborators: the durable document store, the
//! remote ban actuator, and the privilege oracle. Production adapters
//! implement these outside the core; mock implementations live here for
//! tests.

use crate::domain::{ActuatorError, BanRecord, RegistryState, ServerId, StoreError, UserId};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

/// Durable key-value blob store holding the two core documents.
///
/// Only whole-document reads and atomic whole-document overwrites: an
/// interrupted write leaves either the old or the new full content on
/// disk, never a mix. An absent document is [`StoreError::Missing`], not
/// an empty state — initialization is owned by the surrounding process.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the full network registry document.
    async fn load_registry(&self) -> Result<RegistryState, StoreError>;

    /// Overwrite the full network registry document.
    async fn store_registry(&self, registry: &RegistryState) -> Result<(), StoreError>;

    /// Read the full ban log document.
    async fn load_ban_log(&self) -> Result<Vec<BanRecord>, StoreError>;

    /// Overwrite the full ban log document.
    async fn store_ban_log(&self, log: &[BanRecord]) -> Result<(), StoreError>;
}

/// Remote capability that performs bans and resolves identities.
///
/// Calls must be bounded by a timeout owned by the implementation; the
/// core never retries and issues at most one attempt per target per ban.
#[async_trait]
pub trait BanActuator: Send + Sync {
    /// Ban `user` on `server` with the given audit reason.
    async fn ban_user(
        &self,
        server: ServerId,
        user: UserId,
        reason: &str,
    ) -> Result<(), ActuatorError>;

    /// Resolve a user's display name. Best-effort: callers fall back to
    /// a placeholder on failure.
    async fn resolve_user_name(&self, user: UserId) -> Result<String, ActuatorError>;

    /// Resolve a server's display name. Best-effort, audit-only.
    async fn resolve_server_name(&self, server: ServerId) -> Result<String, ActuatorError>;
}

/// Boolean privilege predicate supplied by the surrounding platform.
pub trait PrivilegeOracle: Send + Sync {
    /// Whether `actor` may issue membership/ban commands on `server`.
    fn is_privileged(&self, actor: UserId, server: ServerId) -> bool;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// One recorded ban attempt against the mock actuator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanCall {
    /// Target server.
    pub server: ServerId,
    /// Banned user.
    pub user: UserId,
    /// Reason as delivered to the actuator.
    pub reason: String,
}

/// Scriptable actuator for tests: per-server failures, canned display
/// names, and a recorded call trail.
#[derive(Default)]
pub struct MockActuator {
    user_names: HashMap<UserId, String>,
    server_names: HashMap<ServerId, String>,
    forbidden: HashSet<ServerId>,
    unreachable: HashSet<ServerId>,
    calls: Mutex<Vec<BanCall>>,
}

impl MockActuator {
    /// Actuator that succeeds everywhere and resolves no names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a display name for `user`.
    pub fn with_user_name(mut self, user: UserId, name: &str) -> Self {
        self.user_names.insert(user, name.to_owned());
        self
    }

    /// Register a display name for `server`.
    pub fn with_server_name(mut self, server: ServerId, name: &str) -> Self {
        self.server_names.insert(server, name.to_owned());
        self
    }

    /// Make ban attempts on `server` fail with `Forbidden`.
    pub fn forbidding(mut self, server: ServerId) -> Self {
        self.forbidden.insert(server);
        self
    }

    /// Make ban attempts on `server` fail with `Unreachable`.
    pub fn unreachable(mut self, server: ServerId) -> Self {
        self.unreachable.insert(server);
        self
    }

    /// Every ban attempt so far, successful or not, in call order.
    pub fn calls(&self) -> Vec<BanCall> {
        self.calls.lock().clone()
    }

    /// Servers a ban was attempted on, in call order.
    pub fn attempted_servers(&self) -> Vec<ServerId> {
        self.calls.lock().iter().map(|c| c.server).collect()
    }
}

#[async_trait]
impl BanActuator for MockActuator {
    async fn ban_user(
        &self,
        server: ServerId,
        user: UserId,
        reason: &str,
    ) -> Result<(), ActuatorError> {
        self.calls.lock().push(BanCall {
            server,
            user,
            reason: reason.to_owned(),
        });
        if self.forbidden.contains(&server) {
            return Err(ActuatorError::Forbidden(server));
        }
        if self.unreachable.contains(&server) {
            return Err(ActuatorError::Unreachable(server));
        }
        Ok(())
    }

    async fn resolve_user_name(&self, user: UserId) -> Result<String, ActuatorError> {
        self.user_names
            .get(&user)
            .cloned()
            .ok_or(ActuatorError::UserNotFound(user))
    }

    async fn resolve_server_name(&self, server: ServerId) -> Result<String, ActuatorError> {
        self.server_names
            .get(&server)
            .cloned()
            .ok_or_else(|| ActuatorError::Other(format!("unknown server {server}")))
    }
}

/// Oracle answering the same verdict for every caller.
#[derive(Debug, Clone, Copy)]
pub struct MockPrivilegeOracle {
    /// Verdict returned for every query.
    pub privileged: bool,
}

impl Default for MockPrivilegeOracle {
    fn default() -> Self {
        Self { privileged: true }
    }
}

impl PrivilegeOracle for MockPrivilegeOracle {
    fn is_privileged(&self, _actor: UserId, _server: ServerId) -> bool {
        self.privileged
    }
}
