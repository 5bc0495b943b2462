//! # Domain Errors
//!
//! Error taxonomy for ban synchronization. Three concerns, three enums:
//! workflow/membership failures (`SyncError`), remote actuation failures
//! (`ActuatorError`), and persistence failures (`StoreError`).

use super::entities::{ServerId, UserId};
use thiserror::Error;

/// Failure of a remote actuation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActuatorError {
    /// The actuator lacks permission to ban on the given server.
    #[error("actuator lacks ban permission on server {0}")]
    Forbidden(ServerId),

    /// The server could not be reached.
    #[error("server {0} is unreachable")]
    Unreachable(ServerId),

    /// Identity resolution found no such user.
    #[error("user {0} not found")]
    UserNotFound(UserId),

    /// Any other actuator-side failure.
    #[error("actuator failure: {0}")]
    Other(String),
}

/// Failure of the durable document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document file does not exist. Absence is not a valid "empty"
    /// state: documents must be initialized before first use.
    #[error("document '{name}' is missing (data files not initialized)")]
    Missing {
        /// Document name.
        name: String,
    },

    /// The document exists but could not be decoded or violates a
    /// registry invariant.
    #[error("document '{name}' is malformed: {reason}")]
    Malformed {
        /// Document name.
        name: String,
        /// Decode or invariant failure description.
        reason: String,
    },

    /// Underlying I/O failure.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Discriminated outcome for every operation the core exposes.
///
/// Membership and permission errors are detected before any mutation.
/// `LocalBanFailed` aborts the whole workflow with nothing recorded;
/// remote-target failures are never surfaced here (they are counted and
/// logged to the operational trail only). `Persistence` after a
/// successful fan-out means the bans already actuated remain in effect.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The calling actor lacks privilege on the origin server.
    #[error("actor {actor} lacks privilege on server {server}")]
    PermissionDenied {
        /// Calling actor.
        actor: UserId,
        /// Server the command was issued on.
        server: ServerId,
    },

    /// No network with the given name exists.
    #[error("network '{0}' does not exist")]
    NetworkNotFound(String),

    /// A network with the given name already exists.
    #[error("network '{0}' already exists")]
    NetworkExists(String),

    /// The server is already a member of the network.
    #[error("server {server} is already a member of network '{network}'")]
    AlreadyMember {
        /// Network name.
        network: String,
        /// Joining server.
        server: ServerId,
    },

    /// The server is not a member of the network.
    #[error("server {server} is not a member of network '{network}'")]
    NotMember {
        /// Network name.
        network: String,
        /// Leaving server.
        server: ServerId,
    },

    /// The origin server belongs to no network; nothing to propagate.
    #[error("server {0} is not part of any ban sync network")]
    NoNetworks(ServerId),

    /// The ban on the origin server itself failed. Fatal: a ban that
    /// never took effect locally must not be recorded as having happened.
    #[error("local ban on server {server} failed: {source}")]
    LocalBanFailed {
        /// Origin server.
        server: ServerId,
        /// Underlying actuator failure.
        source: ActuatorError,
    },

    /// A document read or write failed.
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}
