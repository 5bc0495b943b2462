//! # Bansync Core
//!
//! Membership and propagation core for multi-network ban synchronization.
//! Maintains named groups ("networks") of cooperating servers and fans a
//! ban decision made on one server out to every other server in every
//! network it belongs to.
//!
//! ## Architecture Role
//!
//! ```text
//! [Command layer] ──SyncBanRequest──→ [BanSyncService]
//!                                           │
//!                        ┌─────────────────┼──────────────────┐
//!                        ↓                 ↓                  ↓
//!                 [PrivilegeOracle]  [BanActuator]     [DocumentStore]
//!                  (is caller        (ban + identity    (registry and
//!                   privileged?)      resolution)        ban log JSON)
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! bansync-core/
//! ├── domain/     # Network, RegistryState, BanRecord, fan-out, errors
//! ├── ports/      # BanSyncApi (inbound), collaborator traits (outbound)
//! ├── adapters/   # In-memory document store for tests
//! └── service.rs  # BanSyncService orchestration
//! ```
//!
//! The domain layer is pure and synchronous; all I/O goes through the
//! outbound ports. Production adapters (filesystem store, chat-platform
//! actuator) live outside this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    check_registry, placeholder_user_name, recent, resolve_targets, ActuatorError, BanOrigin,
    BanRecord, FanoutPlan, LeaveOutcome, Network, RegistryState, RegistryViolation, ServerId,
    StoreError, SyncError, UserId, DEFAULT_REASON,
};
pub use ports::{
    BanActuator, BanSyncApi, DocumentStore, PrivilegeOracle, SyncBanRequest, SyncReport,
};
pub use service::BanSyncService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
