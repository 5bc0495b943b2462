//! # Ports
//!
//! Boundary traits of the hexagonal architecture.
//!
//! - **inbound**: [`BanSyncApi`] — the operation surface exposed to the
//!   command layer.
//! - **outbound**: collaborator contracts the core depends on
//!   ([`DocumentStore`], [`BanActuator`], [`PrivilegeOracle`]) plus mock
//!   implementations for testing.

pub mod inbound;
pub mod outbound;

pub use inbound::{BanSyncApi, SyncBanRequest, SyncReport};
pub use outbound::{
    BanActuator, BanCall, DocumentStore, MockActuator, MockPrivilegeOracle, PrivilegeOracle,
};
