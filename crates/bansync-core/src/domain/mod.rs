//! # Domain Layer for Ban Synchronization
//!
//! Pure business logic with no I/O dependencies. This is the innermost
//! layer of the hexagonal architecture.
//!
//! ## Contents
//!
//! - **entities**: Core domain entities (`Network`, `BanRecord`, id newtypes)
//! - **registry**: The membership graph (`RegistryState`) with CRUD + invariants
//! - **fanout**: Deduplicated target resolution for a ban
//! - **ban_log**: Audit-trail queries
//! - **errors**: The error taxonomy (`SyncError`, `ActuatorError`, `StoreError`)
//! - **invariants**: Registry well-formedness checks
//!
//! ## Design Principles
//!
//! 1. **No I/O**: All functions are pure and synchronous
//! 2. **Testable**: All logic can be unit tested without mocks

mod ban_log;
mod entities;
mod errors;
mod fanout;
mod invariants;
mod registry;

pub use ban_log::*;
pub use entities::*;
pub use errors::*;
pub use fanout::*;
pub use invariants::*;
pub use registry::*;
