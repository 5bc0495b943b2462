//! # Bansync Runtime
//!
//! The "surrounding process" for the bansync core: loads configuration,
//! initializes telemetry and the data files, and wires the filesystem
//! store to a caller-supplied actuator and privilege oracle. The chat
//! platform's command layer stays outside this workspace; it talks to
//! the core through the [`bansync_core::ports::BanSyncApi`] trait of the
//! service built here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod telemetry;
pub mod wiring;

pub use config::RuntimeConfig;
pub use wiring::build_service;
