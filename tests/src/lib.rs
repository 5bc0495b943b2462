//! # Bansync Test Suite
//!
//! Unified test crate for cross-crate scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Core + store + runtime working together
//!     ├── flows.rs      # End-to-end ban synchronization scenarios
//!     └── persistence.rs# Durability across service restarts
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bansync-tests
//!
//! # By category
//! cargo test -p bansync-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
