//! # Adapters
//!
//! In-memory document store backing unit tests. The production
//! filesystem adapter lives in `bansync-store`.

mod memory;

pub use memory::MemoryDocumentStore;
