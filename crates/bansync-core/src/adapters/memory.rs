//! In-memory [`DocumentStore`] for unit tests.

use crate::domain::{BanRecord, RegistryState, StoreError};
use crate::ports::outbound::DocumentStore;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Controllable in-memory store.
///
/// Holds both documents in memory and can simulate an uninitialized
/// store (missing documents) or failing writes, so tests can exercise
/// every persistence outcome the core distinguishes.
pub struct MemoryDocumentStore {
    registry: Mutex<Option<RegistryState>>,
    ban_log: Mutex<Option<Vec<BanRecord>>>,
    fail_writes: AtomicBool,
}

impl MemoryDocumentStore {
    /// Store with both documents initialized empty.
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(Some(RegistryState::new())),
            ban_log: Mutex::new(Some(Vec::new())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Store whose documents were never created.
    pub fn uninitialized() -> Self {
        Self {
            registry: Mutex::new(None),
            ban_log: Mutex::new(None),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent writes fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn write_error() -> StoreError {
        StoreError::Io(std::io::Error::other("simulated write failure"))
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::write_error());
        }
        Ok(())
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn load_registry(&self) -> Result<RegistryState, StoreError> {
        self.registry.lock().clone().ok_or(StoreError::Missing {
            name: "sync_networks".to_string(),
        })
    }

    async fn store_registry(&self, registry: &RegistryState) -> Result<(), StoreError> {
        self.check_writable()?;
        *self.registry.lock() = Some(registry.clone());
        Ok(())
    }

    async fn load_ban_log(&self) -> Result<Vec<BanRecord>, StoreError> {
        self.ban_log.lock().clone().ok_or(StoreError::Missing {
            name: "ban_log".to_string(),
        })
    }

    async fn store_ban_log(&self, log: &[BanRecord]) -> Result<(), StoreError> {
        self.check_writable()?;
        *self.ban_log.lock() = Some(log.to_vec());
        Ok(())
    }
}
