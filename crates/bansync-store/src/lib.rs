//! # Bansync Store
//!
//! Filesystem implementation of the core's [`DocumentStore`] port: the
//! network registry and the ban log live in two pretty-printed JSON
//! files. Every write replaces the whole document via a temp file and a
//! rename in the same directory, so an interrupted write leaves either
//! the old or the new full content on disk, never a mix.
//!
//! Document shapes:
//!
//! ```json
//! // sync_networks.json
//! { "<name>": { "owner": 1, "servers": [1, 2], "created_at": "..." } }
//!
//! // ban_log.json
//! [ { "user_id": 99, "user_name": "...", "reason": "...", ... } ]
//! ```
//!
//! An absent file is not an empty document: loads fail with
//! [`StoreError::Missing`] until [`JsonFileStore::initialize`] has seeded
//! `{}` / `[]`.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use bansync_core::domain::{check_registry, BanRecord, RegistryState, StoreError};
use bansync_core::ports::DocumentStore;

/// Default registry document file name.
pub const REGISTRY_FILE: &str = "sync_networks.json";
/// Default ban log document file name.
pub const BAN_LOG_FILE: &str = "ban_log.json";

/// File-backed [`DocumentStore`] over two JSON documents.
pub struct JsonFileStore {
    registry_path: PathBuf,
    log_path: PathBuf,
}

impl JsonFileStore {
    /// Store over explicit document paths.
    pub fn new(registry_path: impl Into<PathBuf>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            registry_path: registry_path.into(),
            log_path: log_path.into(),
        }
    }

    /// Store over the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(REGISTRY_FILE), dir.join(BAN_LOG_FILE))
    }

    /// Path of the registry document.
    pub fn registry_path(&self) -> &Path {
        &self.registry_path
    }

    /// Path of the ban log document.
    pub fn ban_log_path(&self) -> &Path {
        &self.log_path
    }

    /// Create empty documents (`{}` and `[]`) for any that do not exist.
    ///
    /// Run once by the surrounding process before first use; existing
    /// documents are left untouched.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        if !file_exists(&self.registry_path).await {
            write_document(&self.registry_path, &RegistryState::new()).await?;
            info!(path = %self.registry_path.display(), "created empty registry document");
        }
        if !file_exists(&self.log_path).await {
            write_document(&self.log_path, &Vec::<BanRecord>::new()).await?;
            info!(path = %self.log_path.display(), "created empty ban log document");
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load_registry(&self) -> Result<RegistryState, StoreError> {
        let registry: RegistryState = read_document(&self.registry_path, "sync_networks").await?;
        check_registry(&registry).map_err(|violation| StoreError::Malformed {
            name: "sync_networks".to_string(),
            reason: violation.to_string(),
        })?;
        Ok(registry)
    }

    async fn store_registry(&self, registry: &RegistryState) -> Result<(), StoreError> {
        write_document(&self.registry_path, registry).await?;
        debug!(networks = registry.len(), "registry document rewritten");
        Ok(())
    }

    async fn load_ban_log(&self) -> Result<Vec<BanRecord>, StoreError> {
        read_document(&self.log_path, "ban_log").await
    }

    async fn store_ban_log(&self, log: &[BanRecord]) -> Result<(), StoreError> {
        write_document(&self.log_path, &log).await?;
        debug!(records = log.len(), "ban log document rewritten");
        Ok(())
    }
}

async fn file_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

async fn read_document<T: DeserializeOwned>(path: &Path, name: &str) -> Result<T, StoreError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::Missing {
                name: name.to_string(),
            })
        }
        Err(err) => return Err(StoreError::Io(err)),
    };
    serde_json::from_slice(&bytes).map_err(|err| StoreError::Malformed {
        name: name.to_string(),
        reason: err.to_string(),
    })
}

/// Overwrite `path` with pretty-printed JSON, atomically at the document
/// level: the content lands in a sibling temp file first, then replaces
/// the document by rename.
async fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(value).map_err(|err| StoreError::Malformed {
        name: path.display().to_string(),
        reason: err.to_string(),
    })?;

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    tokio::fs::write(&tmp_path, &json).await?;
    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}
