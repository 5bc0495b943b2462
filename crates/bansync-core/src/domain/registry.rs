//! # Network Registry
//!
//! The membership graph: a mapping from network name to [`Network`].
//! Pure CRUD with invariant enforcement; persistence is the caller's
//! concern (the service loads a fresh state, mutates it here, and
//! rewrites the whole document).

use super::entities::{Network, ServerId};
use super::errors::SyncError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of leaving a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The server left; other members remain.
    Left,
    /// The server was the last member; the network was deleted.
    Deleted,
}

/// In-memory registry of all networks.
///
/// Keys are unique, case-sensitive network names. Iteration order is the
/// map's key order: stable for a given snapshot, but callers must not
/// depend on it matching creation order across sessions.
///
/// Invariants: no network exists with zero members, and no member list
/// contains duplicates. Both are enforced by the mutation methods here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryState {
    networks: BTreeMap<String, Network>,
}

impl RegistryState {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a network with `owner` as its first member.
    ///
    /// Fails with [`SyncError::NetworkExists`] if the name is taken; the
    /// existing network is left untouched.
    pub fn create(
        &mut self,
        name: &str,
        owner: ServerId,
        now: DateTime<Utc>,
    ) -> Result<(), SyncError> {
        if self.networks.contains_key(name) {
            return Err(SyncError::NetworkExists(name.to_owned()));
        }
        self.networks
            .insert(name.to_owned(), Network::new(owner, now));
        Ok(())
    }

    /// Add `server` to an existing network.
    pub fn join(&mut self, name: &str, server: ServerId) -> Result<(), SyncError> {
        let network = self
            .networks
            .get_mut(name)
            .ok_or_else(|| SyncError::NetworkNotFound(name.to_owned()))?;
        if network.is_member(server) {
            return Err(SyncError::AlreadyMember {
                network: name.to_owned(),
                server,
            });
        }
        network.members.push(server);
        Ok(())
    }

    /// Remove `server` from a network, deleting the network if it was the
    /// last member. A network with zero members never persists.
    pub fn leave(&mut self, name: &str, server: ServerId) -> Result<LeaveOutcome, SyncError> {
        let network = self
            .networks
            .get_mut(name)
            .ok_or_else(|| SyncError::NetworkNotFound(name.to_owned()))?;
        let Some(position) = network.members.iter().position(|&m| m == server) else {
            return Err(SyncError::NotMember {
                network: name.to_owned(),
                server,
            });
        };
        network.members.remove(position);
        if network.members.is_empty() {
            self.networks.remove(name);
            return Ok(LeaveOutcome::Deleted);
        }
        Ok(LeaveOutcome::Left)
    }

    /// Names of every network `server` belongs to, in snapshot order.
    pub fn networks_containing(&self, server: ServerId) -> Vec<String> {
        self.networks
            .iter()
            .filter(|(_, network)| network.is_member(server))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Look up a network by name.
    pub fn get(&self, name: &str) -> Option<&Network> {
        self.networks.get(name)
    }

    /// Iterate over all networks in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Network)> {
        self.networks.iter()
    }

    /// Number of networks.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Whether the registry holds no networks.
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
