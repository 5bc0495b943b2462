//! Registry well-formedness invariants.

use super::entities::ServerId;
use super::registry::RegistryState;
use thiserror::Error;

/// INVARIANT-1: No empty networks
/// A network with zero members must never exist (the registry deletes it
/// when the last member leaves).
pub fn invariant_no_empty_networks(registry: &RegistryState) -> bool {
    registry.iter().all(|(_, network)| !network.members.is_empty())
}

/// INVARIANT-2: Unique members
/// No member list contains the same server twice.
pub fn invariant_unique_members(registry: &RegistryState) -> bool {
    registry.iter().all(|(_, network)| {
        let mut seen = std::collections::BTreeSet::new();
        network.members.iter().all(|m| seen.insert(*m))
    })
}

/// A registry state that violates a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryViolation {
    /// A persisted network has no members.
    #[error("network '{0}' has no members")]
    EmptyNetwork(String),

    /// A member list contains a server twice.
    #[error("network '{network}' lists server {server} more than once")]
    DuplicateMember {
        /// Network name.
        network: String,
        /// Duplicated server.
        server: ServerId,
    },
}

/// Check all registry invariants, naming the first violation found.
///
/// Used on registry load to reject a corrupt document before any
/// operation runs against it.
pub fn check_registry(registry: &RegistryState) -> Result<(), RegistryViolation> {
    for (name, network) in registry.iter() {
        if network.members.is_empty() {
            return Err(RegistryViolation::EmptyNetwork(name.clone()));
        }
        let mut seen = std::collections::BTreeSet::new();
        for member in &network.members {
            if !seen.insert(*member) {
                return Err(RegistryViolation::DuplicateMember {
                    network: name.clone(),
                    server: *member,
                });
            }
        }
    }
    Ok(())
}
