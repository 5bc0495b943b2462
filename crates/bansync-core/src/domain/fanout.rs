//! # Fan-out Resolution
//!
//! Computes the set of servers a ban must be propagated to. The target
//! set is the union of the members of every network containing the
//! origin, minus the origin itself: a server reachable through more than
//! one shared network is actuated on at most once per ban.

use super::entities::ServerId;
use super::registry::RegistryState;
use std::collections::BTreeSet;

/// Resolved propagation scope for one ban.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanoutPlan {
    /// Networks the origin server belongs to, in registry snapshot order.
    pub networks: Vec<String>,
    /// Deduplicated remote targets, origin excluded. Unordered with
    /// respect to actuation; held sorted for determinism.
    pub targets: Vec<ServerId>,
}

impl FanoutPlan {
    /// True when the origin belongs to no network. The propagator must
    /// short-circuit before invoking the actuator at all.
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

/// Resolve the propagation scope for a ban issued on `origin`.
pub fn resolve_targets(origin: ServerId, registry: &RegistryState) -> FanoutPlan {
    let mut networks = Vec::new();
    let mut targets = BTreeSet::new();

    for (name, network) in registry.iter() {
        if network.is_member(origin) {
            networks.push(name.clone());
            targets.extend(network.members.iter().copied());
        }
    }
    targets.remove(&origin);

    FanoutPlan {
        networks,
        targets: targets.into_iter().collect(),
    }
}
