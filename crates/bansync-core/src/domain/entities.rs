//! # Domain Entities
//!
//! Core entities for ban synchronization: identifier newtypes, the
//! `Network` membership group, and the immutable `BanRecord` audit entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason recorded when the caller did not supply one.
pub const DEFAULT_REASON: &str = "No reason provided";

/// Identifier of a server (the platform-level community that is the unit
/// of membership and ban actuation).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ServerId(pub u64);

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a platform user (ban subject or command actor).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name used when identity resolution fails. The ban itself only
/// needs the numeric id; the name is informational.
pub fn placeholder_user_name(user: UserId) -> String {
    format!("Unknown User ({user})")
}

/// A named group of servers that share ban decisions.
///
/// Serialized as `{owner, servers, created_at}` in the registry document.
/// `members` is an insertion-ordered, duplicate-free list; it is never
/// empty while the network exists (the registry deletes a network when
/// its last member leaves).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Server that created the network. Informational: not consulted for
    /// authorization, and the owner may later leave.
    pub owner: ServerId,
    /// Member servers.
    #[serde(rename = "servers")]
    pub members: Vec<ServerId>,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

impl Network {
    /// Create a network with the owner as its first member.
    pub fn new(owner: ServerId, created_at: DateTime<Utc>) -> Self {
        Self {
            owner,
            members: vec![owner],
            created_at,
        }
    }

    /// Whether `server` is a member.
    pub fn is_member(&self, server: ServerId) -> bool {
        self.members.contains(&server)
    }

    /// Number of member servers.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// How a recorded ban entered the system.
///
/// `External` is reserved for bans observed on the platform that were not
/// initiated through this core; no synchronization is performed for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BanOrigin {
    /// Ban issued through the synchronization workflow.
    #[default]
    BotInitiated,
    /// Ban observed from outside the workflow.
    External,
}

/// One audit entry describing a single synchronization event.
///
/// Immutable once created: never edited, only appended to the ban log.
/// Field names match the persisted ban-log document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanRecord {
    /// Banned user.
    pub user_id: UserId,
    /// Best-effort display name; a placeholder if resolution failed.
    pub user_name: String,
    /// Free-text justification (or [`DEFAULT_REASON`]).
    pub reason: String,
    /// Server the ban was issued on.
    pub initiator_server: ServerId,
    /// Best-effort display name of the initiating server.
    pub initiator_server_name: String,
    /// Actor who issued the ban.
    pub initiator_user: UserId,
    /// Best-effort display name of the actor.
    pub initiator_user_name: String,
    /// Issuance time (ISO-8601 in the persisted document).
    pub timestamp: DateTime<Utc>,
    /// Network names in scope for this propagation: the networks the
    /// origin server belonged to at the time.
    pub networks: Vec<String>,
    /// Provenance discriminator; defaults so pre-existing logs load.
    #[serde(default)]
    pub origin: BanOrigin,
}
