#![deny(unused_must_use)]

//! Checks run on a node's configuration before it joins or forms a Raft cluster.

/// Errors reported by the bootstrap checks.
mod error;
pub use error::{BootstrapError, MembershipError, ParseClusterStateError};

/// How the local node joins the cluster.
mod cluster_state;
pub use cluster_state::ClusterState;

/// In-memory membership directory.
mod membership;
pub use membership::StaticMembership;

/// Server configuration and the bootstrap checks over it.
mod config;
pub use config::ServerConfig;

use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of a cluster member.
/// Printed in hex in every operator-facing message.
#[derive(
    Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display, From,
)]
#[display("{_0:x}")]
pub struct MemberId(pub u64);

impl FromStr for MemberId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16).map(Self)
    }
}

/// Endpoint used for communication between members.
/// Two endpoints are the same only if their strings are identical.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug, Display, Deref, From)]
#[serde(transparent)]
pub struct PeerUrl(String);

impl PeerUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl From<&str> for PeerUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

/// A single node in the cluster.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Member {
    pub id: MemberId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub peer_urls: Vec<PeerUrl>,
    #[serde(default)]
    pub client_urls: Vec<String>,
}

impl Member {
    pub fn new(id: MemberId, peer_urls: impl IntoIterator<Item = impl Into<PeerUrl>>) -> Self {
        Self {
            id,
            name: String::new(),
            peer_urls: peer_urls.into_iter().map(Into::into).collect(),
            client_urls: vec![],
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// `MembershipDirectory` is the read-only view of the cluster membership.
/// The bootstrap checks only need to enumerate the current members.
pub trait MembershipDirectory {
    /// List the current members of the cluster.
    fn members(&self) -> Vec<Member>;
}
