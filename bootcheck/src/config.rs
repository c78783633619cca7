use super::*;

use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// `ServerConfig` is the configuration of the local server as assembled
/// from the command line or discovery.
pub struct ServerConfig<'a> {
    pub local_member: Member,
    /// Empty if no discovery service is used.
    pub discovery_url: String,
    pub client_urls: Vec<String>,
    pub data_dir: PathBuf,
    pub snap_count: u64,
    pub cluster: &'a dyn MembershipDirectory,
    pub cluster_state: ClusterState,
}

impl<'a> ServerConfig<'a> {
    /// Sanity-check the initial configuration.
    /// `none` is the ID the Raft engine reserves to mean "no member".
    ///
    /// The checks run in a fixed order and only the first violation is returned.
    /// The bootstrap mode is checked first because the membership
    /// is meaningless when the mode is ambiguous.
    pub fn verify_bootstrap_config(&self, none: MemberId) -> Result<(), BootstrapError> {
        debug!(
            "verify bootstrap config (id={}, state={})",
            self.id(),
            self.cluster_state,
        );

        let out = self.check(none);
        match &out {
            Ok(()) => info!(
                "bootstrap config ok (id={}, discover={})",
                self.id(),
                self.should_discover(),
            ),
            Err(e) => warn!("bootstrap config rejected: {e}"),
        }
        out
    }

    fn check(&self, none: MemberId) -> Result<(), BootstrapError> {
        if !self.should_discover() && self.cluster_state != ClusterState::New {
            return Err(BootstrapError::AmbiguousBootstrapMode);
        }

        let members = self.cluster.members();
        debug!("{} members in cluster config", members.len());

        // The cluster must at least contain the local server.
        let local_id = self.id();
        if !members.iter().any(|m| m.id == local_id) {
            return Err(BootstrapError::LocalIdentityNotInCluster(local_id));
        }

        if local_id == none {
            return Err(BootstrapError::ReservedIdentityUsed(none));
        }

        // No peer URL may appear twice in the whole cluster,
        // not even twice under the same member.
        let mut seen = HashSet::new();
        for url in members.iter().flat_map(|m| &m.peer_urls) {
            if !seen.insert(url) {
                return Err(BootstrapError::DuplicatePeerUrl(url.clone()));
            }
        }

        Ok(())
    }

    /// Directory of the write-ahead log.
    pub fn wal_dir(&self) -> PathBuf {
        self.data_dir.join("wal")
    }

    /// Directory of the snapshots.
    pub fn snap_dir(&self) -> PathBuf {
        self.data_dir.join("snap")
    }

    pub fn id(&self) -> MemberId {
        self.local_member.id
    }

    pub fn should_discover(&self) -> bool {
        !self.discovery_url.is_empty()
    }
}
