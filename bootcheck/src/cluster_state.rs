use super::*;

/// `ClusterState` tells how the local node joins the cluster.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[serde(rename_all = "lowercase")]
pub enum ClusterState {
    /// Forming a new cluster. No state exists anywhere yet.
    #[display("new")]
    New,
    /// Joining a cluster that already has state.
    #[display("existing")]
    Existing,
}

impl FromStr for ClusterState {
    type Err = ParseClusterStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("new") {
            Ok(Self::New)
        } else if s.eq_ignore_ascii_case("existing") {
            Ok(Self::Existing)
        } else {
            Err(ParseClusterStateError(s.to_owned()))
        }
    }
}
