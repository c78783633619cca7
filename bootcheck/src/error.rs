use super::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("initial cluster state unset and no discovery URL found")]
    AmbiguousBootstrapMode,
    #[error("couldn't find local ID {0} in cluster config")]
    LocalIdentityNotInCluster(MemberId),
    #[error("could not use {0} as member id")]
    ReservedIdentityUsed(MemberId),
    #[error("duplicate url {0} in cluster config")]
    DuplicatePeerUrl(PeerUrl),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid cluster state {0:?} (expected \"new\" or \"existing\")")]
pub struct ParseClusterStateError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    #[error("duplicate member id {0} in cluster config")]
    DuplicateMemberId(MemberId),
}
