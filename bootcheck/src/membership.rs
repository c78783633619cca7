use super::*;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// `StaticMembership` is a membership directory fixed at startup,
/// e.g. the initial cluster given by the operator.
/// Members are keyed by ID. Listing the same ID twice is rejected.
#[derive(Serialize, Deserialize, Clone, Default, Debug)]
#[serde(try_from = "Vec<Member>", into = "Vec<Member>")]
pub struct StaticMembership {
    members: BTreeMap<MemberId, Member>,
}

impl StaticMembership {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(
        members: impl IntoIterator<Item = Member>,
    ) -> Result<Self, MembershipError> {
        let mut out = Self::new();
        for m in members {
            out.add(m)?;
        }
        Ok(out)
    }

    /// Add a member. Fails if a member with the same ID is already listed.
    pub fn add(&mut self, member: Member) -> Result<(), MembershipError> {
        match self.members.entry(member.id) {
            Entry::Occupied(e) => Err(MembershipError::DuplicateMemberId(*e.key())),
            Entry::Vacant(e) => {
                e.insert(member);
                Ok(())
            }
        }
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MembershipDirectory for StaticMembership {
    fn members(&self) -> Vec<Member> {
        self.members.values().cloned().collect()
    }
}

impl TryFrom<Vec<Member>> for StaticMembership {
    type Error = MembershipError;

    fn try_from(members: Vec<Member>) -> Result<Self, Self::Error> {
        Self::from_members(members)
    }
}

impl From<StaticMembership> for Vec<Member> {
    fn from(x: StaticMembership) -> Self {
        x.members.into_values().collect()
    }
}
