//! Person-group membership edge.

use super::id::{GroupId, PersonId};
use super::role::Role;

/// One membership of a person in a group.
///
/// At most one edge exists per `(person_id, group_id)` pair; the mapping
/// store enforces that, along with both ids referring to live entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    person_id: PersonId,
    group_id: GroupId,
    role: Role,
}

impl Mapping {
    pub fn new(person_id: PersonId, group_id: GroupId, role: Role) -> Self {
        Self {
            person_id,
            group_id,
            role,
        }
    }

    pub fn person_id(&self) -> PersonId {
        self.person_id
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub(crate) fn links(&self, person_id: PersonId, group_id: GroupId) -> bool {
        self.person_id == person_id && self.group_id == group_id
    }
}
