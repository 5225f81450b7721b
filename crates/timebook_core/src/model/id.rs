//! Typed numeric identifiers.
//!
//! # Invariants
//! - `PersonId` and `GroupId` live in independent id spaces and never mix.
//! - Serialized transparently as plain JSON numbers.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Common surface of store-allocated identifiers.
pub trait EntityId: Copy + Ord + std::hash::Hash + Display + std::fmt::Debug {
    /// Builds an id from its raw counter value.
    fn from_raw(raw: u64) -> Self;
    /// Raw counter value.
    fn raw(self) -> u64;
    /// Reference used in not-found reporting.
    fn entity_ref(self) -> EntityRef;
    /// Kind label, e.g. `person`.
    const KIND: &'static str;
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl EntityId for $name {
            const KIND: &'static str = $kind;

            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn raw(self) -> u64 {
                self.0
            }

            fn entity_ref(self) -> EntityRef {
                EntityRef::$variant(self)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a person, unique within the person store.
    PersonId,
    Person,
    "person"
);
entity_id!(
    /// Identifier of a group, unique within the group store.
    GroupId,
    Group,
    "group"
);

/// Points at something a caller referenced by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Person(PersonId),
    Group(GroupId),
    Mapping {
        person_id: PersonId,
        group_id: GroupId,
    },
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Person(id) => write!(f, "person {id}"),
            Self::Group(id) => write!(f, "group {id}"),
            Self::Mapping {
                person_id,
                group_id,
            } => write!(f, "mapping person {person_id} -> group {group_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityId, EntityRef, GroupId, PersonId};

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&PersonId::new(7)).unwrap();
        assert_eq!(json, "7");
        let decoded: GroupId = serde_json::from_str("12").unwrap();
        assert_eq!(decoded, GroupId::new(12));
    }

    #[test]
    fn entity_ref_tracks_kind() {
        assert_eq!(PersonId::new(3).entity_ref(), EntityRef::Person(PersonId::new(3)));
        assert_eq!(GroupId::new(3).entity_ref().to_string(), "group 3");
    }
}
