//! Person-group membership relation.
//!
//! # Responsibility
//! - Hold membership edges in insertion order.
//! - Check both endpoints against their owning stores before committing.
//!
//! # Invariants
//! - At most one edge per `(person_id, group_id)` pair.
//! - Listing by person/group preserves the order edges were added in.

use crate::model::id::{EntityRef, GroupId, PersonId};
use crate::model::mapping::Mapping;
use crate::model::role::Role;
use crate::store::error::{StoreError, StoreResult};
use crate::store::group_store::GroupStore;
use crate::store::person_store::PersonStore;

/// The set of membership edges.
///
/// Edges are created through `TimeBook::add_mapping`, which supplies the
/// stores the endpoints are checked against:
///
/// ```compile_fail
/// use timebook_core::{GroupId, GroupStore, MappingStore, PersonId, PersonStore, Role};
///
/// let mut mappings = MappingStore::new();
/// let (persons, groups) = (PersonStore::new(), GroupStore::new());
/// mappings
///     .add(&persons, &groups, PersonId::new(0), GroupId::new(0), Role::empty())
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct MappingStore {
    edges: Vec<Mapping>,
}

impl MappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds from edges already checked for integrity and uniqueness.
    pub(crate) fn restore(edges: Vec<Mapping>) -> Self {
        Self { edges }
    }

    /// Adds a membership edge.
    ///
    /// # Errors
    /// - `NotFound` when either id is absent from its store.
    /// - `DuplicateMapping` when the pair already has an edge.
    pub(crate) fn add(
        &mut self,
        persons: &PersonStore,
        groups: &GroupStore,
        person_id: PersonId,
        group_id: GroupId,
        role: Role,
    ) -> StoreResult<&Mapping> {
        if !persons.contains(person_id) {
            return Err(StoreError::NotFound(EntityRef::Person(person_id)));
        }
        if !groups.contains(group_id) {
            return Err(StoreError::NotFound(EntityRef::Group(group_id)));
        }
        if self.position(person_id, group_id).is_some() {
            return Err(StoreError::DuplicateMapping {
                person_id,
                group_id,
            });
        }

        self.edges.push(Mapping::new(person_id, group_id, role));
        log::debug!(
            "event=mapping_add module=store status=ok person_id={person_id} group_id={group_id}"
        );
        let index = self.edges.len() - 1;
        Ok(&self.edges[index])
    }

    pub fn get(&self, person_id: PersonId, group_id: GroupId) -> StoreResult<&Mapping> {
        self.position(person_id, group_id)
            .map(|index| &self.edges[index])
            .ok_or_else(|| missing_edge(person_id, group_id))
    }

    /// Replaces the role of an existing edge in place.
    pub fn set_role(
        &mut self,
        person_id: PersonId,
        group_id: GroupId,
        role: Role,
    ) -> StoreResult<&Mapping> {
        let index = self
            .position(person_id, group_id)
            .ok_or_else(|| missing_edge(person_id, group_id))?;
        let edge = &mut self.edges[index];
        edge.set_role(role);
        log::debug!(
            "event=mapping_set_role module=store status=ok person_id={person_id} group_id={group_id}"
        );
        Ok(&*edge)
    }

    pub fn remove(&mut self, person_id: PersonId, group_id: GroupId) -> StoreResult<Mapping> {
        let index = self
            .position(person_id, group_id)
            .ok_or_else(|| missing_edge(person_id, group_id))?;
        log::debug!(
            "event=mapping_remove module=store status=ok person_id={person_id} group_id={group_id}"
        );
        Ok(self.edges.remove(index))
    }

    /// Drops every edge of `person_id`. Returns how many were removed.
    pub(crate) fn remove_all_for_person(&mut self, person_id: PersonId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.person_id() != person_id);
        before - self.edges.len()
    }

    /// Drops every edge of `group_id`. Returns how many were removed.
    pub(crate) fn remove_all_for_group(&mut self, group_id: GroupId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.group_id() != group_id);
        before - self.edges.len()
    }

    /// Memberships of one person; empty when the person has none.
    ///
    /// # Errors
    /// - `NotFound` only when the person itself is unknown.
    pub fn list_for_person(
        &self,
        persons: &PersonStore,
        person_id: PersonId,
    ) -> StoreResult<Vec<Mapping>> {
        if !persons.contains(person_id) {
            return Err(StoreError::NotFound(EntityRef::Person(person_id)));
        }
        Ok(self
            .edges
            .iter()
            .filter(|edge| edge.person_id() == person_id)
            .cloned()
            .collect())
    }

    /// Members of one group; empty when the group has none.
    pub fn list_for_group(
        &self,
        groups: &GroupStore,
        group_id: GroupId,
    ) -> StoreResult<Vec<Mapping>> {
        if !groups.contains(group_id) {
            return Err(StoreError::NotFound(EntityRef::Group(group_id)));
        }
        Ok(self
            .edges
            .iter()
            .filter(|edge| edge.group_id() == group_id)
            .cloned()
            .collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mapping> {
        self.edges.iter()
    }

    pub fn list(&self) -> Vec<Mapping> {
        self.edges.clone()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn position(&self, person_id: PersonId, group_id: GroupId) -> Option<usize> {
        self.edges
            .iter()
            .position(|edge| edge.links(person_id, group_id))
    }
}

fn missing_edge(person_id: PersonId, group_id: GroupId) -> StoreError {
    StoreError::NotFound(EntityRef::Mapping {
        person_id,
        group_id,
    })
}

#[cfg(test)]
mod tests {
    use super::MappingStore;
    use crate::model::descriptor::{GroupDescriptor, PersonDescriptor};
    use crate::model::id::{EntityRef, GroupId, PersonId};
    use crate::model::role::Role;
    use crate::store::error::StoreError;
    use crate::store::group_store::GroupStore;
    use crate::store::person_store::PersonStore;

    fn fixture() -> (PersonStore, GroupStore, MappingStore) {
        let mut persons = PersonStore::new();
        let mut groups = GroupStore::new();
        persons.add(&PersonDescriptor::new().with_name("Alice")).unwrap();
        persons.add(&PersonDescriptor::new().with_name("Bob")).unwrap();
        groups.add(&GroupDescriptor::new().with_name("CS2103")).unwrap();
        (persons, groups, MappingStore::new())
    }

    #[test]
    fn add_rejects_unknown_endpoints_without_side_effects() {
        let (persons, groups, mut mappings) = fixture();
        let err = mappings
            .add(&persons, &groups, PersonId::new(5), GroupId::new(0), Role::empty())
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(EntityRef::Person(PersonId::new(5))));

        let err = mappings
            .add(&persons, &groups, PersonId::new(0), GroupId::new(3), Role::empty())
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(EntityRef::Group(GroupId::new(3))));
        assert!(mappings.is_empty());
    }

    #[test]
    fn set_role_replaces_in_place() {
        let (persons, groups, mut mappings) = fixture();
        let (alice, bob, group) = (PersonId::new(0), PersonId::new(1), GroupId::new(0));
        mappings.add(&persons, &groups, alice, group, Role::empty()).unwrap();
        mappings.add(&persons, &groups, bob, group, Role::empty()).unwrap();

        mappings.set_role(alice, group, Role::of("TA").unwrap()).unwrap();

        let members = mappings.list_for_group(&groups, group).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].person_id(), alice);
        assert_eq!(members[0].role(), &Role::of("TA").unwrap());
    }

    #[test]
    fn set_role_and_remove_require_existing_edge() {
        let (_, _, mut mappings) = fixture();
        let (alice, group) = (PersonId::new(0), GroupId::new(0));
        let expected = StoreError::NotFound(EntityRef::Mapping {
            person_id: alice,
            group_id: group,
        });
        assert_eq!(mappings.set_role(alice, group, Role::empty()).unwrap_err(), expected);
        assert_eq!(mappings.remove(alice, group).unwrap_err(), expected);
    }

    #[test]
    fn remove_all_is_idempotent() {
        let (persons, groups, mut mappings) = fixture();
        let (alice, group) = (PersonId::new(0), GroupId::new(0));
        mappings.add(&persons, &groups, alice, group, Role::empty()).unwrap();

        assert_eq!(mappings.remove_all_for_person(alice), 1);
        assert_eq!(mappings.remove_all_for_person(alice), 0);
        assert_eq!(mappings.remove_all_for_group(group), 0);
    }

    #[test]
    fn listing_distinguishes_no_memberships_from_unknown_id() {
        let (persons, groups, mappings) = fixture();
        assert!(mappings.list_for_person(&persons, PersonId::new(1)).unwrap().is_empty());
        assert_eq!(
            mappings.list_for_person(&persons, PersonId::new(9)).unwrap_err(),
            StoreError::NotFound(EntityRef::Person(PersonId::new(9)))
        );
        assert!(mappings.list_for_group(&groups, GroupId::new(0)).unwrap().is_empty());
    }
}
