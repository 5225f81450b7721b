//! Aggregate owning the person, group and mapping stores.
//!
//! # Responsibility
//! - Single entry point for command orchestration over the three stores.
//! - Wire cascading deletes and integrity checks across store boundaries.
//!
//! # Invariants
//! - Stores are exposed read-only. Operations that span stores (cascading
//!   removal, edge creation) are crate-internal on the stores, so `TimeBook`
//!   is the only public way to perform them.

use crate::model::descriptor::{GroupDescriptor, PersonDescriptor};
use crate::model::group::Group;
use crate::model::id::{GroupId, PersonId};
use crate::model::mapping::Mapping;
use crate::model::person::Person;
use crate::model::role::Role;
use crate::store::error::StoreResult;
use crate::store::group_store::GroupStore;
use crate::store::mapping_store::MappingStore;
use crate::store::person_store::PersonStore;

/// People, groups and who belongs where.
#[derive(Debug, Clone, Default)]
pub struct TimeBook {
    persons: PersonStore,
    groups: GroupStore,
    mappings: MappingStore,
}

impl TimeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        persons: PersonStore,
        groups: GroupStore,
        mappings: MappingStore,
    ) -> Self {
        Self {
            persons,
            groups,
            mappings,
        }
    }

    pub fn persons(&self) -> &PersonStore {
        &self.persons
    }

    pub fn groups(&self) -> &GroupStore {
        &self.groups
    }

    pub fn mappings(&self) -> &MappingStore {
        &self.mappings
    }

    pub fn add_person(&mut self, descriptor: &PersonDescriptor) -> StoreResult<&Person> {
        self.persons.add(descriptor)
    }

    pub fn get_person(&self, id: PersonId) -> StoreResult<&Person> {
        self.persons.get(id)
    }

    pub fn update_person(
        &mut self,
        id: PersonId,
        descriptor: &PersonDescriptor,
    ) -> StoreResult<&Person> {
        self.persons.update(id, descriptor)
    }

    /// Removes a person and every membership that references them.
    pub fn remove_person(&mut self, id: PersonId) -> StoreResult<Person> {
        self.persons.remove(id, &mut self.mappings)
    }

    pub fn list_persons(&self) -> Vec<Person> {
        self.persons.list()
    }

    pub fn find_person_by_name(&self, name: &str) -> Option<&Person> {
        self.persons.find_by_name(name)
    }

    pub fn add_group(&mut self, descriptor: &GroupDescriptor) -> StoreResult<&Group> {
        self.groups.add(descriptor)
    }

    pub fn get_group(&self, id: GroupId) -> StoreResult<&Group> {
        self.groups.get(id)
    }

    pub fn update_group(
        &mut self,
        id: GroupId,
        descriptor: &GroupDescriptor,
    ) -> StoreResult<&Group> {
        self.groups.update(id, descriptor)
    }

    /// Removes a group and every membership that references it.
    pub fn remove_group(&mut self, id: GroupId) -> StoreResult<Group> {
        self.groups.remove(id, &mut self.mappings)
    }

    pub fn list_groups(&self) -> Vec<Group> {
        self.groups.list()
    }

    pub fn find_group_by_name(&self, name: &str) -> Option<&Group> {
        self.groups.find_by_name(name)
    }

    pub fn add_mapping(
        &mut self,
        person_id: PersonId,
        group_id: GroupId,
        role: Role,
    ) -> StoreResult<&Mapping> {
        self.mappings
            .add(&self.persons, &self.groups, person_id, group_id, role)
    }

    pub fn set_role(
        &mut self,
        person_id: PersonId,
        group_id: GroupId,
        role: Role,
    ) -> StoreResult<&Mapping> {
        self.mappings.set_role(person_id, group_id, role)
    }

    pub fn remove_mapping(&mut self, person_id: PersonId, group_id: GroupId) -> StoreResult<Mapping> {
        self.mappings.remove(person_id, group_id)
    }

    pub fn list_mappings_for_person(&self, person_id: PersonId) -> StoreResult<Vec<Mapping>> {
        self.mappings.list_for_person(&self.persons, person_id)
    }

    pub fn list_mappings_for_group(&self, group_id: GroupId) -> StoreResult<Vec<Mapping>> {
        self.mappings.list_for_group(&self.groups, group_id)
    }

    pub fn list_mappings(&self) -> Vec<Mapping> {
        self.mappings.list()
    }
}
