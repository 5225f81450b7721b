//! Person collection.

use crate::model::descriptor::PersonDescriptor;
use crate::model::id::PersonId;
use crate::model::person::Person;
use crate::store::entity_list::EntityList;
use crate::store::error::StoreResult;
use crate::store::mapping_store::MappingStore;

/// All committed persons. Names are not required to be unique.
///
/// Removal cascades into the mapping store, so it is only reachable through
/// `TimeBook::remove_person`:
///
/// ```compile_fail
/// use timebook_core::{MappingStore, PersonId, PersonStore};
///
/// let mut persons = PersonStore::new();
/// let mut mappings = MappingStore::new();
/// persons.remove(PersonId::new(0), &mut mappings).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PersonStore {
    list: EntityList<Person>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn restore(persons: Vec<Person>, watermark: u64) -> Self {
        Self {
            list: EntityList::restore(persons, watermark),
        }
    }

    pub fn add(&mut self, descriptor: &PersonDescriptor) -> StoreResult<&Person> {
        self.list.add(descriptor)
    }

    pub fn get(&self, id: PersonId) -> StoreResult<&Person> {
        self.list.get(id)
    }

    pub fn update(&mut self, id: PersonId, descriptor: &PersonDescriptor) -> StoreResult<&Person> {
        self.list.update(id, descriptor)
    }

    /// Removes a person together with all of their group memberships.
    pub(crate) fn remove(&mut self, id: PersonId, mappings: &mut MappingStore) -> StoreResult<Person> {
        let removed = self.list.remove(id)?;
        let dropped = mappings.remove_all_for_person(id);
        log::debug!("event=person_cascade module=store status=ok id={id} mappings_removed={dropped}");
        Ok(removed)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.list.contains(id)
    }

    /// First person, in insertion order, whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Person> {
        self.list.iter().find(|person| person.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.list.iter()
    }

    pub fn list(&self) -> Vec<Person> {
        self.list.list()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn watermark(&self) -> u64 {
        self.list.watermark()
    }
}
