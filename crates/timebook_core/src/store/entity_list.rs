//! Generic id-indexed entity collection.
//!
//! # Responsibility
//! - Shared add/get/update/remove/list behavior for person and group stores.
//! - Allocate ids only once a candidate entity has passed validation.
//!
//! # Invariants
//! - Iteration order is ascending id, which equals insertion order because
//!   ids are allocated monotonically.
//! - `remove` is crate-internal: only owning stores may call it, so every
//!   removal goes through a cascade.

use crate::model::descriptor::{GroupDescriptor, PersonDescriptor};
use crate::model::group::Group;
use crate::model::id::{EntityId, GroupId, PersonId};
use crate::model::person::Person;
use crate::model::validation::ValidationError;
use crate::store::allocator::IdAllocator;
use crate::store::error::{StoreError, StoreResult};
use std::collections::BTreeMap;

/// Entity that can live in an `EntityList`.
pub trait StoreEntity: Clone {
    type Id: EntityId;
    type Descriptor;

    /// Short kind label used in log events.
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    fn from_descriptor(id: Self::Id, descriptor: &Self::Descriptor) -> Result<Self, ValidationError>;
}

impl StoreEntity for Person {
    type Id = PersonId;
    type Descriptor = PersonDescriptor;

    const KIND: &'static str = "person";

    fn id(&self) -> PersonId {
        Person::id(self)
    }

    fn from_descriptor(id: PersonId, descriptor: &PersonDescriptor) -> Result<Self, ValidationError> {
        Person::from_descriptor(id, descriptor)
    }
}

impl StoreEntity for Group {
    type Id = GroupId;
    type Descriptor = GroupDescriptor;

    const KIND: &'static str = "group";

    fn id(&self) -> GroupId {
        Group::id(self)
    }

    fn from_descriptor(id: GroupId, descriptor: &GroupDescriptor) -> Result<Self, ValidationError> {
        Group::from_descriptor(id, descriptor)
    }
}

/// Homogeneous collection with its own id allocator.
#[derive(Debug, Clone)]
pub struct EntityList<E: StoreEntity> {
    entities: BTreeMap<E::Id, E>,
    allocator: IdAllocator<E::Id>,
}

impl<E: StoreEntity> EntityList<E> {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            allocator: IdAllocator::new(),
        }
    }

    /// Validates and commits a new entity under a fresh id.
    pub fn add(&mut self, descriptor: &E::Descriptor) -> StoreResult<&E> {
        self.add_with(descriptor, |_, _| Ok(()))
    }

    /// Like `add`, with an extra store-level check run on the validated
    /// candidate before anything is committed.
    pub fn add_with<F>(&mut self, descriptor: &E::Descriptor, check: F) -> StoreResult<&E>
    where
        F: FnOnce(&Self, &E) -> StoreResult<()>,
    {
        let candidate = E::from_descriptor(self.allocator.peek(), descriptor)?;
        check(&*self, &candidate)?;

        let id = self.allocator.next_id()?;
        log::debug!("event={}_add module=store status=ok id={}", E::KIND, id);
        Ok(&*self.entities.entry(id).or_insert(candidate))
    }

    pub fn get(&self, id: E::Id) -> StoreResult<&E> {
        self.entities
            .get(&id)
            .ok_or(StoreError::NotFound(id.entity_ref()))
    }

    /// Replaces the entity stored under `id` wholesale.
    pub fn update(&mut self, id: E::Id, descriptor: &E::Descriptor) -> StoreResult<&E> {
        self.update_with(id, descriptor, |_, _| Ok(()))
    }

    pub fn update_with<F>(
        &mut self,
        id: E::Id,
        descriptor: &E::Descriptor,
        check: F,
    ) -> StoreResult<&E>
    where
        F: FnOnce(&Self, &E) -> StoreResult<()>,
    {
        if !self.contains(id) {
            return Err(StoreError::NotFound(id.entity_ref()));
        }
        let candidate = E::from_descriptor(id, descriptor)?;
        check(&*self, &candidate)?;

        log::debug!("event={}_update module=store status=ok id={}", E::KIND, id);
        let slot = self
            .entities
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id.entity_ref()))?;
        *slot = candidate;
        Ok(&*slot)
    }

    pub(crate) fn remove(&mut self, id: E::Id) -> StoreResult<E> {
        let removed = self
            .entities
            .remove(&id)
            .ok_or(StoreError::NotFound(id.entity_ref()))?;
        log::debug!("event={}_remove module=store status=ok id={}", E::KIND, id);
        Ok(removed)
    }

    pub fn contains(&self, id: E::Id) -> bool {
        self.entities.contains_key(&id)
    }

    /// Borrowing iterator in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entities.values()
    }

    /// Owned snapshot in insertion order.
    pub fn list(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Next-id watermark of this list's allocator.
    pub fn watermark(&self) -> u64 {
        self.allocator.watermark()
    }

    /// Rebuilds a list from already-validated entities with unique ids.
    ///
    /// The allocator resumes above both `watermark` and the highest id present.
    /// A highest id of `u64::MAX` leaves the allocator exhausted.
    pub(crate) fn restore(entities: Vec<E>, watermark: u64) -> Self {
        let mut allocator = IdAllocator::new();
        allocator.resume_from(watermark);
        let entities: BTreeMap<E::Id, E> = entities
            .into_iter()
            .map(|entity| (entity.id(), entity))
            .collect();
        if let Some(max_id) = entities.keys().next_back() {
            allocator.resume_from(max_id.raw().checked_add(1).unwrap_or(u64::MAX));
        }
        Self {
            entities,
            allocator,
        }
    }
}

impl<E: StoreEntity> Default for EntityList<E> {
    fn default() -> Self {
        Self::new()
    }
}
