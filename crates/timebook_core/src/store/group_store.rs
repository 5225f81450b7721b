//! Group collection.
//!
//! # Invariants
//! - Group names are unique, compared case-sensitively.

use crate::model::descriptor::GroupDescriptor;
use crate::model::group::Group;
use crate::model::id::GroupId;
use crate::store::entity_list::EntityList;
use crate::store::error::{StoreError, StoreResult};
use crate::store::mapping_store::MappingStore;

/// All committed groups.
///
/// Like persons, groups are only removed through `TimeBook::remove_group`.
#[derive(Debug, Clone, Default)]
pub struct GroupStore {
    list: EntityList<Group>,
}

impl GroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn restore(groups: Vec<Group>, watermark: u64) -> Self {
        Self {
            list: EntityList::restore(groups, watermark),
        }
    }

    /// Adds a group.
    ///
    /// # Errors
    /// - `Validation` for a missing/blank field.
    /// - `DuplicateName` when another group already uses the name.
    pub fn add(&mut self, descriptor: &GroupDescriptor) -> StoreResult<&Group> {
        self.list
            .add_with(descriptor, |list, candidate| ensure_unique_name(list, candidate))
    }

    pub fn get(&self, id: GroupId) -> StoreResult<&Group> {
        self.list.get(id)
    }

    /// Replaces a group. Keeping its own current name is not a collision.
    pub fn update(&mut self, id: GroupId, descriptor: &GroupDescriptor) -> StoreResult<&Group> {
        self.list
            .update_with(id, descriptor, |list, candidate| ensure_unique_name(list, candidate))
    }

    /// Removes a group together with all of its memberships.
    pub(crate) fn remove(&mut self, id: GroupId, mappings: &mut MappingStore) -> StoreResult<Group> {
        let removed = self.list.remove(id)?;
        let dropped = mappings.remove_all_for_group(id);
        log::debug!("event=group_cascade module=store status=ok id={id} mappings_removed={dropped}");
        Ok(removed)
    }

    pub fn contains(&self, id: GroupId) -> bool {
        self.list.contains(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Group> {
        self.list.iter().find(|group| group.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.list.iter()
    }

    pub fn list(&self) -> Vec<Group> {
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

fn ensure_unique_name(list: &EntityList<Group>, candidate: &Group) -> StoreResult<()> {
    let taken = list
        .iter()
        .any(|group| group.id() != candidate.id() && group.name() == candidate.name());
    if taken {
        log::debug!("event=group_write module=store status=rejected error_code=duplicate_name");
        return Err(StoreError::DuplicateName(candidate.name().to_string()));
    }
    Ok(())
}
