//! Group entity.
//!
//! Name uniqueness is a store-level rule, see `store::group_store`.

use super::descriptor::GroupDescriptor;
use super::id::GroupId;
use super::validation::{optional_text, required_text, ValidationError};

/// Committed, id-bearing group record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: GroupId,
    name: String,
    remark: Option<String>,
}

impl Group {
    /// Validates `descriptor` and commits it under `id`.
    pub fn from_descriptor(id: GroupId, descriptor: &GroupDescriptor) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: required_text("name", descriptor.name.as_deref())?,
            remark: optional_text("remark", descriptor.remark.as_deref())?,
        })
    }

    /// Descriptor pre-filled with this group's fields, for edit flows.
    pub fn to_descriptor(&self) -> GroupDescriptor {
        GroupDescriptor {
            name: Some(self.name.clone()),
            remark: self.remark.clone(),
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn remark(&self) -> Option<&str> {
        self.remark.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::Group;
    use crate::model::descriptor::GroupDescriptor;
    use crate::model::id::GroupId;
    use crate::model::validation::ValidationError;

    #[test]
    fn from_descriptor_builds_group() {
        let descriptor = GroupDescriptor::new().with_name("CS2103").with_remark("tutorial");
        let group = Group::from_descriptor(GroupId::new(1), &descriptor).unwrap();
        assert_eq!(group.name(), "CS2103");
        assert_eq!(group.remark(), Some("tutorial"));
    }

    #[test]
    fn from_descriptor_rejects_blank_name() {
        let descriptor = GroupDescriptor::new().with_name("");
        let err = Group::from_descriptor(GroupId::new(1), &descriptor).unwrap_err();
        assert_eq!(err, ValidationError::BlankField("name"));
    }
}
