//! Store error taxonomy.

use crate::model::id::{EntityRef, GroupId, PersonId};
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store operation. Nothing was changed when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Descriptor or role failed field validation.
    Validation(ValidationError),
    /// Another group already uses this name.
    DuplicateName(String),
    /// The person is already a member of the group.
    DuplicateMapping {
        person_id: PersonId,
        group_id: GroupId,
    },
    /// Referenced entity or edge does not exist.
    NotFound(EntityRef),
    /// The allocator for this kind has no ids left to issue.
    IdsExhausted(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateName(name) => write!(f, "group name already in use: `{name}`"),
            Self::DuplicateMapping {
                person_id,
                group_id,
            } => write!(f, "person {person_id} is already in group {group_id}"),
            Self::NotFound(target) => write!(f, "{target} not found"),
            Self::IdsExhausted(kind) => write!(f, "no {kind} ids left to allocate"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
