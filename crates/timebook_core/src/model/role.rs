//! Membership role value type.
//!
//! # Invariants
//! - `Role::empty()` is the single "no role" value; all instances compare equal.
//! - A non-empty role always holds trimmed, non-blank text.

use super::validation::ValidationError;
use std::fmt::{Display, Formatter};

/// Optional job/role label attached to a person-group membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Role(Option<String>);

impl Role {
    /// The canonical "no role assigned" value.
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Builds a labelled role.
    ///
    /// # Errors
    /// - `ValidationError::BlankRole` when `text` is blank after trimming.
    pub fn of(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankRole);
        }
        Ok(Self(Some(trimmed.to_string())))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Label text, or `None` for the empty role.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}
