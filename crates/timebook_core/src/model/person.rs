//! Person entity.
//!
//! # Invariants
//! - `name` is present and non-blank.
//! - Optional contact fields are either absent or non-blank.

use super::descriptor::PersonDescriptor;
use super::id::PersonId;
use super::validation::{optional_text, required_text, ValidationError};

/// Committed, id-bearing person record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: String,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    remark: Option<String>,
}

impl Person {
    /// Validates `descriptor` and commits it under `id`.
    ///
    /// # Errors
    /// - `MissingField("name")` / `BlankField(..)` naming the first bad field.
    pub fn from_descriptor(
        id: PersonId,
        descriptor: &PersonDescriptor,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: required_text("name", descriptor.name.as_deref())?,
            phone: optional_text("phone", descriptor.phone.as_deref())?,
            email: optional_text("email", descriptor.email.as_deref())?,
            address: optional_text("address", descriptor.address.as_deref())?,
            remark: optional_text("remark", descriptor.remark.as_deref())?,
        })
    }

    /// Descriptor pre-filled with this person's fields, for edit flows.
    pub fn to_descriptor(&self) -> PersonDescriptor {
        PersonDescriptor {
            name: Some(self.name.clone()),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            remark: self.remark.clone(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn remark(&self) -> Option<&str> {
        self.remark.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::Person;
    use crate::model::descriptor::PersonDescriptor;
    use crate::model::id::PersonId;
    use crate::model::validation::ValidationError;

    #[test]
    fn from_descriptor_copies_supplied_fields() {
        let descriptor = PersonDescriptor::new()
            .with_name("Alice Tan")
            .with_email("alice@example.com");
        let person = Person::from_descriptor(PersonId::new(4), &descriptor).unwrap();

        assert_eq!(person.id(), PersonId::new(4));
        assert_eq!(person.name(), "Alice Tan");
        assert_eq!(person.email(), Some("alice@example.com"));
        assert_eq!(person.phone(), None);
        assert_eq!(person.to_descriptor(), descriptor);
    }

    #[test]
    fn from_descriptor_requires_name() {
        let err = Person::from_descriptor(PersonId::new(0), &PersonDescriptor::new()).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("name"));
    }

    #[test]
    fn from_descriptor_rejects_blank_optional_field() {
        let descriptor = PersonDescriptor::new().with_name("Bob").with_address("   ");
        let err = Person::from_descriptor(PersonId::new(0), &descriptor).unwrap_err();
        assert_eq!(err, ValidationError::BlankField("address"));
    }
}
