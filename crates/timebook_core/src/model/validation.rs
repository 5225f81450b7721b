//! Field-level validation shared by every entity kind.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Malformed or missing entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was never supplied.
    MissingField(&'static str),
    /// A field was supplied but is empty after trimming whitespace.
    BlankField(&'static str),
    /// A role label is empty after trimming whitespace.
    BlankRole,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::BlankField(field) => write!(f, "field `{field}` must not be blank"),
            Self::BlankRole => write!(f, "role must not be blank"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn required_text(
    field: &'static str,
    value: Option<&str>,
) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField(field)),
        Some(text) => non_blank(field, text),
    }
}

pub(crate) fn optional_text(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    value.map(|text| non_blank(field, text)).transpose()
}

fn non_blank(field: &'static str, text: &str) -> Result<String, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(text.to_string())
}
