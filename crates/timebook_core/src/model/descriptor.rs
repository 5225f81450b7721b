//! Mutable builders for person/group input.
//!
//! Descriptors hold only what a caller supplied so far. They are never
//! trusted: stores validate them again before committing anything.

/// Unvalidated person fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDescriptor {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub remark: Option<String>,
}

impl PersonDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }
}

/// Unvalidated group fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDescriptor {
    pub name: Option<String>,
    pub remark: Option<String>,
}

impl GroupDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }
}
