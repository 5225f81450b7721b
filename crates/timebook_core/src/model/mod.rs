//! Domain model for people, groups and their memberships.
//!
//! # Responsibility
//! - Define committed entity records and the descriptors they are built from.
//! - Keep field validation in one explicit function per entity kind.
//!
//! # Invariants
//! - Committed records are immutable; changes go through store `update`.
//! - A committed record always satisfies its kind's validation rules.

pub mod descriptor;
pub mod group;
pub mod id;
pub mod mapping;
pub mod person;
pub mod role;
pub mod validation;
