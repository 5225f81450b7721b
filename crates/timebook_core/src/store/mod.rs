//! In-memory entity stores and the membership relation.
//!
//! # Responsibility
//! - Own person/group collections and the person-group edge set.
//! - Allocate ids and enforce uniqueness and referential integrity.
//!
//! # Invariants
//! - Every mapping references a live person and a live group.
//! - Removing a person/group drops its mappings in the same call.
//! - A failed operation leaves every store exactly as it was.

pub mod allocator;
pub mod entity_list;
pub mod error;
pub mod group_store;
pub mod mapping_store;
pub mod person_store;
pub mod shared;
pub mod timebook;
