//! JSON persistence for a whole `TimeBook`.
//!
//! # Responsibility
//! - Map the stores to and from one typed JSON document.
//! - Validate persisted data eagerly and reject it as a whole when invalid.
//!
//! # Invariants
//! - Import is all-or-nothing: no store is built unless the full document
//!   passes every check.
//! - A missing file, an I/O failure and corrupted content are distinct errors.

pub mod document;
pub mod error;
pub mod json_storage;
