//! Core domain logic for TimeBook.
//! This crate is the single source of truth for the people/group store
//! invariants and the on-disk format.

pub mod config;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use config::{ConfigError, UserPrefs, PREFS_FILE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::descriptor::{GroupDescriptor, PersonDescriptor};
pub use model::group::Group;
pub use model::id::{EntityId, EntityRef, GroupId, PersonId};
pub use model::mapping::Mapping;
pub use model::person::Person;
pub use model::role::Role;
pub use model::validation::ValidationError;
pub use storage::document::{export_snapshot, import_snapshot, TimeBookDocument};
pub use storage::error::{CorruptedDataError, StorageError, StorageResult};
pub use storage::json_storage::JsonTimeBookStorage;
pub use store::allocator::IdAllocator;
pub use store::entity_list::{EntityList, StoreEntity};
pub use store::error::{StoreError, StoreResult};
pub use store::group_store::GroupStore;
pub use store::mapping_store::MappingStore;
pub use store::person_store::PersonStore;
pub use store::shared::SharedTimeBook;
pub use store::timebook::TimeBook;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
