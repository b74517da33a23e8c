//! Core types for tariff synchronization.
//!
//! - [`EntityKind`] descriptors and the static [`catalog`]
//! - [`EntityRecord`] / [`EntityCollection`] / [`ChangeSet`], the parsed form of one export file
//! - [`Mutation`], the unit of work handed to the store

pub mod catalog;
pub mod error;
pub mod kind;
pub mod mutation;
pub mod record;
pub mod value;

pub use catalog::{CATALOG, apply_rank, root_kind};
pub use error::{ModelError, ModelResult};
pub use kind::{DeletePolicy, EntityKind, KindVisit, ParentLink};
pub use mutation::Mutation;
pub use record::{ChangeDirective, ChangeSet, EntityCollection, EntityRecord, ExportHeader};
pub use value::{DATE_FORMAT, Field, FieldSource, FieldType, Value};
