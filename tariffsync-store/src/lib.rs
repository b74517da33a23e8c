//! SQLite persistence for synchronized tariff data.
//!
//! The schema is derived from the entity catalog: one table per kind, keyed by
//! its natural key, with children referencing their parent through a foreign
//! key whose `ON DELETE` action is the kind's declared delete policy.

pub mod error;
mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{BatchOutcome, ConsumedFile, TariffStore};
