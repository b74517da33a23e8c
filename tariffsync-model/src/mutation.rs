//! Store mutations produced by the synchronization engine.

use crate::kind::EntityKind;
use crate::value::Value;

/// One idempotent statement against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Insert the row, or overwrite every non-key column if the key exists.
    /// `row` is aligned with `kind.columns()`.
    Upsert {
        kind: &'static EntityKind,
        row: Vec<Value>,
    },
    /// Remove the row whose key equals `key`, aligned with `kind.conflict_columns()`.
    Delete {
        kind: &'static EntityKind,
        key: Vec<Value>,
    },
}

impl Mutation {
    pub fn kind(&self) -> &'static EntityKind {
        match self {
            Mutation::Upsert { kind, .. } | Mutation::Delete { kind, .. } => kind,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Mutation::Delete { .. })
    }
}
