//! Parsed change-set documents.

use crate::error::{ModelError, ModelResult};
use crate::kind::EntityKind;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How one record is reconciled with the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeDirective {
    Upsert,
    Delete,
}

impl ChangeDirective {
    /// Parses the wire form (`U` or `D`).
    pub fn from_wire(raw: &str) -> ModelResult<Self> {
        match raw.trim() {
            "U" => Ok(ChangeDirective::Upsert),
            "D" => Ok(ChangeDirective::Delete),
            other => Err(ModelError::UnknownDirective {
                directive: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ChangeDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeDirective::Upsert => f.write_str("U"),
            ChangeDirective::Delete => f.write_str("D"),
        }
    }
}

/// One item of an entity collection.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    pub kind: &'static EntityKind,
    /// Raw `changeType` attribute, if the record carried one.
    pub change_type: Option<String>,
    /// Values aligned with `kind.key`.
    pub key: Vec<Value>,
    /// Values aligned with `kind.attributes`.
    pub values: Vec<Value>,
    /// Child collections, in the order their kinds are declared.
    pub children: Vec<EntityCollection>,
}

impl EntityRecord {
    /// Resolves this record's directive.
    ///
    /// A record without `changeType` takes `inherited`; root records have
    /// nothing to inherit.
    pub fn directive(&self, inherited: Option<ChangeDirective>) -> ModelResult<ChangeDirective> {
        match self.change_type.as_deref() {
            Some(raw) => ChangeDirective::from_wire(raw),
            None => inherited.ok_or(ModelError::MissingDirective),
        }
    }

    /// Full natural key as stored, prefixed by the parent's key when the
    /// parent columns are part of it.
    pub fn natural_key(&self, parent_key: &[Value]) -> Vec<Value> {
        let keyed = self.kind.parent.is_some_and(|link| link.part_of_key);
        let prefix = if keyed { parent_key } else { &[] };
        prefix.iter().chain(self.key.iter()).cloned().collect()
    }

    /// Row values for an upsert, aligned with `kind.columns()`.
    pub fn row(&self, parent_key: &[Value]) -> Vec<Value> {
        let parent = if self.kind.parent.is_some() { parent_key } else { &[] };
        parent
            .iter()
            .chain(self.key.iter())
            .chain(self.values.iter())
            .cloned()
            .collect()
    }

    /// Appends a child record to the collection of its kind, keeping
    /// collections in declaration order.
    pub fn push_child(&mut self, child: EntityRecord) {
        if let Some(collection) = self.children.iter_mut().find(|c| c.kind == child.kind) {
            collection.records.push(child);
            return;
        }
        let rank = |kind: &EntityKind| {
            self.kind
                .children
                .iter()
                .position(|k| *k == kind)
                .unwrap_or(usize::MAX)
        };
        let at = self
            .children
            .iter()
            .position(|c| rank(c.kind) > rank(child.kind))
            .unwrap_or(self.children.len());
        self.children.insert(
            at,
            EntityCollection {
                kind: child.kind,
                records: vec![child],
            },
        );
    }

    /// Human-readable key, used in log and error context.
    pub fn describe_key(&self) -> String {
        self.kind
            .key
            .iter()
            .zip(&self.key)
            .map(|(field, value)| format!("{}={value}", field.attribute))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// An ordered run of records of one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection {
    pub kind: &'static EntityKind,
    pub records: Vec<EntityRecord>,
}

impl EntityCollection {
    pub fn new(kind: &'static EntityKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Metadata from the export header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportHeader {
    pub id: Option<String>,
    pub export_type: Option<String>,
    pub query_date_start: Option<String>,
}

/// One fully parsed export file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    pub header: ExportHeader,
    /// Non-empty collections in catalog apply order.
    pub collections: Vec<EntityCollection>,
}

impl ChangeSet {
    /// Total number of root records.
    pub fn record_count(&self) -> usize {
        self.collections.iter().map(EntityCollection::len).sum()
    }
}
