//! Declarative entity-kind descriptors.
//!
//! Every table the synchronizer writes is described by one [`EntityKind`]:
//! its wire element, natural key, attribute-to-column mapping, the link to its
//! parent kind and its child kinds. The engine, the parser and the store all
//! work off these descriptors instead of per-kind code.

use crate::value::{Field, FieldType};

/// What happens to child rows when their parent row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Child rows are removed with the parent.
    Cascade,
    /// Deleting a parent that still has children fails.
    Restrict,
}

impl DeletePolicy {
    /// The `ON DELETE` clause of the child's foreign key.
    pub fn sql_action(self) -> &'static str {
        match self {
            DeletePolicy::Cascade => "CASCADE",
            DeletePolicy::Restrict => "RESTRICT",
        }
    }
}

/// How a child kind references its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    /// Foreign-key columns, positionally matching the parent's conflict columns.
    pub columns: &'static [&'static str],
    /// Whether the parent columns are part of this kind's natural key.
    pub part_of_key: bool,
    pub on_delete: DeletePolicy,
}

/// Schema descriptor for one entity kind.
#[derive(Debug)]
pub struct EntityKind {
    /// Table name in the store.
    pub table: &'static str,
    /// XML element name of one record.
    pub element: &'static str,
    /// Natural-key fields carried on the wire.
    pub key: &'static [Field],
    /// Non-key fields.
    pub attributes: &'static [Field],
    pub parent: Option<ParentLink>,
    pub children: &'static [&'static EntityKind],
}

impl PartialEq for EntityKind {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl Eq for EntityKind {}

/// One kind reached by [`EntityKind::walk`], with what it needs from its ancestors.
#[derive(Debug, Clone)]
pub struct KindVisit {
    pub kind: &'static EntityKind,
    pub parent: Option<&'static EntityKind>,
    /// Types of the parent's conflict columns, i.e. of this kind's parent columns.
    pub parent_types: Vec<FieldType>,
}

impl KindVisit {
    /// Types of this kind's conflict columns.
    pub fn conflict_types(&self) -> Vec<FieldType> {
        let keyed = self.kind.parent.is_some_and(|link| link.part_of_key);
        let parent = if keyed { self.parent_types.as_slice() } else { &[] };
        parent
            .iter()
            .copied()
            .chain(self.kind.key.iter().map(|f| f.ty))
            .collect()
    }

    /// Types of every upsert column, aligned with [`EntityKind::columns`].
    pub fn column_types(&self) -> Vec<FieldType> {
        self.parent_types
            .iter()
            .copied()
            .chain(self.kind.key.iter().map(|f| f.ty))
            .chain(self.kind.attributes.iter().map(|f| f.ty))
            .collect()
    }
}

impl EntityKind {
    /// Columns of the store's uniqueness constraint, in key-value order:
    /// keyed parent columns first, then the wire key.
    pub fn conflict_columns(&self) -> Vec<&'static str> {
        let parent: &[&str] = match self.parent {
            Some(link) if link.part_of_key => link.columns,
            _ => &[],
        };
        parent
            .iter()
            .copied()
            .chain(self.key.iter().map(|f| f.column))
            .collect()
    }

    /// Every column written by an upsert, in row-value order:
    /// parent columns, key fields, then attributes.
    pub fn columns(&self) -> Vec<&'static str> {
        self.parent
            .iter()
            .flat_map(|link| link.columns.iter().copied())
            .chain(self.key.iter().map(|f| f.column))
            .chain(self.attributes.iter().map(|f| f.column))
            .collect()
    }

    /// Columns overwritten when an upsert hits an existing key.
    pub fn update_columns(&self) -> Vec<&'static str> {
        let conflict = self.conflict_columns();
        self.columns()
            .into_iter()
            .filter(|c| !conflict.contains(c))
            .collect()
    }

    /// Looks up a direct child kind by its XML element name.
    pub fn child_for_element(&self, element: &str) -> Option<&'static EntityKind> {
        self.children.iter().copied().find(|k| k.element == element)
    }

    /// Visits this kind and every descendant, parents before children.
    pub fn walk(&'static self, visit: &mut dyn FnMut(&KindVisit)) {
        fn inner(node: KindVisit, visit: &mut dyn FnMut(&KindVisit)) {
            visit(&node);
            let parent_types = node.conflict_types();
            for child in node.kind.children {
                inner(
                    KindVisit {
                        kind: child,
                        parent: Some(node.kind),
                        parent_types: parent_types.clone(),
                    },
                    visit,
                );
            }
        }
        inner(
            KindVisit {
                kind: self,
                parent: None,
                parent_types: Vec::new(),
            },
            visit,
        );
    }
}
