//! DDL and statement text derived from the entity catalog.

use std::collections::HashMap;
use tariffsync_model::{CATALOG, EntityKind, FieldType, KindVisit};

/// Everything the store needs to read and write one entity table.
#[derive(Debug)]
pub(crate) struct TableSpec {
    pub kind: &'static EntityKind,
    pub columns: Vec<&'static str>,
    pub column_types: Vec<FieldType>,
    pub conflict_len: usize,
    pub create_sql: String,
    pub upsert_sql: String,
    pub delete_sql: String,
    pub select_sql: String,
}

fn quoted(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn key_predicate(columns: &[&str]) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("\"{c}\" = ?{}", i + 1))
        .collect::<Vec<_>>()
        .join(" AND ")
}

impl TableSpec {
    fn from_visit(visit: &KindVisit) -> Self {
        let kind = visit.kind;
        let table = kind.table;
        let columns = kind.columns();
        let column_types = visit.column_types();
        let conflict = kind.conflict_columns();
        let updates = kind.update_columns();
        let parent_columns = kind.parent.map(|link| link.columns).unwrap_or(&[]);

        let mut definitions: Vec<String> = columns
            .iter()
            .zip(&column_types)
            .map(|(column, ty)| {
                let required = conflict.contains(column) || parent_columns.contains(column);
                let not_null = if required { " NOT NULL" } else { "" };
                format!("\"{column}\" {}{not_null}", ty.sql_type())
            })
            .collect();
        definitions.push(format!("PRIMARY KEY ({})", quoted(&conflict)));
        if let (Some(link), Some(parent)) = (kind.parent, visit.parent) {
            definitions.push(format!(
                "FOREIGN KEY ({}) REFERENCES \"{}\" ({}) ON DELETE {}",
                quoted(link.columns),
                parent.table,
                quoted(&parent.conflict_columns()),
                link.on_delete.sql_action()
            ));
        }
        let create_sql = format!(
            "CREATE TABLE IF NOT EXISTS \"{table}\" (\n    {}\n);",
            definitions.join(",\n    ")
        );

        let placeholders = (1..=columns.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let on_conflict = if updates.is_empty() {
            "DO NOTHING".to_string()
        } else {
            let sets = updates
                .iter()
                .map(|c| format!("\"{c}\" = excluded.\"{c}\""))
                .collect::<Vec<_>>()
                .join(", ");
            format!("DO UPDATE SET {sets}")
        };
        let upsert_sql = format!(
            "INSERT INTO \"{table}\" ({}) VALUES ({placeholders}) ON CONFLICT ({}) {on_conflict}",
            quoted(&columns),
            quoted(&conflict)
        );
        let delete_sql = format!("DELETE FROM \"{table}\" WHERE {}", key_predicate(&conflict));
        let select_sql = format!(
            "SELECT {} FROM \"{table}\" WHERE {}",
            quoted(&columns),
            key_predicate(&conflict)
        );

        Self {
            kind,
            conflict_len: conflict.len(),
            columns,
            column_types,
            create_sql,
            upsert_sql,
            delete_sql,
            select_sql,
        }
    }
}

/// Specs for every table in the catalog, keyed by table name, plus the
/// creation order (parents before children).
pub(crate) fn catalog_tables() -> (HashMap<&'static str, TableSpec>, Vec<&'static str>) {
    let mut tables = HashMap::new();
    let mut order = Vec::new();
    for root in CATALOG {
        root.walk(&mut |visit| {
            order.push(visit.kind.table);
            tables.insert(visit.kind.table, TableSpec::from_visit(visit));
        });
    }
    (tables, order)
}

pub(crate) const REGISTRY_DDL: &str = "
CREATE TABLE IF NOT EXISTS consumed_file (
    category TEXT NOT NULL,
    file_name TEXT NOT NULL,
    file_date TEXT NOT NULL,
    applied_at TEXT NOT NULL,
    PRIMARY KEY (category, file_name)
);
CREATE INDEX IF NOT EXISTS idx_consumed_file_date ON consumed_file (category, file_date);
";

#[cfg(test)]
mod tests {
    use super::*;
    use tariffsync_model::catalog::{GOODS_NOMENCLATURE_DESCRIPTION, LOOKUP_TABLE_ITEM};

    #[test]
    fn keyed_child_upsert_conflicts_on_parent_and_key() {
        let (tables, _) = catalog_tables();
        let spec = &tables[GOODS_NOMENCLATURE_DESCRIPTION.table];
        assert_eq!(
            spec.upsert_sql,
            "INSERT INTO \"goods_nomenclature_description\" (\"parent_sid\", \"language_id\", \
             \"description\", \"national\") VALUES (?1, ?2, ?3, ?4) ON CONFLICT (\"parent_sid\", \
             \"language_id\") DO UPDATE SET \"description\" = excluded.\"description\", \
             \"national\" = excluded.\"national\""
        );
        assert!(spec.create_sql.contains(
            "FOREIGN KEY (\"parent_sid\") REFERENCES \"goods_nomenclature_description_period\" (\"sid\") ON DELETE CASCADE"
        ));
    }

    #[test]
    fn key_only_kind_does_nothing_on_conflict() {
        let (tables, _) = catalog_tables();
        assert!(tables[LOOKUP_TABLE_ITEM.table].upsert_sql.ends_with("DO NOTHING"));
    }

    #[test]
    fn creation_order_puts_parents_first() {
        let (_, order) = catalog_tables();
        let at = |t| order.iter().position(|x| *x == t).unwrap();
        assert!(at("goods_nomenclature") < at("goods_nomenclature_description_period"));
        assert!(
            at("goods_nomenclature_description_period") < at("goods_nomenclature_description")
        );
    }
}
