//! The tariff store: entity tables plus the consumed-file registry.

use crate::error::{StoreError, StoreResult};
use crate::schema::{REGISTRY_DDL, TableSpec, catalog_tables};
use chrono::{NaiveDate, Utc};
use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tariffsync_model::{DATE_FORMAT, EntityKind, FieldType, Mutation, Value};
use tracing::{debug, info};

/// Row counts touched by one executed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub upserts: usize,
    pub deletes: usize,
}

/// One entry of the consumed-file registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumedFile {
    pub category: String,
    pub file_name: String,
    pub file_date: NaiveDate,
    pub applied_at: String,
}

/// SQLite-backed store for synchronized tariff entities.
///
/// Cloning is cheap; clones share one connection.
#[derive(Clone)]
pub struct TariffStore {
    conn: Arc<Mutex<Connection>>,
    tables: Arc<HashMap<&'static str, TableSpec>>,
}

impl TariffStore {
    /// Opens (or creates) a store at the given path and bootstraps its schema.
    pub fn open(path: &str) -> StoreResult<Self> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_string(),
            source,
        })?;
        info!(path, "opened tariff store");
        Self::with_connection(conn)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: ":memory:".to_string(),
            source,
        })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        let (tables, order) = catalog_tables();
        conn.set_prepared_statement_cache_capacity(tables.len() * 2);
        let mut ddl = String::from("PRAGMA foreign_keys = ON;\n");
        for table in &order {
            ddl.push_str(&tables[table].create_sql);
            ddl.push('\n');
        }
        ddl.push_str(REGISTRY_DDL);
        conn.execute_batch(&ddl).map_err(StoreError::Schema)?;
        debug!(tables = order.len(), "store schema ready");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            tables: Arc::new(tables),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    fn spec(&self, kind: &EntityKind) -> StoreResult<&TableSpec> {
        self.tables
            .get(kind.table)
            .ok_or_else(|| StoreError::UnknownTable(kind.table.to_string()))
    }

    // ── Entity mutations ─────────────────────────────────────────

    /// Executes `mutations` in order as one transaction.
    ///
    /// Either every mutation is applied or, on the first failure, none are.
    pub fn execute_batch(&self, mutations: &[Mutation]) -> StoreResult<BatchOutcome> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut outcome = BatchOutcome::default();

        for mutation in mutations {
            let spec = self.spec(mutation.kind())?;
            let table = spec.kind.table;
            let (sql, values, expected) = match mutation {
                Mutation::Upsert { row, .. } => (&spec.upsert_sql, row, spec.columns.len()),
                Mutation::Delete { key, .. } => (&spec.delete_sql, key, spec.conflict_len),
            };
            if values.len() != expected {
                return Err(StoreError::Arity {
                    table,
                    expected,
                    actual: values.len(),
                });
            }
            let mut stmt = tx
                .prepare_cached(sql)
                .map_err(|source| StoreError::Statement { table, source })?;
            stmt.execute(params_from_iter(values.iter().map(to_sql)))
                .map_err(|source| StoreError::Statement { table, source })?;
            match mutation {
                Mutation::Upsert { .. } => outcome.upserts += 1,
                Mutation::Delete { .. } => outcome.deletes += 1,
            }
        }

        tx.commit()?;
        Ok(outcome)
    }

    // ── Reads ────────────────────────────────────────────────────

    /// Loads one row by its full natural key, aligned with `kind.columns()`.
    pub fn fetch_row(&self, kind: &EntityKind, key: &[Value]) -> StoreResult<Option<Vec<Value>>> {
        let spec = self.spec(kind)?;
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(&spec.select_sql)?;
        let raw = stmt
            .query_row(params_from_iter(key.iter().map(to_sql)), |row| {
                (0..spec.columns.len())
                    .map(|i| row.get::<_, SqlValue>(i))
                    .collect::<Result<Vec<_>, _>>()
            })
            .optional()?;
        raw.map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, value)| from_sql(spec, i, value))
                .collect::<StoreResult<Vec<_>>>()
        })
        .transpose()
    }

    /// Number of rows in an entity table.
    pub fn count_rows(&self, kind: &EntityKind) -> StoreResult<usize> {
        let spec = self.spec(kind)?;
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM \"{}\"", spec.kind.table),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Number of child rows whose parent reference does not resolve.
    pub fn foreign_key_violations(&self) -> StoreResult<usize> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("PRAGMA foreign_key_check")?;
        let mut rows = stmt.query([])?;
        let mut count = 0;
        while rows.next()?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    // ── Consumed-file registry ───────────────────────────────────

    /// Records a fully applied file.
    pub fn record_consumed(
        &self,
        category: &str,
        file_name: &str,
        file_date: NaiveDate,
    ) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO consumed_file (category, file_name, file_date, applied_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (category, file_name) DO UPDATE SET
                 file_date = excluded.file_date,
                 applied_at = excluded.applied_at",
            params![
                category,
                file_name,
                file_date.format(DATE_FORMAT).to_string(),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Whether a file has already been applied.
    pub fn is_consumed(&self, category: &str, file_name: &str) -> StoreResult<bool> {
        let conn = self.lock()?;
        let hit = conn
            .query_row(
                "SELECT 1 FROM consumed_file WHERE category = ?1 AND file_name = ?2",
                params![category, file_name],
                |_| Ok(()),
            )
            .optional()?;
        Ok(hit.is_some())
    }

    /// Latest embedded date applied for a category.
    pub fn high_water_mark(&self, category: &str) -> StoreResult<Option<NaiveDate>> {
        let conn = self.lock()?;
        let raw: Option<String> = conn.query_row(
            "SELECT MAX(file_date) FROM consumed_file WHERE category = ?1",
            params![category],
            |row| row.get(0),
        )?;
        raw.map(|raw| parse_registry_date(&raw)).transpose()
    }

    /// Every applied file of a category, oldest first.
    pub fn consumed_files(&self, category: &str) -> StoreResult<Vec<ConsumedFile>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT category, file_name, file_date, applied_at FROM consumed_file
             WHERE category = ?1 ORDER BY file_date, file_name",
        )?;
        let rows = stmt
            .query_map(params![category], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(category, file_name, file_date, applied_at)| {
                Ok(ConsumedFile {
                    category,
                    file_name,
                    file_date: parse_registry_date(&file_date)?,
                    applied_at,
                })
            })
            .collect()
    }
}

fn parse_registry_date(raw: &str) -> StoreResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| StoreError::Corrupt {
        table: "consumed_file",
        column: "file_date",
        reason: e.to_string(),
    })
}

fn to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Integer(v) => SqlValue::Integer(*v),
        Value::Real(v) => SqlValue::Real(*v),
        Value::Text(v) => SqlValue::Text(v.clone()),
        Value::Bool(v) => SqlValue::Integer(i64::from(*v)),
        Value::Date(v) => SqlValue::Text(v.format(DATE_FORMAT).to_string()),
    }
}

fn from_sql(spec: &TableSpec, index: usize, value: SqlValue) -> StoreResult<Value> {
    let corrupt = |reason: String| StoreError::Corrupt {
        table: spec.kind.table,
        column: spec.columns[index],
        reason,
    };
    Ok(match (spec.column_types[index], value) {
        (_, SqlValue::Null) => Value::Null,
        (FieldType::Bool, SqlValue::Integer(v)) => Value::Bool(v != 0),
        (FieldType::Integer, SqlValue::Integer(v)) => Value::Integer(v),
        (FieldType::Real, SqlValue::Real(v)) => Value::Real(v),
        (FieldType::Real, SqlValue::Integer(v)) => Value::Real(v as f64),
        (FieldType::Text, SqlValue::Text(v)) => Value::Text(v),
        (FieldType::Date, SqlValue::Text(v)) => NaiveDate::parse_from_str(&v, DATE_FORMAT)
            .map(Value::Date)
            .map_err(|e| corrupt(e.to_string()))?,
        (ty, other) => return Err(corrupt(format!("{other:?} in {ty:?} column"))),
    })
}
