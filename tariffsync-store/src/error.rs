use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the SQLite store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("failed to open store at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Schema bootstrap failed.
    #[error("failed to initialize schema: {0}")]
    Schema(#[source] rusqlite::Error),

    /// A mutation statement failed; the enclosing batch was rolled back.
    #[error("statement on {table} failed: {source}")]
    Statement {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// A mutation's values do not line up with its table's columns.
    #[error("{table} expects {expected} values, got {actual}")]
    Arity {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The table is not part of the catalog.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// A stored value could not be read back.
    #[error("corrupt value in {table}.{column}: {reason}")]
    Corrupt {
        table: &'static str,
        column: &'static str,
        reason: String,
    },

    /// Any other SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A previous holder of the connection panicked.
    #[error("store connection poisoned")]
    Poisoned,
}
