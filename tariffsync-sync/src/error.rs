//! Error types for the synchronization layer.

use tariffsync_changeset::ParseError;
use tariffsync_filedist::FiledistError;
use tariffsync_model::ModelError;
use tariffsync_store::StoreError;
use thiserror::Error;

/// Result type for synchronization operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors raised while synchronizing distribution files into the store.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A record's change directive is missing or not one of `U`/`D`.
    #[error("schema error in {collection} ({key}): {source}")]
    Schema {
        collection: String,
        key: String,
        #[source]
        source: ModelError,
    },

    /// The export document could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A batch or registry statement failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Retrieval, authentication or decompression failed.
    #[error(transparent)]
    Filedist(#[from] FiledistError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A blocking task panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
