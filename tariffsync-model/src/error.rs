//! Error types for the model layer.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while interpreting wire values against the catalog.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// A record carried a change directive other than `U` or `D`.
    #[error("unknown change directive {directive:?}")]
    UnknownDirective { directive: String },

    /// A root record carried no change directive at all.
    #[error("missing change directive")]
    MissingDirective,

    /// An attribute value could not be converted to its declared type.
    #[error("invalid {expected} value {raw:?} for attribute {attribute}")]
    InvalidValue {
        attribute: &'static str,
        expected: &'static str,
        raw: String,
    },

    /// A natural-key attribute was absent or empty.
    #[error("missing key attribute {attribute} on {element}")]
    MissingKey {
        element: &'static str,
        attribute: &'static str,
    },
}
