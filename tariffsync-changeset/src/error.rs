use tariffsync_model::ModelError;
use thiserror::Error;

/// Result type for change-set parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while decoding an export document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The XML itself is malformed.
    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// An attribute could not be decoded.
    #[error("malformed attribute on {element}: {reason}")]
    Attribute { element: String, reason: String },

    /// A record attribute failed conversion.
    #[error("invalid {element} record: {source}")]
    Record {
        element: &'static str,
        #[source]
        source: ModelError,
    },

    /// The document ended while a record was still open.
    #[error("document ended inside {element}")]
    Truncated { element: &'static str },
}
