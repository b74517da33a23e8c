use thiserror::Error;

/// Result type for file-distribution operations.
pub type FiledistResult<T> = Result<T, FiledistError>;

/// Errors from retrieving, authenticating and unpacking distribution files.
///
/// Transport failures are fatal to a category; every other kind is fatal to
/// the file being processed.
#[derive(Debug, Error)]
pub enum FiledistError {
    /// The HTTP client could not be built.
    #[error("http client error: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed before a response arrived (DNS, connect, timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The ASCII armor could not be decoded.
    #[error("malformed armor: {0}")]
    Armor(String),

    /// A key block was armored as something other than a public key.
    #[error("expected a PGP PUBLIC KEY BLOCK, found {found:?}")]
    KeyBlockType { found: String },

    /// The public key block could not be imported or its self-signatures are invalid.
    #[error("keyring error: {0}")]
    Keyring(String),

    /// The message signature does not verify against the keyring.
    #[error("signature verification failed: {0}")]
    Signature(String),

    /// The authenticated payload is not a readable gzip stream.
    #[error("decompression failed: {0}")]
    Decompression(String),

    /// A listed file name does not carry a `_YYMMDD` date token.
    #[error("file name {name:?} has no valid date token: {reason}")]
    FileName { name: String, reason: String },

    /// A file URL could not be built from the category URL.
    #[error("invalid url {url:?}: {reason}")]
    Url { url: String, reason: String },
}
