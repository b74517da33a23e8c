//! File distribution: everything between the authority's web server and a
//! readable export document.
//!
//! - [`DistributionClient`]: key retrieval, listing discovery, file download
//! - [`PublicKeyring`]: key import and signature verification
//! - [`sort_by_embedded_date`]: chronological ordering of listed files
//! - [`open_plaintext`]: envelope verification plus gzip decoding

pub mod client;
pub mod error;
pub mod keyring;
pub mod listing;
pub mod pipeline;
pub mod sorter;

pub use client::{DistributionCategory, DistributionClient};
pub use error::{FiledistError, FiledistResult};
pub use keyring::{EnvelopeOpener, PUBLIC_KEY_BLOCK, PublicKeyring, armor_block_type};
pub use listing::{FileRef, extract_signed_refs, join_url};
pub use pipeline::{PlaintextStream, decompress, open_plaintext};
pub use sorter::{DatedFile, embedded_date, sort_by_embedded_date};
