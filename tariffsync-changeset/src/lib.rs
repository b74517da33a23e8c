//! Change-set parser.
//!
//! Turns a decompressed export document into a [`tariffsync_model::ChangeSet`]:
//! one collection per modelled root kind, each record carrying its raw change
//! directive, typed key and attribute values, and its child collections.

pub mod error;
pub mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::parse_change_set;
