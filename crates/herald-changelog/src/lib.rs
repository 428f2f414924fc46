//! Herald Changelog - Keep a Changelog parsing and filtering
//!
//! This crate reads a hand-authored changelog document and turns it into
//! typed version entries that the feed and CLI layers consume.

pub mod filter;
pub mod parser;
pub mod types;

pub use filter::ChangelogFilter;
pub use parser::ChangelogParser;
pub use types::{Category, ChangeKind, ChangeRecord, VersionEntry};
