//! Herald Core - Core library for changelog publishing
//!
//! This crate provides the configuration system and error types shared by
//! the Herald parsing and feed-generation crates.

pub mod config;
pub mod error;

pub use config::{Config, SiteConfig};
pub use error::{HeraldError, Result};
