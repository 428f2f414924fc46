//! Herald Feed - syndication feed generation
//!
//! This crate renders parsed changelog entries into RSS 2.0 and Atom 1.0
//! documents. Formatters are pure: site identity is passed in explicitly
//! and output is a string the caller prints or writes.

pub mod atom;
pub mod html;
pub mod publisher;
pub mod registry;
pub mod rss;

pub use atom::AtomFormatter;
pub use publisher::FeedPublisher;
pub use registry::FormatterRegistry;
pub use rss::RssFormatter;

use herald_changelog::VersionEntry;
use herald_core::config::SiteConfig;

/// Trait for feed formatters
pub trait FeedFormatter: Send + Sync {
    /// Render entries into a complete feed document
    fn format(&self, entries: &[VersionEntry], site: &SiteConfig) -> String;

    /// Short name of the format ("rss", "atom")
    fn name(&self) -> &'static str;

    /// MIME type of the produced document
    fn mime_type(&self) -> &'static str;
}
