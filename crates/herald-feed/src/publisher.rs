//! Feed publishing
//!
//! Composes the formatter registry with the site and feed configuration
//! to render feed documents and write them to disk.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use herald_changelog::VersionEntry;
use herald_core::config::{FeedConfig, SiteConfig};
use herald_core::error::{FeedError, Result};

use crate::registry::FormatterRegistry;

/// Renders and writes configured feed documents
pub struct FeedPublisher {
    registry: FormatterRegistry,
}

impl FeedPublisher {
    /// Create a publisher with the built-in formatters
    pub fn new() -> Self {
        Self {
            registry: FormatterRegistry::new(),
        }
    }

    /// Use a custom registry
    pub fn with_registry(mut self, registry: FormatterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Render a single feed format to a string
    pub fn render(
        &self,
        format: &str,
        entries: &[VersionEntry],
        site: &SiteConfig,
    ) -> Result<String> {
        let formatter = self
            .registry
            .get(format)
            .ok_or_else(|| FeedError::UnknownFormat(format.to_string()))?;
        Ok(formatter.format(entries, site))
    }

    /// Write all configured feeds under the given root directory.
    ///
    /// Returns the paths written, in rss-then-atom order.
    #[instrument(skip(self, entries, site, feed), fields(entry_count = entries.len()))]
    pub fn write_all(
        &self,
        entries: &[VersionEntry],
        site: &SiteConfig,
        feed: &FeedConfig,
        root: &Path,
    ) -> Result<Vec<PathBuf>> {
        let out_dir = root.join(&feed.output_dir);
        std::fs::create_dir_all(&out_dir).map_err(FeedError::Io)?;

        let mut written = Vec::new();
        for (format, file_name) in [("rss", &feed.rss_file), ("atom", &feed.atom_file)] {
            let document = self.render(format, entries, site)?;
            let path = out_dir.join(file_name);
            std::fs::write(&path, &document).map_err(|e| FeedError::WriteFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            debug!(path = %path.display(), bytes = document.len(), "feed written");
            written.push(path);
        }

        info!(count = written.len(), "feeds published");
        Ok(written)
    }
}

impl Default for FeedPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_changelog::ChangelogParser;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
## [1.2.0] - 2024-03-01
### Added
- **component**: New Badge variant
";

    #[test]
    fn test_render_known_formats() {
        let publisher = FeedPublisher::new();
        let entries = ChangelogParser::new().parse(SAMPLE);
        let site = SiteConfig::default();

        assert!(publisher.render("rss", &entries, &site).is_ok());
        assert!(publisher.render("atom", &entries, &site).is_ok());
    }

    #[test]
    fn test_render_unknown_format_fails() {
        let publisher = FeedPublisher::new();
        let site = SiteConfig::default();

        assert!(publisher.render("opml", &[], &site).is_err());
    }

    #[test]
    fn test_write_all() {
        let temp = TempDir::new().unwrap();
        let publisher = FeedPublisher::new();
        let entries = ChangelogParser::new().parse(SAMPLE);
        let site = SiteConfig::default();
        let feed = FeedConfig::default();

        let written = publisher
            .write_all(&entries, &site, &feed, temp.path())
            .unwrap();

        assert_eq!(written.len(), 2);
        assert!(temp.path().join("public/rss.xml").exists());
        assert!(temp.path().join("public/atom.xml").exists());

        let rss = std::fs::read_to_string(&written[0]).unwrap();
        assert!(rss.contains("<rss version=\"2.0\">"));
    }

    #[test]
    fn test_write_all_with_no_entries() {
        let temp = TempDir::new().unwrap();
        let publisher = FeedPublisher::new();
        let site = SiteConfig::default();
        let feed = FeedConfig::default();

        let written = publisher.write_all(&[], &site, &feed, temp.path()).unwrap();
        assert_eq!(written.len(), 2);
    }
}
