//! Keep a Changelog document parser
//!
//! Parses documents following the Keep a Changelog convention:
//! https://keepachangelog.com/
//!
//! Version headers `## [X.Y.Z] - YYYY-MM-DD` split the document into
//! blocks. Within a block, `###` headings select the active change kind
//! and `- **category**: description` bullets emit records. Parsing is
//! best-effort: lines that match nothing are skipped, an unrecognized
//! heading clears the active kind, and bullets without an active kind
//! are dropped.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument, warn};

use crate::types::{Category, ChangeKind, ChangeRecord, VersionEntry};

/// Regex for version header lines
static VERSION_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##\s*\[(?P<version>[^\]]+)\]\s*-\s*(?P<date>.+?)\s*$").expect("Invalid regex")
});

/// Regex for kind heading lines
static KIND_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###\s+(?P<heading>.+?)\s*$").expect("Invalid regex"));

/// Regex for change bullet lines
static BULLET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-\s+\*\*(?P<category>[^*]+)\*\*:\s*(?P<description>.+?)\s*$")
        .expect("Invalid regex")
});

/// Parser for Keep a Changelog documents
#[derive(Debug, Default)]
pub struct ChangelogParser;

impl ChangelogParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse document text into version entries, in document order
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn parse(&self, text: &str) -> Vec<VersionEntry> {
        let mut entries: Vec<VersionEntry> = Vec::new();
        let mut current_kind: Option<ChangeKind> = None;

        for line in text.lines() {
            if let Some(caps) = VERSION_HEADER_REGEX.captures(line) {
                entries.push(VersionEntry::new(&caps["version"], &caps["date"]));
                current_kind = None;
            } else if let Some(caps) = KIND_HEADER_REGEX.captures(line) {
                let heading = &caps["heading"];
                current_kind = heading.parse().ok();
                if current_kind.is_none() {
                    debug!(heading, "unrecognized kind heading, clearing active kind");
                }
            } else if let Some(caps) = BULLET_REGEX.captures(line) {
                match (entries.last_mut(), current_kind) {
                    (Some(entry), Some(kind)) => {
                        entry.changes.push(ChangeRecord {
                            kind,
                            category: Category::from_label(&caps["category"]),
                            description: caps["description"].to_string(),
                        });
                    }
                    _ => debug!(line, "dropping bullet without an active kind"),
                }
            }
        }

        debug!(entry_count = entries.len(), "changelog parsed");
        entries
    }

    /// Load and parse a changelog file.
    ///
    /// A missing or unreadable file yields an empty list rather than an
    /// error, so callers render an empty state instead of failing.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> Vec<VersionEntry> {
        match std::fs::read_to_string(path) {
            Ok(text) => self.parse(&text),
            Err(e) => {
                warn!(error = %e, "changelog file not readable, treating as empty");
                Vec::new()
            }
        }
    }
}
