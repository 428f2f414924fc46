//! Changelog types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The nature of a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// New functionality
    Added,
    /// Changes to existing functionality
    Changed,
    /// Bug fixes
    Fixed,
    /// Functionality slated for removal
    Deprecated,
    /// Removed functionality
    Removed,
    /// Backwards-incompatible changes
    Breaking,
}

impl ChangeKind {
    /// Rendering order for grouped output, most important first
    pub const PRIORITY_ORDER: [ChangeKind; 6] = [
        Self::Breaking,
        Self::Added,
        Self::Changed,
        Self::Fixed,
        Self::Deprecated,
        Self::Removed,
    ];

    /// Section heading used when rendering this kind
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Breaking => "Breaking Changes",
        }
    }
}

impl std::str::FromStr for ChangeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "added" => Ok(Self::Added),
            "changed" => Ok(Self::Changed),
            "fixed" => Ok(Self::Fixed),
            "deprecated" => Ok(Self::Deprecated),
            "removed" => Ok(Self::Removed),
            "breaking" | "breaking change" | "breaking changes" => Ok(Self::Breaking),
            _ => Err(()),
        }
    }
}

/// The area of the system affected by a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// UI components
    Component,
    /// Design tokens
    Token,
    /// Brand assets
    Brand,
    /// Documentation
    Docs,
}

impl Category {
    /// Map a bullet label to a category.
    ///
    /// Unrecognized labels fall back to `Component` rather than failing,
    /// matching the lenient handling of hand-authored documents.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "token" | "tokens" => Self::Token,
            "brand" => Self::Brand,
            "docs" | "documentation" => Self::Docs,
            _ => Self::Component,
        }
    }

    /// Display label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Token => "token",
            Self::Brand => "brand",
            Self::Docs => "docs",
        }
    }
}

/// A single change bullet, tagged with a kind and category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// The nature of the change
    pub kind: ChangeKind,
    /// The area affected
    pub category: Category,
    /// Free-text description
    pub description: String,
}

/// All changes associated with one released version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Version label, e.g. "1.2.0"
    pub version: String,
    /// Release date as captured from the document, not validated
    pub date: String,
    /// Changes in document order
    pub changes: Vec<ChangeRecord>,
}

impl VersionEntry {
    /// Create an entry with no changes
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            changes: Vec::new(),
        }
    }

    /// The release date parsed as a calendar date, if well-formed
    pub fn release_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Check if the entry has no changes
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Changes of one kind, in document order
    pub fn changes_of_kind(&self, kind: ChangeKind) -> impl Iterator<Item = &ChangeRecord> {
        self.changes.iter().filter(move |c| c.kind == kind)
    }
}
