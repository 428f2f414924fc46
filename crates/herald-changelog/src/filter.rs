//! In-memory filtering of parsed version entries

use tracing::debug;

use crate::types::{Category, ChangeKind, VersionEntry};

/// Filter over a sequence of version entries.
///
/// Unset predicates match everything; set predicates combine as a
/// logical AND. Entries whose change list becomes empty are dropped.
#[derive(Debug, Clone, Default)]
pub struct ChangelogFilter {
    /// Keep only changes of this kind
    pub kind: Option<ChangeKind>,
    /// Keep only changes in this category
    pub category: Option<Category>,
    /// Keep only changes whose description contains this text
    pub search: Option<String>,
}

impl ChangelogFilter {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one change kind
    pub fn with_kind(mut self, kind: ChangeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restrict to one category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to descriptions containing the given text, case-insensitive
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Check whether any predicate is set
    pub fn is_noop(&self) -> bool {
        self.kind.is_none() && self.category.is_none() && self.search.is_none()
    }

    /// Apply the filter, producing a new sequence.
    ///
    /// Relative order of entries and of matching changes is preserved.
    pub fn apply(&self, entries: &[VersionEntry]) -> Vec<VersionEntry> {
        let search = self
            .search
            .as_deref()
            .map(str::to_lowercase)
            .filter(|s| !s.is_empty());

        let filtered: Vec<VersionEntry> = entries
            .iter()
            .filter_map(|entry| {
                let changes: Vec<_> = entry
                    .changes
                    .iter()
                    .filter(|change| {
                        self.kind.map_or(true, |k| change.kind == k)
                            && self.category.map_or(true, |c| change.category == c)
                            && search
                                .as_deref()
                                .map_or(true, |s| change.description.to_lowercase().contains(s))
                    })
                    .cloned()
                    .collect();

                if changes.is_empty() {
                    None
                } else {
                    Some(VersionEntry {
                        version: entry.version.clone(),
                        date: entry.date.clone(),
                        changes,
                    })
                }
            })
            .collect();

        debug!(
            input_entries = entries.len(),
            output_entries = filtered.len(),
            "filter applied"
        );
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ChangelogParser;

    const SAMPLE: &str = "\
## [1.2.0] - 2024-03-01
### Added
- **component**: New Badge variant
### Fixed
- **token**: Corrected spacing value

## [1.1.0] - 2024-02-01
### Changed
- **docs**: Rewrote theming guide
";

    fn sample_entries() -> Vec<VersionEntry> {
        ChangelogParser::new().parse(SAMPLE)
    }

    #[test]
    fn test_noop_filter_returns_everything() {
        let entries = sample_entries();
        let filtered = ChangelogFilter::new().apply(&entries);
        assert_eq!(filtered, entries);
    }

    #[test]
    fn test_filter_by_kind() {
        let entries = sample_entries();
        let filtered = ChangelogFilter::new()
            .with_kind(ChangeKind::Fixed)
            .apply(&entries);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].version, "1.2.0");
        assert_eq!(filtered[0].changes.len(), 1);
        assert_eq!(filtered[0].changes[0].category, Category::Token);
    }

    #[test]
    fn test_filter_by_category() {
        let entries = sample_entries();
        let filtered = ChangelogFilter::new()
            .with_category(Category::Docs)
            .apply(&entries);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].version, "1.1.0");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let entries = sample_entries();
        let filtered = ChangelogFilter::new().with_search("badge").apply(&entries);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].changes.len(), 1);
        assert_eq!(filtered[0].changes[0].kind, ChangeKind::Added);
    }

    #[test]
    fn test_predicates_combine_as_and() {
        let entries = sample_entries();
        let filtered = ChangelogFilter::new()
            .with_kind(ChangeKind::Added)
            .with_category(Category::Token)
            .apply(&entries);

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_no_match_yields_empty_not_panic() {
        let entries = sample_entries();
        let filtered = ChangelogFilter::new()
            .with_kind(ChangeKind::Removed)
            .apply(&entries);

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let entries = sample_entries();
        let filtered = ChangelogFilter::new().with_search("").apply(&entries);
        assert_eq!(filtered, entries);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let entries = sample_entries();
        let before = entries.clone();
        let _ = ChangelogFilter::new()
            .with_kind(ChangeKind::Added)
            .apply(&entries);
        assert_eq!(entries, before);
    }

    #[test]
    fn test_order_preserved_within_entry() {
        let doc = "\
## [1.0.0] - 2024-01-01
### Added
- **component**: First
- **component**: Second
- **token**: Skipped
- **component**: Third
";
        let entries = ChangelogParser::new().parse(doc);
        let filtered = ChangelogFilter::new()
            .with_category(Category::Component)
            .apply(&entries);

        let descriptions: Vec<_> = filtered[0]
            .changes
            .iter()
            .map(|c| c.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["First", "Second", "Third"]);
    }
}
