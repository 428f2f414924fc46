//! HTML rendering of a version entry's change list

use quick_xml::escape::escape;

use herald_changelog::{ChangeKind, VersionEntry};

/// Render one entry's changes as an HTML fragment.
///
/// Changes are grouped by kind in priority order (breaking changes
/// first), each group a heading followed by a bulleted list. Kinds with
/// no changes produce no output.
pub fn render_entry_html(entry: &VersionEntry) -> String {
    let mut html = String::new();

    for kind in ChangeKind::PRIORITY_ORDER {
        let changes: Vec<_> = entry.changes_of_kind(kind).collect();
        if changes.is_empty() {
            continue;
        }

        html.push_str(&format!("<h3>{}</h3>\n<ul>\n", kind.heading()));
        for change in changes {
            html.push_str(&format!(
                "<li><strong>{}</strong>: {}</li>\n",
                change.category.label(),
                escape(change.description.as_str())
            ));
        }
        html.push_str("</ul>\n");
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_changelog::{Category, ChangeRecord};

    fn record(kind: ChangeKind, category: Category, description: &str) -> ChangeRecord {
        ChangeRecord {
            kind,
            category,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_groups_follow_priority_order() {
        let mut entry = VersionEntry::new("2.0.0", "2024-04-01");
        entry.changes.push(record(
            ChangeKind::Fixed,
            Category::Token,
            "Corrected spacing value",
        ));
        entry.changes.push(record(
            ChangeKind::Breaking,
            Category::Component,
            "Removed old Button API",
        ));

        let html = render_entry_html(&entry);

        let breaking = html.find("Breaking Changes").unwrap();
        let fixed = html.find("<h3>Fixed</h3>").unwrap();
        assert!(breaking < fixed);
    }

    #[test]
    fn test_renders_category_and_description() {
        let mut entry = VersionEntry::new("1.2.0", "2024-03-01");
        entry.changes.push(record(
            ChangeKind::Added,
            Category::Component,
            "New Badge variant",
        ));

        let html = render_entry_html(&entry);
        assert!(html.contains("<li><strong>component</strong>: New Badge variant</li>"));
    }

    #[test]
    fn test_description_is_escaped() {
        let mut entry = VersionEntry::new("1.0.0", "2024-01-01");
        entry.changes.push(record(
            ChangeKind::Changed,
            Category::Docs,
            "Use <Stack> & <Grid>",
        ));

        let html = render_entry_html(&entry);
        assert!(html.contains("Use &lt;Stack&gt; &amp; &lt;Grid&gt;"));
        assert!(!html.contains("<Stack>"));
    }

    #[test]
    fn test_empty_entry_renders_nothing() {
        let entry = VersionEntry::new("1.0.0", "2024-01-01");
        assert!(render_entry_html(&entry).is_empty());
    }
}
