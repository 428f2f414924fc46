//! RSS 2.0 feed formatter

use chrono::NaiveTime;
use quick_xml::escape::escape;
use tracing::{debug, instrument};

use herald_changelog::VersionEntry;
use herald_core::config::SiteConfig;

use crate::html::render_entry_html;
use crate::FeedFormatter;

/// RSS 2.0 feed formatter
#[derive(Debug, Default)]
pub struct RssFormatter;

impl RssFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self
    }
}

/// Format an entry's date as RFC 2822 (midnight UTC).
///
/// A date that does not parse passes through verbatim, producing an
/// invalid timestamp rather than dropping the item.
fn pub_date(entry: &VersionEntry) -> String {
    entry
        .release_date()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc().to_rfc2822())
        .unwrap_or_else(|| entry.date.clone())
}

impl FeedFormatter for RssFormatter {
    #[instrument(skip(self, entries, site), fields(entry_count = entries.len()))]
    fn format(&self, entries: &[VersionEntry], site: &SiteConfig) -> String {
        let mut out = String::new();
        let channel_link = site.changelog_url();

        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<rss version=\"2.0\">\n");
        out.push_str("<channel>\n");
        out.push_str(&format!(
            "  <title>{}</title>\n",
            escape(site.title.as_str())
        ));
        out.push_str(&format!(
            "  <link>{}</link>\n",
            escape(channel_link.as_str())
        ));
        out.push_str(&format!(
            "  <description>{}</description>\n",
            escape(site.description.as_str())
        ));
        out.push_str(&format!(
            "  <language>{}</language>\n",
            escape(site.language.as_str())
        ));
        out.push_str("  <generator>herald</generator>\n");

        if let Some(newest) = entries.first() {
            let built = pub_date(newest);
            out.push_str(&format!(
                "  <lastBuildDate>{}</lastBuildDate>\n",
                escape(built.as_str())
            ));
        }

        for entry in entries {
            let link = site.version_url(&entry.version);
            let date = pub_date(entry);
            let body = render_entry_html(entry);

            out.push_str("  <item>\n");
            out.push_str(&format!(
                "    <title>v{}</title>\n",
                escape(entry.version.as_str())
            ));
            out.push_str(&format!("    <link>{}</link>\n", escape(link.as_str())));
            out.push_str(&format!(
                "    <guid isPermaLink=\"true\">{}</guid>\n",
                escape(link.as_str())
            ));
            out.push_str(&format!(
                "    <pubDate>{}</pubDate>\n",
                escape(date.as_str())
            ));
            out.push_str(&format!(
                "    <description>{}</description>\n",
                escape(body.as_str())
            ));
            out.push_str("  </item>\n");
        }

        out.push_str("</channel>\n");
        out.push_str("</rss>\n");

        debug!(output_len = out.len(), "rss feed formatted");
        out
    }

    fn name(&self) -> &'static str {
        "rss"
    }

    fn mime_type(&self) -> &'static str {
        "application/rss+xml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_changelog::ChangelogParser;

    const SAMPLE: &str = "\
## [1.2.0] - 2024-03-01
### Added
- **component**: New Badge variant
### Fixed
- **token**: Corrected spacing value
";

    fn site() -> SiteConfig {
        SiteConfig {
            base_url: "https://design.example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_channel_metadata() {
        let entries = ChangelogParser::new().parse(SAMPLE);
        let output = RssFormatter::new().format(&entries, &site());

        assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(output.contains("<rss version=\"2.0\">"));
        assert!(output.contains("<title>Design System</title>"));
        assert!(output.contains("<link>https://design.example.com/changelog</link>"));
        assert!(output.contains("<generator>herald</generator>"));
    }

    #[test]
    fn test_one_item_per_entry() {
        let entries = ChangelogParser::new().parse(SAMPLE);
        let output = RssFormatter::new().format(&entries, &site());

        assert_eq!(output.matches("<item>").count(), 1);
        assert!(output.contains("<title>v1.2.0</title>"));
        assert!(output.contains("<guid isPermaLink=\"true\">https://design.example.com/changelog#v1.2.0</guid>"));
    }

    #[test]
    fn test_pub_date_is_rfc2822() {
        let entries = ChangelogParser::new().parse(SAMPLE);
        let output = RssFormatter::new().format(&entries, &site());

        assert!(output.contains("Mar 2024 00:00:00 +0000"));
    }

    #[test]
    fn test_malformed_date_passes_through() {
        let entries = ChangelogParser::new().parse("## [1.0.0] - not-a-date\n");
        let output = RssFormatter::new().format(&entries, &site());

        assert!(output.contains("<pubDate>not-a-date</pubDate>"));
    }

    #[test]
    fn test_item_body_is_escaped_html() {
        let entries = ChangelogParser::new().parse(SAMPLE);
        let output = RssFormatter::new().format(&entries, &site());

        assert!(output.contains("&lt;h3&gt;Added&lt;/h3&gt;"));
        assert!(output.contains("New Badge variant"));
    }

    #[test]
    fn test_empty_entries_still_well_formed() {
        let output = RssFormatter::new().format(&[], &site());

        assert!(output.contains("<channel>"));
        assert!(output.contains("</channel>"));
        assert!(!output.contains("<item>"));
        assert!(!output.contains("<lastBuildDate>"));
    }
}
