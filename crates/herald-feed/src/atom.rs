//! Atom 1.0 feed formatter

use chrono::NaiveTime;
use quick_xml::escape::escape;
use tracing::{debug, instrument};

use herald_changelog::VersionEntry;
use herald_core::config::SiteConfig;

use crate::html::render_entry_html;
use crate::FeedFormatter;

/// Atom 1.0 feed formatter
#[derive(Debug, Default)]
pub struct AtomFormatter;

impl AtomFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self
    }
}

/// Format an entry's date as RFC 3339 (midnight UTC).
///
/// A date that does not parse passes through verbatim, producing an
/// invalid timestamp rather than dropping the entry.
fn updated(entry: &VersionEntry) -> String {
    entry
        .release_date()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc().to_rfc3339())
        .unwrap_or_else(|| entry.date.clone())
}

impl FeedFormatter for AtomFormatter {
    #[instrument(skip(self, entries, site), fields(entry_count = entries.len()))]
    fn format(&self, entries: &[VersionEntry], site: &SiteConfig) -> String {
        let mut out = String::new();
        let feed_id = site.changelog_url();

        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<feed xmlns=\"http://www.w3.org/2005/Atom\">\n");
        out.push_str(&format!(
            "  <title>{}</title>\n",
            escape(site.title.as_str())
        ));
        out.push_str(&format!(
            "  <subtitle>{}</subtitle>\n",
            escape(site.description.as_str())
        ));
        out.push_str(&format!(
            "  <link href=\"{}\"/>\n",
            escape(feed_id.as_str())
        ));
        out.push_str(&format!("  <id>{}</id>\n", escape(feed_id.as_str())));
        if let Some(newest) = entries.first() {
            let stamp = updated(newest);
            out.push_str(&format!(
                "  <updated>{}</updated>\n",
                escape(stamp.as_str())
            ));
        }
        out.push_str("  <author>\n");
        out.push_str(&format!(
            "    <name>{}</name>\n",
            escape(site.author.as_str())
        ));
        out.push_str("  </author>\n");
        out.push_str("  <generator>herald</generator>\n");

        for entry in entries {
            let link = site.version_url(&entry.version);
            let stamp = updated(entry);
            let body = render_entry_html(entry);

            out.push_str("  <entry>\n");
            out.push_str(&format!(
                "    <title>v{}</title>\n",
                escape(entry.version.as_str())
            ));
            out.push_str(&format!(
                "    <link href=\"{}\"/>\n",
                escape(link.as_str())
            ));
            out.push_str(&format!("    <id>{}</id>\n", escape(link.as_str())));
            out.push_str(&format!(
                "    <updated>{}</updated>\n",
                escape(stamp.as_str())
            ));
            out.push_str(&format!(
                "    <content type=\"html\">{}</content>\n",
                escape(body.as_str())
            ));
            out.push_str("  </entry>\n");
        }

        out.push_str("</feed>\n");

        debug!(output_len = out.len(), "atom feed formatted");
        out
    }

    fn name(&self) -> &'static str {
        "atom"
    }

    fn mime_type(&self) -> &'static str {
        "application/atom+xml"
    }
}
