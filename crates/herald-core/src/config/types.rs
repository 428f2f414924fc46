//! Configuration types

use serde::{Deserialize, Serialize};

/// Main configuration for Herald
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema")]
    pub schema: Option<String>,

    /// Project name
    pub name: Option<String>,

    /// Site identity used in generated feeds
    pub site: SiteConfig,

    /// Changelog source configuration
    pub changelog: ChangelogConfig,

    /// Feed output configuration
    pub feed: FeedConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: None,
            name: None,
            site: SiteConfig::default(),
            changelog: ChangelogConfig::default(),
            feed: FeedConfig::default(),
        }
    }
}

/// Site identity configuration
///
/// Passed explicitly into feed formatting so the formatters stay pure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Feed and site title
    pub title: String,

    /// Feed description
    pub description: String,

    /// Canonical base URL of the site (no trailing slash)
    pub base_url: String,

    /// Author attributed in feed entries
    pub author: String,

    /// Content language code
    pub language: String,

    /// Path of the changelog page under the base URL
    pub changelog_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Design System".to_string(),
            description: "Release notes and updates for the design system".to_string(),
            base_url: "https://example.com".to_string(),
            author: "Design System Team".to_string(),
            language: "en-us".to_string(),
            changelog_path: "changelog".to_string(),
        }
    }
}

impl SiteConfig {
    /// Canonical URL of the changelog page
    pub fn changelog_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.changelog_path.trim_matches('/')
        )
    }

    /// Stable anchor URL for a single version
    pub fn version_url(&self, version: &str) -> String {
        format!("{}#v{}", self.changelog_url(), version)
    }
}

/// Changelog source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Path to the changelog document, relative to the project root
    pub file: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: "CHANGELOG.md".to_string(),
        }
    }
}

/// Feed output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Whether feed generation is enabled
    pub enabled: bool,

    /// Directory feed documents are written into
    pub output_dir: String,

    /// File name for the RSS 2.0 document
    pub rss_file: String,

    /// File name for the Atom document
    pub atom_file: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: "public".to_string(),
            rss_file: "rss.xml".to_string(),
            atom_file: "atom.xml".to_string(),
        }
    }
}
