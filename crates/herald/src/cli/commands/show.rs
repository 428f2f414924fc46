//! Show command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use herald_changelog::{Category, ChangeKind, ChangelogFilter, ChangelogParser};
use herald_core::config::load_config_or_default;

use crate::cli::output::{kind_style, version_style};
use crate::cli::{Cli, OutputFormat};

/// Show changelog entries, optionally filtered
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Filter by change kind (added, changed, fixed, deprecated, removed, breaking, all)
    #[arg(short, long, default_value = "all")]
    pub kind: String,

    /// Filter by category (component, token, brand, docs, all)
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Case-insensitive search over change descriptions
    #[arg(short, long)]
    pub search: Option<String>,

    /// Changelog file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl ShowCommand {
    /// Execute the show command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            kind = %self.kind,
            category = %self.category,
            search = ?self.search,
            "executing show command"
        );
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let path = self
            .file
            .clone()
            .unwrap_or_else(|| cwd.join(&config.changelog.file));

        let entries = ChangelogParser::new().load(&path);
        let filter = build_filter(&self.kind, &self.category, self.search.as_deref())?;
        let entries = filter.apply(&entries);

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            OutputFormat::Text => {
                if entries.is_empty() {
                    if !cli.quiet {
                        println!("{}", style("No changelog entries found.").yellow());
                    }
                    return Ok(());
                }

                for entry in &entries {
                    println!(
                        "{} {}",
                        version_style().apply_to(format!("v{}", entry.version)),
                        style(&entry.date).dim()
                    );

                    for kind in ChangeKind::PRIORITY_ORDER {
                        let changes: Vec<_> = entry.changes_of_kind(kind).collect();
                        if changes.is_empty() {
                            continue;
                        }

                        println!("  {}", kind_style(kind).apply_to(kind.heading()));
                        for change in changes {
                            println!(
                                "    - {} {}",
                                style(format!("[{}]", change.category.label())).dim(),
                                change.description
                            );
                        }
                    }
                    println!();
                }
            }
        }

        Ok(())
    }
}

/// Build a filter from the CLI's (kind-or-"all", category-or-"all", search) triple
fn build_filter(
    kind: &str,
    category: &str,
    search: Option<&str>,
) -> anyhow::Result<ChangelogFilter> {
    let mut filter = ChangelogFilter::new();

    if !kind.eq_ignore_ascii_case("all") {
        let parsed: ChangeKind = kind.parse().map_err(|_| {
            anyhow::anyhow!(
                "Unknown kind '{}'. Expected one of: added, changed, fixed, deprecated, removed, breaking, all",
                kind
            )
        })?;
        filter = filter.with_kind(parsed);
    }

    if !category.eq_ignore_ascii_case("all") {
        let parsed = match category.to_lowercase().as_str() {
            "component" => Category::Component,
            "token" => Category::Token,
            "brand" => Category::Brand,
            "docs" => Category::Docs,
            _ => anyhow::bail!(
                "Unknown category '{}'. Expected one of: component, token, brand, docs, all",
                category
            ),
        };
        filter = filter.with_category(parsed);
    }

    if let Some(search) = search {
        if !search.is_empty() {
            filter = filter.with_search(search);
        }
    }

    Ok(filter)
}
