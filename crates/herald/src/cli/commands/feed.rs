//! Feed command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use herald_changelog::ChangelogParser;
use herald_core::config::load_config_or_default;
use herald_feed::FeedPublisher;

use crate::cli::output::{path_style, success, warning};
use crate::cli::Cli;

/// Generate syndication feeds
#[derive(Debug, Args)]
pub struct FeedCommand {
    /// Feed type to generate
    #[arg(long = "type", value_enum, default_value = "all")]
    pub feed_type: FeedType,

    /// Write to the configured output files (default: print to stdout)
    #[arg(short, long)]
    pub write: bool,

    /// Output directory (defaults to the configured directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Selectable feed types
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FeedType {
    /// RSS 2.0 only
    Rss,
    /// Atom only
    Atom,
    /// Both formats
    All,
}

impl FeedType {
    fn names(self) -> &'static [&'static str] {
        match self {
            Self::Rss => &["rss"],
            Self::Atom => &["atom"],
            Self::All => &["rss", "atom"],
        }
    }
}

impl FeedCommand {
    /// Execute the feed command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(feed_type = ?self.feed_type, write = self.write, "executing feed command");
        let cwd = std::env::current_dir()?;
        let (mut config, _) = load_config_or_default(&cwd);

        if let Some(output) = &self.output {
            config.feed.output_dir = output.to_string_lossy().to_string();
        }

        if !config.feed.enabled {
            if !cli.quiet {
                warning("Feed generation is disabled in the configuration.");
            }
            return Ok(());
        }

        let changelog_path = cwd.join(&config.changelog.file);
        let entries = ChangelogParser::new().load(&changelog_path);

        let publisher = FeedPublisher::new();

        if self.write {
            if self.feed_type == FeedType::All {
                let written = publisher.write_all(&entries, &config.site, &config.feed, &cwd)?;

                if !cli.quiet {
                    for path in &written {
                        success(&format!(
                            "Feed written to {}",
                            path_style().apply_to(path.display())
                        ));
                    }
                }
            } else {
                let out_dir = cwd.join(&config.feed.output_dir);
                std::fs::create_dir_all(&out_dir)?;

                for &name in self.feed_type.names() {
                    let document = publisher.render(name, &entries, &config.site)?;
                    let file_name = match name {
                        "rss" => &config.feed.rss_file,
                        _ => &config.feed.atom_file,
                    };
                    let path = out_dir.join(file_name);
                    std::fs::write(&path, &document)?;

                    if !cli.quiet {
                        success(&format!(
                            "Feed written to {}",
                            path_style().apply_to(path.display())
                        ));
                    }
                }
            }
        } else {
            for &name in self.feed_type.names() {
                let document = publisher.render(name, &entries, &config.site)?;
                println!("{}", document);
            }
        }

        Ok(())
    }
}
