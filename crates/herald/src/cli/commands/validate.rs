//! Validate command

use clap::Args;
use console::style;
use tracing::info;

use herald_changelog::ChangelogParser;
use herald_core::config::load_config_from_dir;

use crate::cli::{Cli, OutputFormat};

/// Validate configuration and changelog document
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Only validate configuration file
    #[arg(long)]
    pub config_only: bool,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            config_only = self.config_only,
            strict = self.strict,
            "executing validate command"
        );
        let cwd = std::env::current_dir()?;

        let mut errors: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        // Validate configuration
        let config_result = load_config_from_dir(&cwd);
        let (config, config_path) = match config_result {
            Ok((c, p)) => (Some(c), Some(p)),
            Err(e) => {
                errors.push(format!("Configuration: {}", e));
                (None, None)
            }
        };

        let mut entry_count = 0;
        let mut change_count = 0;

        if !self.config_only {
            if let Some(ref cfg) = config {
                let changelog_path = cwd.join(&cfg.changelog.file);

                if !changelog_path.exists() {
                    warnings.push(format!(
                        "Changelog file not found at {} (feeds will be empty)",
                        changelog_path.display()
                    ));
                } else {
                    let entries = ChangelogParser::new().load(&changelog_path);
                    entry_count = entries.len();
                    change_count = entries.iter().map(|e| e.changes.len()).sum();

                    if entries.is_empty() {
                        warnings.push("Changelog contains no version entries".to_string());
                    }

                    for entry in &entries {
                        if entry.release_date().is_none() {
                            warnings.push(format!(
                                "Version {} has a malformed date '{}' (feed timestamps will be invalid)",
                                entry.version, entry.date
                            ));
                        }
                        if entry.is_empty() {
                            warnings.push(format!(
                                "Version {} has no recognized changes",
                                entry.version
                            ));
                        }
                    }
                }
            }
        }

        // If strict, promote warnings to errors
        if self.strict {
            errors.append(&mut warnings);
        }

        // Output
        let passed = errors.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": passed,
                    "config_path": config_path.map(|p| p.to_string_lossy().to_string()),
                    "entries": entry_count,
                    "changes": change_count,
                    "errors": errors,
                    "warnings": warnings
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", style("Validation Results").bold());
                    println!();

                    if let Some(path) = config_path {
                        println!("Config: {}", style(path.display()).cyan());
                    }
                    if !self.config_only {
                        println!(
                            "Changelog: {} entries, {} changes",
                            entry_count, change_count
                        );
                    }
                    println!();

                    if !errors.is_empty() {
                        println!("{}", style("Errors:").red().bold());
                        for error in &errors {
                            println!("  {} {}", style("✗").red(), error);
                        }
                        println!();
                    }

                    if !warnings.is_empty() {
                        println!("{}", style("Warnings:").yellow().bold());
                        for warning in &warnings {
                            println!("  {} {}", style("!").yellow(), warning);
                        }
                        println!();
                    }

                    if passed {
                        if warnings.is_empty() {
                            println!("{}", style("✓ All checks passed").green().bold());
                        } else {
                            println!(
                                "{} with {} warning(s)",
                                style("✓ Validation passed").green().bold(),
                                warnings.len()
                            );
                        }
                    } else {
                        println!(
                            "{} with {} error(s)",
                            style("✗ Validation failed").red().bold(),
                            errors.len()
                        );
                    }
                }
            }
        }

        if !passed {
            std::process::exit(1);
        }

        Ok(())
    }
}
