//! Output formatting utilities

use console::{style, Style};

use herald_changelog::ChangeKind;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Style for version labels
pub fn version_style() -> Style {
    Style::new().green().bold()
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// Style for a change kind heading
pub fn kind_style(kind: ChangeKind) -> Style {
    match kind {
        ChangeKind::Breaking => Style::new().red().bold(),
        ChangeKind::Added => Style::new().green(),
        ChangeKind::Changed => Style::new().blue(),
        ChangeKind::Fixed => Style::new().yellow(),
        ChangeKind::Deprecated => Style::new().magenta(),
        ChangeKind::Removed => Style::new().dim(),
    }
}
