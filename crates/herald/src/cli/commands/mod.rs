//! CLI commands

mod completions;
mod feed;
mod init;
mod show;
mod validate;

pub use completions::CompletionsCommand;
pub use feed::FeedCommand;
pub use init::InitCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
