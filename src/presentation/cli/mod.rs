mod args;
mod commands;
mod menu;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use menu::{MenuOutcome, run_menu};

use crate::application::services::{QaError, SummarizationError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("terminal io: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Summarization(#[from] SummarizationError),
    #[error(transparent)]
    Qa(#[from] QaError),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}
