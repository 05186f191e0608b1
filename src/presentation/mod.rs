pub mod cli;
pub mod config;
pub mod state;

pub use cli::{Cli, CliError, Command, MenuOutcome, run_command, run_menu};
pub use config::{Environment, ScaffoldConfig, Settings};
pub use state::AppState;
