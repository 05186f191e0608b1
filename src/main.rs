use std::io;
use std::process::ExitCode;

use clap::Parser;

use smart_qa::infrastructure::observability::{TracingConfig, init_tracing};
use smart_qa::presentation::{
    AppState, Cli, Environment, MenuOutcome, ScaffoldConfig, Settings, run_command, run_menu,
};

const INVALID_OPTION_EXIT: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let mut settings = Settings::load(environment)?;

    if let Some(path) = cli.cache_file {
        settings.cache.path = path;
    }
    if cli.no_cache {
        settings.cache.enabled = false;
    }

    init_tracing(TracingConfig::from_settings(
        environment.as_str(),
        &settings.logging,
    ));
    tracing::debug!(%environment, model = %settings.llm.model, "settings loaded");

    let state = AppState::build(&settings, &ScaffoldConfig::from_env());
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(command) => {
            run_command(&state.qa_service, command, &mut stdout).await?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let mut stdin = io::stdin().lock();
            match run_menu(&state.qa_service, &mut stdin, &mut stdout).await? {
                MenuOutcome::Completed => Ok(ExitCode::SUCCESS),
                MenuOutcome::InvalidOption => Ok(ExitCode::from(INVALID_OPTION_EXIT)),
            }
        }
    }
}
