use std::io::Write;

use crate::application::services::QaService;

use super::{CliError, Command};

pub async fn run_command<W: Write>(
    service: &QaService,
    command: Command,
    output: &mut W,
) -> Result<(), CliError> {
    match command {
        Command::Summarize { path, format } => {
            let summary = service.summarize_file(&path, format.as_deref()).await?;
            writeln!(output, "{summary}")?;
        }
        Command::Ask {
            context,
            question,
            bypass_cache,
        } => {
            let answer = if bypass_cache {
                service.answer_question(&context, &question).await?
            } else {
                service.answer_question_cached(&context, &question).await?
            };
            writeln!(output, "{answer}")?;
        }
        Command::Entities { path, format } => {
            let entities = service
                .extract_entities_from_file(&path, format.as_deref())
                .await?;
            serde_json::to_writer_pretty(&mut *output, &entities)?;
            writeln!(output)?;
        }
    }

    Ok(())
}
