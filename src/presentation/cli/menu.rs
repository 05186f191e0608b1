use std::io::{BufRead, Write};
use std::path::Path;

use crate::application::services::QaService;

use super::CliError;

const WELCOME: &str = "Welcome to the Smart QA System!\n Please choose an option: ";
const INVALID_OPTION: &str = "Invalid option. Please enter 1 or 2.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Completed,
    InvalidOption,
}

/// Two-option interactive menu: summarize a document, or answer a question
/// about some context. Any other choice prints a notice and ends the session.
pub async fn run_menu<R, W>(
    service: &QaService,
    input: &mut R,
    output: &mut W,
) -> Result<MenuOutcome, CliError>
where
    R: BufRead,
    W: Write,
{
    let choice = prompt(
        input,
        output,
        &format!("{WELCOME}\n1. Summarize Document\n2. Answer Question\nYour choice: "),
    )?;

    match choice.as_str() {
        "1" => {
            let path = prompt(input, output, "Enter the path to the document: ")?;
            let path = path.trim_matches(|c| c == '"' || c == '\'');
            let summary = service.summarize_file(Path::new(path), None).await?;
            writeln!(output, "Summary: {summary}")?;
        }
        "2" => {
            let context = prompt(input, output, "Enter the context: ")?;
            let question = prompt(input, output, "Enter your question: ")?;
            let answer = service.answer_question_cached(&context, &question).await?;
            writeln!(output, "Answer: {answer}")?;
        }
        _ => {
            writeln!(output, "{INVALID_OPTION}")?;
            return Ok(MenuOutcome::InvalidOption);
        }
    }

    Ok(MenuOutcome::Completed)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, CliError> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
