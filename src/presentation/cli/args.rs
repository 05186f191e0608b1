use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Summarize documents and answer questions with a remote language model.
///
/// Run without a subcommand for the interactive menu.
#[derive(Debug, Parser)]
#[command(name = "smart-qa", version)]
pub struct Cli {
    /// Answer cache file, overriding the configured path
    #[arg(long, env = "SMART_QA_CACHE_FILE", global = true)]
    pub cache_file: Option<PathBuf>,

    /// Keep answers in memory only for this run
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a document
    Summarize {
        path: PathBuf,
        /// Format tag (csv, excel, json, html, pdf, ...); defaults to the file extension
        #[arg(long)]
        format: Option<String>,
    },
    /// Answer a question about the given context
    Ask {
        #[arg(long)]
        context: String,
        #[arg(long)]
        question: String,
        /// Always call the model, neither reading nor writing the answer cache
        #[arg(long)]
        bypass_cache: bool,
    },
    /// Extract people, organizations, locations, dates and figures as JSON
    Entities {
        path: PathBuf,
        #[arg(long)]
        format: Option<String>,
    },
}
