mod answer_cache;
mod file_loader;
mod llm_client;

pub use answer_cache::AnswerCache;
pub use file_loader::{ExtractionCause, ExtractionError, FileLoader};
pub use llm_client::{LlmClient, LlmClientError};
