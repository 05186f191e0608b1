mod entity_parser;
mod memo_cache;
mod prompts;
mod qa_service;

pub use entity_parser::parse_entities;
pub use memo_cache::{DEFAULT_MEMO_CAPACITY, MemoCache};
pub use qa_service::{
    DEFAULT_REQUEST_TIMEOUT, QaError, QaService, QaServiceOptions, SummarizationError,
};
