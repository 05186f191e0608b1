use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{Document, DocumentFormat, ExtractedText};

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub struct ExtractionError {
    pub path: PathBuf,
    pub format: DocumentFormat,
    #[source]
    pub cause: ExtractionCause,
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionCause {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("file is not valid utf-8")]
    InvalidUtf8,
    #[error("parse failed: {0}")]
    Parse(String),
    #[error("no extractor registered for format")]
    UnsupportedFormat,
    #[error("extraction timed out")]
    TimedOut,
}

impl ExtractionError {
    pub fn new(document: &Document, cause: impl Into<ExtractionCause>) -> Self {
        Self {
            path: document.path.clone(),
            format: document.format,
            cause: cause.into(),
        }
    }

    pub fn parse(document: &Document, message: impl fmt::Display) -> Self {
        Self::new(document, ExtractionCause::Parse(message.to_string()))
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to extract {} document {}: {}",
            self.format,
            self.path.display(),
            self.cause
        )
    }
}
