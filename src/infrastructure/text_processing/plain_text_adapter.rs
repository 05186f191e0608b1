use async_trait::async_trait;

use crate::application::ports::{ExtractionCause, ExtractionError, FileLoader};
use crate::domain::{Document, DocumentFormat, ExtractedText};

use super::blocking::ensure_format;

/// Reads the file verbatim. Used for every format without a dedicated parser.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        ensure_format(document, DocumentFormat::PlainText)?;

        let data = tokio::fs::read(&document.path)
            .await
            .map_err(|e| ExtractionError::new(document, e))?;

        String::from_utf8(data)
            .map(ExtractedText::Text)
            .map_err(|_| ExtractionError::new(document, ExtractionCause::InvalidUtf8))
    }
}
