use async_trait::async_trait;

use crate::application::ports::{ExtractionError, FileLoader};
use crate::domain::{Document, DocumentFormat, ExtractedText};

use super::blocking::{ensure_format, strip_bom};

pub struct JsonAdapter;

#[async_trait]
impl FileLoader for JsonAdapter {
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        ensure_format(document, DocumentFormat::Json)?;

        let data = tokio::fs::read(&document.path)
            .await
            .map_err(|e| ExtractionError::new(document, e))?;

        let value: serde_json::Value = serde_json::from_slice(strip_bom(&data))
            .map_err(|e| ExtractionError::parse(document, e))?;

        Ok(ExtractedText::Record(value))
    }
}
