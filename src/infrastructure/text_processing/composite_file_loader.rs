use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionCause, ExtractionError, FileLoader};
use crate::domain::{Document, DocumentFormat, ExtractedText};

use super::{
    CsvAdapter, HtmlAdapter, JsonAdapter, PdfAdapter, PlainTextAdapter, SpreadsheetAdapter,
};

/// Dispatches each document to the adapter registered for its format.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// One adapter per known format.
    pub fn with_default_adapters() -> Self {
        let adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)> = vec![
            (DocumentFormat::Csv, Arc::new(CsvAdapter) as Arc<dyn FileLoader>),
            (DocumentFormat::Spreadsheet, Arc::new(SpreadsheetAdapter) as Arc<dyn FileLoader>),
            (DocumentFormat::Json, Arc::new(JsonAdapter) as Arc<dyn FileLoader>),
            (DocumentFormat::Html, Arc::new(HtmlAdapter) as Arc<dyn FileLoader>),
            (DocumentFormat::Pdf, Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>),
            (DocumentFormat::PlainText, Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>),
        ];
        Self::new(adapters)
    }

    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.adapters.contains_key(&format)
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        let adapter = self
            .adapters
            .get(&document.format)
            .ok_or_else(|| ExtractionError::new(document, ExtractionCause::UnsupportedFormat))?;

        adapter.extract(document).await
    }
}
