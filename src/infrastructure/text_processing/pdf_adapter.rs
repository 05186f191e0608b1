use std::path::Path;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractionCause, ExtractionError, FileLoader};
use crate::domain::{Document, DocumentFormat, ExtractedText};

use super::blocking::{ensure_format, run_blocking};
use super::text_sanitizer::normalize_extracted_text;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Text of every page in page order. A page without extractable text
    /// yields an empty string.
    fn extract_pages(path: &Path) -> Result<Vec<String>, ExtractionCause> {
        std::fs::metadata(path)?;

        let doc = PdfDocument::open(path)
            .map_err(|e| ExtractionCause::Parse(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| ExtractionCause::Parse(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).unwrap_or_default();
            pages.push(normalize_extracted_text(&text));
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self), fields(filename = %document.filename()))]
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        ensure_format(document, DocumentFormat::Pdf)?;

        let pages = run_blocking(document, Self::extract_pages).await?;

        let empty_pages = pages.iter().filter(|p| p.is_empty()).count();
        tracing::info!(
            page_count = pages.len(),
            empty_pages,
            "PDF text extraction complete"
        );

        Ok(ExtractedText::Text(pages.join("\n")))
    }
}
