use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{ExtractionCause, ExtractionError, FileLoader};
use crate::domain::{Document, DocumentFormat, ExtractedText, Table};

use super::blocking::{ensure_format, run_blocking, strip_bom};

/// Delimited text with a header row. `.tsv` files are split on tabs,
/// everything else on commas.
pub struct CsvAdapter;

impl CsvAdapter {
    fn delimiter_for(path: &Path) -> u8 {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
            _ => b',',
        }
    }

    fn parse_table(path: &Path) -> Result<Table, ExtractionCause> {
        let data = std::fs::read(path)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(Self::delimiter_for(path))
            .has_headers(true)
            .from_reader(strip_bom(&data));

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ExtractionCause::Parse(format!("failed to read header row: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();

        let rows = reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                    .map_err(|e| ExtractionCause::Parse(format!("failed to read row: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Table::new(headers, rows))
    }
}

#[async_trait]
impl FileLoader for CsvAdapter {
    #[tracing::instrument(skip(self), fields(filename = %document.filename()))]
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        ensure_format(document, DocumentFormat::Csv)?;

        let table = run_blocking(document, Self::parse_table).await?;
        tracing::debug!(
            columns = table.headers.len(),
            rows = table.row_count(),
            "delimited text parsed"
        );

        Ok(ExtractedText::Table(table))
    }
}
