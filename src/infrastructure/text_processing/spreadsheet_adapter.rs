use std::path::Path;

use async_trait::async_trait;
use calamine::{Data, Reader, open_workbook_auto};

use crate::application::ports::{ExtractionCause, ExtractionError, FileLoader};
use crate::domain::{Document, DocumentFormat, ExtractedText, Table};

use super::blocking::{ensure_format, run_blocking};

const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

/// First worksheet of an xlsx/xls/ods workbook, first row as headers.
pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    fn parse_first_sheet(path: &Path) -> Result<Table, ExtractionCause> {
        std::fs::metadata(path)?;

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| ExtractionCause::Parse(format!("failed to open workbook: {e}")))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ExtractionCause::Parse("workbook has no worksheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ExtractionCause::Parse(format!("failed to read worksheet: {e}")))?;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());

        let headers = rows.next().unwrap_or_default();
        Ok(Table::new(headers, rows.collect()))
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => datetime.format(ISO_DATETIME).to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#ERR:{e:?}"),
    }
}

#[async_trait]
impl FileLoader for SpreadsheetAdapter {
    #[tracing::instrument(skip(self), fields(filename = %document.filename()))]
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        ensure_format(document, DocumentFormat::Spreadsheet)?;

        let table = run_blocking(document, Self::parse_first_sheet).await?;
        tracing::debug!(
            columns = table.headers.len(),
            rows = table.row_count(),
            "worksheet parsed"
        );

        Ok(ExtractedText::Table(table))
    }
}
