use std::path::Path;
use std::time::Duration;

use crate::application::ports::{ExtractionCause, ExtractionError};
use crate::domain::{Document, DocumentFormat};

pub(super) const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a blocking parser against the document's path off the async runtime,
/// bounded by [`EXTRACTION_TIMEOUT`].
pub(super) async fn run_blocking<T, F>(document: &Document, task: F) -> Result<T, ExtractionError>
where
    T: Send + 'static,
    F: FnOnce(&Path) -> Result<T, ExtractionCause> + Send + 'static,
{
    let path = document.path.clone();

    tokio::time::timeout(
        EXTRACTION_TIMEOUT,
        tokio::task::spawn_blocking(move || task(&path)),
    )
    .await
    .map_err(|_| ExtractionError::new(document, ExtractionCause::TimedOut))?
    .map_err(|e| ExtractionError::parse(document, format!("task join error: {e}")))?
    .map_err(|cause| ExtractionError::new(document, cause))
}

/// Drops a leading UTF-8 byte order mark.
pub(super) fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}

pub(super) fn ensure_format(
    document: &Document,
    expected: DocumentFormat,
) -> Result<(), ExtractionError> {
    if document.format != expected {
        return Err(ExtractionError::new(
            document,
            ExtractionCause::UnsupportedFormat,
        ));
    }
    Ok(())
}
