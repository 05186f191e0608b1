use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, FileLoader};
use crate::application::services::MemoCache;
use crate::domain::{Document, DocumentFormat, ExtractedText};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FileFingerprint {
    path: PathBuf,
    format: DocumentFormat,
    len: u64,
    modified: Option<SystemTime>,
}

impl FileFingerprint {
    fn of(document: &Document) -> Option<Self> {
        let metadata = std::fs::metadata(&document.path).ok()?;
        Some(Self {
            path: document.path.clone(),
            format: document.format,
            len: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }
}

/// Reuses the extraction of a file that has not changed since it was last read.
///
/// Entries are keyed by path, format, size and modification time, so editing
/// the file forces a fresh extraction. Failures are never memoized.
pub struct MemoizedFileLoader {
    inner: Arc<dyn FileLoader>,
    memo: MemoCache<FileFingerprint, ExtractedText>,
}

impl MemoizedFileLoader {
    pub fn new(inner: Arc<dyn FileLoader>, capacity: usize) -> Self {
        Self {
            inner,
            memo: MemoCache::new(capacity),
        }
    }

    pub fn memoized_count(&self) -> usize {
        self.memo.len()
    }
}

#[async_trait]
impl FileLoader for MemoizedFileLoader {
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        let Some(fingerprint) = FileFingerprint::of(document) else {
            return self.inner.extract(document).await;
        };

        if let Some(extracted) = self.memo.get(&fingerprint) {
            tracing::debug!(filename = %document.filename(), "extraction reused from memo");
            return Ok(extracted);
        }

        let extracted = self.inner.extract(document).await?;
        self.memo.insert(fingerprint, extracted.clone());
        Ok(extracted)
    }
}
