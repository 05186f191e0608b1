use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::presentation::config::CacheSettings;

use super::composite_file_loader::CompositeFileLoader;
use super::memoized_file_loader::MemoizedFileLoader;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Default adapters for every format, memoized unless the configured
    /// capacity is zero.
    pub fn create(settings: &CacheSettings) -> Arc<dyn FileLoader> {
        let composite: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::with_default_adapters());

        if settings.memo_capacity == 0 {
            tracing::info!("extraction memoization disabled");
            return composite;
        }

        tracing::info!(capacity = settings.memo_capacity, "extraction memoization enabled");
        Arc::new(MemoizedFileLoader::new(composite, settings.memo_capacity))
    }
}
