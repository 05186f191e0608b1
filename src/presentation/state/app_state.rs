use std::sync::Arc;

use crate::application::ports::AnswerCache;
use crate::application::services::{QaService, QaServiceOptions};
use crate::infrastructure::cache::{InMemoryAnswerCache, JsonFileCache};
use crate::infrastructure::llm::LlmClientFactory;
use crate::infrastructure::text_processing::ExtractorFactory;
use crate::presentation::config::{ScaffoldConfig, Settings};

/// Wired service graph for one process.
#[derive(Clone)]
pub struct AppState {
    pub qa_service: Arc<QaService>,
}

impl AppState {
    pub fn build(settings: &Settings, scaffold_config: &ScaffoldConfig) -> Self {
        let answer_cache: Arc<dyn AnswerCache> = if settings.cache.enabled {
            Arc::new(JsonFileCache::open(settings.cache.path.clone()))
        } else {
            tracing::info!("persistent answer cache disabled");
            Arc::new(InMemoryAnswerCache::new())
        };

        let file_loader = ExtractorFactory::create(&settings.cache);
        let llm_client = LlmClientFactory::create(&settings.llm, scaffold_config);

        let options = QaServiceOptions {
            request_timeout: settings.llm.request_timeout(),
            key_strategy: settings.cache.key_strategy,
        };

        let mut qa_service = QaService::new(file_loader, llm_client, answer_cache, options);
        if settings.cache.memoize_summaries && settings.cache.memo_capacity > 0 {
            qa_service = qa_service.with_summary_memo(settings.cache.memo_capacity);
        }

        Self {
            qa_service: Arc::new(qa_service),
        }
    }
}
