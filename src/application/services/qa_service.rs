use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::ports::{AnswerCache, ExtractionError, FileLoader, LlmClient, LlmClientError};
use crate::domain::{CacheKeyStrategy, Document, ExtractedEntities, fingerprint};
use crate::infrastructure::observability::sanitize_prompt;

use super::entity_parser::parse_entities;
use super::memo_cache::MemoCache;
use super::prompts::{entities_prompt, question_prompt, summarize_prompt};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const MAX_REPORTED_REPLY: usize = 200;

#[derive(Debug, Clone)]
pub struct QaServiceOptions {
    pub request_timeout: Duration,
    pub key_strategy: CacheKeyStrategy,
}

impl Default for QaServiceOptions {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            key_strategy: CacheKeyStrategy::default(),
        }
    }
}

/// Summarization and question answering over a remote model.
///
/// File inputs go through the injected [`FileLoader`]; cached question
/// answering consults the injected [`AnswerCache`] before the model is called.
pub struct QaService {
    file_loader: Arc<dyn FileLoader>,
    llm_client: Arc<dyn LlmClient>,
    answer_cache: Arc<dyn AnswerCache>,
    options: QaServiceOptions,
    summary_memo: Option<MemoCache<String, String>>,
}

impl QaService {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        llm_client: Arc<dyn LlmClient>,
        answer_cache: Arc<dyn AnswerCache>,
        options: QaServiceOptions,
    ) -> Self {
        Self {
            file_loader,
            llm_client,
            answer_cache,
            options,
            summary_memo: None,
        }
    }

    /// Reuses a summary when the exact same summarization prompt is sent again
    /// during this process. The remote model is then not called a second time.
    pub fn with_summary_memo(mut self, capacity: usize) -> Self {
        self.summary_memo = Some(MemoCache::new(capacity));
        self
    }

    /// Summarizes `input`, which is either a path to an existing file or the
    /// text itself.
    #[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), format_hint = ?format_hint))]
    pub async fn summarize(
        &self,
        input: &str,
        format_hint: Option<&str>,
    ) -> Result<String, SummarizationError> {
        let result: Result<String, QaError> = async {
            let text = self.resolve_input(input, format_hint).await?;
            self.summarize_text(&text).await
        }
        .await;

        result.map_err(SummarizationError::from)
    }

    /// Summarizes the file at `path`. A missing file is an extraction error
    /// rather than text to summarize.
    #[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), path = %path.display()))]
    pub async fn summarize_file(
        &self,
        path: &Path,
        format_hint: Option<&str>,
    ) -> Result<String, SummarizationError> {
        let result: Result<String, QaError> = async {
            let text = self.extract_file(path, format_hint).await?;
            self.summarize_text(&text).await
        }
        .await;

        result.map_err(SummarizationError::from)
    }

    #[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
    pub async fn answer_question(&self, context: &str, question: &str) -> Result<String, QaError> {
        self.invoke(&question_prompt(context, question)).await
    }

    #[tracing::instrument(
        skip_all,
        fields(request_id = %uuid::Uuid::new_v4(), key_strategy = ?self.options.key_strategy)
    )]
    pub async fn answer_question_cached(
        &self,
        context: &str,
        question: &str,
    ) -> Result<String, QaError> {
        let key = self.options.key_strategy.key(context, question);

        if let Some(cached) = self.answer_cache.get(&key) {
            tracing::info!("answer served from cache");
            return Ok(cached);
        }

        let answer = self.invoke(&question_prompt(context, question)).await?;
        self.answer_cache.put(key, answer.clone());
        tracing::debug!(cached_entries = self.answer_cache.len(), "answer cached");

        Ok(answer)
    }

    #[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), format_hint = ?format_hint))]
    pub async fn extract_entities(
        &self,
        input: &str,
        format_hint: Option<&str>,
    ) -> Result<ExtractedEntities, QaError> {
        let text = self.resolve_input(input, format_hint).await?;
        self.entities_from_text(&text).await
    }

    #[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), path = %path.display()))]
    pub async fn extract_entities_from_file(
        &self,
        path: &Path,
        format_hint: Option<&str>,
    ) -> Result<ExtractedEntities, QaError> {
        let text = self.extract_file(path, format_hint).await?;
        self.entities_from_text(&text).await
    }

    async fn summarize_text(&self, text: &str) -> Result<String, QaError> {
        let prompt = summarize_prompt(text);

        let Some(memo) = &self.summary_memo else {
            return self.invoke(&prompt).await;
        };

        let key = fingerprint(&[&prompt]);
        if let Some(summary) = memo.get(&key) {
            tracing::debug!("summary reused from memo");
            return Ok(summary);
        }

        let summary = self.invoke(&prompt).await?;
        memo.insert(key, summary.clone());
        Ok(summary)
    }

    async fn entities_from_text(&self, text: &str) -> Result<ExtractedEntities, QaError> {
        let reply = self.invoke(&entities_prompt(text)).await?;

        let entities = parse_entities(&reply)
            .ok_or_else(|| QaError::MalformedEntities(truncate(&reply, MAX_REPORTED_REPLY)))?;

        tracing::info!(entity_count = entities.total(), "entities extracted");
        Ok(entities)
    }

    async fn resolve_input(&self, input: &str, format_hint: Option<&str>) -> Result<String, QaError> {
        let path = Path::new(input);
        if path.is_file() {
            return self.extract_file(path, format_hint).await;
        }

        tracing::debug!(chars = input.chars().count(), "input treated as inline text");
        Ok(input.to_string())
    }

    async fn extract_file(&self, path: &Path, format_hint: Option<&str>) -> Result<String, QaError> {
        let document = Document::with_hint(path, format_hint);
        tracing::info!(
            filename = %document.filename(),
            format = %document.format,
            "extracting document"
        );

        let extracted = self.file_loader.extract(&document).await?;
        Ok(extracted.to_prompt_text())
    }

    async fn invoke(&self, prompt: &str) -> Result<String, QaError> {
        let timeout = self.options.request_timeout;
        tracing::debug!(prompt = %sanitize_prompt(prompt), "invoking remote model");

        let started = Instant::now();
        let response = tokio::time::timeout(timeout, self.llm_client.generate_content(prompt))
            .await
            .map_err(|_| QaError::Timeout(timeout))?
            .map_err(|e| QaError::from_client(e, timeout))?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            response_chars = response.chars().count(),
            "remote model responded"
        );

        Ok(response)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QaError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("remote model: {0}")]
    RemoteModel(LlmClientError),
    #[error("remote model did not respond within {0:?}")]
    Timeout(Duration),
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("model reply did not contain entities: {0}")]
    MalformedEntities(String),
}

impl QaError {
    fn from_client(error: LlmClientError, timeout: Duration) -> Self {
        match error {
            LlmClientError::Timeout => Self::Timeout(timeout),
            LlmClientError::NotConfigured(reason) => Self::Configuration(reason),
            other => Self::RemoteModel(other),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("summarization failed: {cause}")]
pub struct SummarizationError {
    #[source]
    pub cause: QaError,
}

impl From<QaError> for SummarizationError {
    fn from(cause: QaError) -> Self {
        tracing::error!(error = %cause, "summarization failed");
        Self { cause }
    }
}
