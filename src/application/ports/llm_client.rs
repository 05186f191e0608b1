use async_trait::async_trait;

/// Remote text-generation backend.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends a single prompt and returns the generated text.
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("request timed out")]
    Timeout,
    #[error("client not configured: {0}")]
    NotConfigured(String),
}
