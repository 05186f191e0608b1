use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};

enum MockReply {
    Fixed(String),
    Echo,
    Fail(String),
}

/// Scripted stand-in for the remote model. Records every prompt it receives.
pub struct MockLlmClient {
    reply: MockReply,
    delay: Duration,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fixed(text.into()))
    }

    /// Answers with a short acknowledgement quoting the start of the prompt.
    pub fn echo() -> Self {
        Self::with_reply(MockReply::Echo)
    }

    /// Always fails with [`LlmClientError::ApiRequestFailed`].
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fail(message.into()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match &self.reply {
            MockReply::Fixed(text) => Ok(text.clone()),
            MockReply::Echo => {
                let preview: String = prompt.chars().take(80).collect();
                Ok(format!("Mock answer for: \"{preview}\""))
            }
            MockReply::Fail(message) => Err(LlmClientError::ApiRequestFailed(message.clone())),
        }
    }
}
