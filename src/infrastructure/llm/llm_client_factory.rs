use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LlmClient;
use crate::presentation::config::{LlmSettings, ScaffoldConfig};

use super::gemini_client::GeminiClient;
use super::mock_llm_client::MockLlmClient;

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings, scaffold: &ScaffoldConfig) -> Arc<dyn LlmClient> {
        if scaffold.enabled {
            tracing::warn!(
                delay_ms = scaffold.mock_response_delay_ms,
                "scaffold mode: remote model replaced by mock client"
            );
            return Arc::new(
                MockLlmClient::echo()
                    .with_delay(Duration::from_millis(scaffold.mock_response_delay_ms)),
            );
        }

        if settings.api_key.is_none() {
            tracing::warn!("no API key configured; remote calls will fail until one is set");
        }

        tracing::info!(model = %settings.model, "using Gemini client");
        Arc::new(GeminiClient::new(
            settings.api_key.clone(),
            settings.model.clone(),
            settings.base_url.clone(),
            settings.request_timeout(),
        ))
    }
}
