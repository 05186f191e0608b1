use std::path::{Path, PathBuf};
use std::time::Duration;

use config::Environment as EnvironmentSource;
use config::{Config, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_MEMO_CAPACITY, DEFAULT_REQUEST_TIMEOUT};
use crate::domain::CacheKeyStrategy;
use crate::infrastructure::cache::DEFAULT_CACHE_FILE;
use crate::infrastructure::llm::{API_KEY_ENV, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

use super::Environment;

/// Key name read by earlier releases.
const LEGACY_API_KEY_ENV: &str = "Germini_API_Key";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub llm: LlmSettings,
    pub cache: CacheSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub enabled: bool,
    pub path: PathBuf,
    pub key_strategy: CacheKeyStrategy,
    pub memo_capacity: usize,
    pub memoize_summaries: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

impl LlmSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_CACHE_FILE),
            key_strategy: CacheKeyStrategy::default(),
            memo_capacity: DEFAULT_MEMO_CAPACITY,
            memoize_summaries: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

impl Settings {
    /// Layers `config/base.*`, `config/{environment}.*` and `APP__*`
    /// environment variables, e.g. `APP__CACHE__PATH=/tmp/answers.json`.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        Self::load_from(Path::new("config"), environment)
    }

    pub fn load_from(config_dir: &Path, environment: Environment) -> Result<Self, SettingsError> {
        let settings: Settings = Config::builder()
            .add_source(File::from(config_dir.join("base")).required(false))
            .add_source(File::from(config_dir.join(environment.as_str())).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings.with_api_key_from_env())
    }

    /// Fills a missing API key from `GEMINI_API_KEY`, then the legacy name.
    pub fn with_api_key_from_env(mut self) -> Self {
        if self.llm.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            self.llm.api_key = [API_KEY_ENV, LEGACY_API_KEY_ENV]
                .into_iter()
                .find_map(|name| std::env::var(name).ok())
                .filter(|k| !k.trim().is_empty());
        }
        self
    }
}
