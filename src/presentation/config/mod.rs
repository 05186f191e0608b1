mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{CacheSettings, LlmSettings, LoggingSettings, Settings, SettingsError};
