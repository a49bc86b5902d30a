//! Completion settings loaded from an optional TOML file
//!
//! Every key is optional; anything left out falls back to the built-in
//! defaults. None of these values can be influenced by a chat request.
//!
//! ```toml
//! [completion]
//! model = "gpt-4o"
//! max_tokens = 500
//! temperature = 0.7
//! system_prompt = "You are a helpful assistant. Be friendly, informative, and concise."
//! request_timeout_secs = 60
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::providers::CompletionParams;

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Be friendly, informative, and concise.";

/// Root of the settings file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub completion: CompletionSettings,
}

impl SettingsFile {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let settings: SettingsFile = toml::from_str(content)?;
        settings.completion.validate()?;
        Ok(settings)
    }
}

/// Fixed parameters for every provider call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionSettings {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Instruction placed ahead of every conversation
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Unset means the provider call is never cut short
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            system_prompt: default_system_prompt(),
            request_timeout_secs: None,
        }
    }
}

impl CompletionSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model must not be empty".into()));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::Invalid("max_tokens must be positive".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        Ok(())
    }

    pub fn params(&self) -> CompletionParams {
        CompletionParams {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CompletionSettings::default();
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.max_tokens, 500);
        assert!((settings.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(settings.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert!(settings.request_timeout_secs.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = SettingsFile::from_str(
            r#"
[completion]
model = "gpt-4o-mini"
request_timeout_secs = 30
"#,
        )
        .unwrap();

        assert_eq!(file.completion.model, "gpt-4o-mini");
        assert_eq!(file.completion.max_tokens, 500);
        assert_eq!(file.completion.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_empty_file() {
        let file = SettingsFile::from_str("").unwrap();
        assert_eq!(file.completion.model, "gpt-4o");
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let err = SettingsFile::from_str("[completion]\ntemperature = 3.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_max_tokens() {
        let err = SettingsFile::from_str("[completion]\nmax_tokens = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = SettingsFile::from_str("[completion\nmodel = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_params_mirror_settings() {
        let params = CompletionSettings::default().params();
        assert_eq!(params.model, "gpt-4o");
        assert_eq!(params.max_tokens, 500);
    }
}
