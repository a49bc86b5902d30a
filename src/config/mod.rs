//! Application configuration

pub mod settings;

use std::env;
use std::path::PathBuf;

pub use settings::{CompletionSettings, SettingsFile};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub completion: CompletionSettings,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let completion = match env::var("CHATBOT_CONFIG").ok().map(PathBuf::from) {
            Some(path) => {
                tracing::info!("Loading completion settings from {}", path.display());
                SettingsFile::from_file(&path)?.completion
            }
            None => CompletionSettings::default(),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            openai_api_key: non_blank(env::var("OPENAI_API_KEY").ok()),
            openai_base_url: non_blank(env::var("OPENAI_BASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.into()),
            completion,
        })
    }
}

/// A credential of only whitespace is treated as missing
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
