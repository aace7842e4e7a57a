//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{Audience, Tone};

/// Main configuration for Herald
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Enhancement strategy configuration
    pub enhancement: EnhancementConfig,

    /// Partner catalog configuration
    pub catalog: CatalogConfig,

    /// Output configuration
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            enhancement: EnhancementConfig::default(),
            catalog: CatalogConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Enhancement strategy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementConfig {
    /// Strategy to use in AI mode ("deterministic" or "remote")
    pub strategy: String,

    /// Model identifier sent to the remote endpoint
    pub model: String,

    /// Chat-completions endpoint URL
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// API key for the remote endpoint; the `OPENAI_API_KEY`
    /// environment variable is used when unset
    pub api_key: Option<String>,
}

impl EnhancementConfig {
    /// Environment variable consulted when `api_key` is unset
    pub const API_KEY_ENV: &'static str = "OPENAI_API_KEY";

    /// Environment variable that overrides the configured model
    pub const MODEL_ENV: &'static str = "OPENAI_MODEL";

    /// Resolve the API key from config or environment.
    ///
    /// Blank values are treated as unset, so a blank config entry still
    /// falls through to the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(Self::API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }

    /// Resolve the model, letting the environment override the config file
    pub fn resolve_model(&self) -> String {
        std::env::var(Self::MODEL_ENV)
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| self.model.clone())
    }
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            strategy: "deterministic".to_string(),
            model: "gpt-4o-mini".to_string(),
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            timeout_secs: 20,
            api_key: None,
        }
    }
}

/// Partner catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a partner catalog JSON file; the bundled catalog is used when unset
    pub file: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Audiences to build summaries for when the caller does not specify any
    pub audiences: Vec<Audience>,

    /// Default tone for generated summaries
    pub tone: Tone,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            audiences: vec![Audience::Cs, Audience::Support, Audience::Customer],
            tone: Tone::Neutral,
        }
    }
}
