//! Configuration for the opslag service.
//!
//! Settings are loaded from an `opslag.toml` file when present and fall back
//! to defaults otherwise. The OpenAI credential is resolved from the
//! environment first and only then from the configuration file, so a key
//! never has to live on disk.

pub mod constants;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use self::constants::{api_keys, datasets, generation, models, server};

/// Main configuration structure for opslag
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OpslagConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Generation service settings
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory holding the per-person dataset files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Model ID sent to the generation service
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// API key fallback when the environment variable is unset
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_bind() -> String {
    server::DEFAULT_BIND.to_string()
}
fn default_data_dir() -> String {
    datasets::DEFAULT_DATA_DIR.to_string()
}
fn default_model() -> String {
    models::openai::DEFAULT_MODEL.to_string()
}
fn default_temperature() -> f32 {
    generation::TEMPERATURE
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            data_dir: default_data_dir(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            api_key: None,
        }
    }
}

impl OpslagConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the OpenAI API key: environment variable first, then the
    /// configuration file value.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_api_key_from(
            env::var(api_keys::OPENAI_ENV).ok(),
            self.generation.api_key.as_deref(),
        )
    }
}

fn resolve_api_key_from(env_value: Option<String>, config_value: Option<&str>) -> Option<String> {
    env_value
        .filter(|key| !key.trim().is_empty())
        .or_else(|| config_value.map(|key| key.to_string()))
}
