//! Configuration management for docviz
//!
//! Handles summarizer selection, upload limits and chart tunables, persisted
//! as TOML under `~/.docviz/config.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::chart::{ChartKind, ChartOptions};
use crate::data::classify::NumeralRule;
use crate::data::loader::DEFAULT_MAX_BYTES;
use crate::summarize::chunk::DEFAULT_MAX_WORDS;

/// Which summarization backend to use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerBackend {
    /// No summarization; documents are visualized as extracted
    #[default]
    None,
    /// OpenAI-compatible chat-completions API
    Remote,
    /// Model server running on this machine
    Local,
}

impl SummarizerBackend {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Remote => "remote",
            Self::Local => "local",
        }
    }
}

/// Remote chat-completions settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}

/// Local model-server settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocalConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
            timeout_secs: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummarizerConfig {
    pub backend: SummarizerBackend,
    /// Words per chunk for the local backend
    pub max_words_per_chunk: usize,
    pub remote: RemoteConfig,
    pub local: LocalConfig,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            backend: SummarizerBackend::default(),
            max_words_per_chunk: DEFAULT_MAX_WORDS,
            remote: RemoteConfig::default(),
            local: LocalConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Largest file accepted by the loader
    pub max_upload_bytes: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ExtractionConfig {
    pub numeral_rule: NumeralRule,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub default_kind: ChartKind,
    pub histogram_bins: usize,
    pub sample_size: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let options = ChartOptions::default();
        Self {
            default_kind: ChartKind::default(),
            histogram_bins: options.histogram_bins,
            sample_size: options.sample_size,
        }
    }
}

impl ChartConfig {
    pub fn options(&self) -> ChartOptions {
        ChartOptions {
            histogram_bins: self.histogram_bins.max(1),
            sample_size: self.sample_size,
        }
    }
}

/// docviz configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Version of config schema (for future migrations)
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            summarizer: SummarizerConfig::default(),
            input: InputConfig::default(),
            extraction: ExtractionConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.docviz/config.toml)
    pub fn path() -> Result<PathBuf> {
        Ok(docviz_dir()?.join("config.toml"))
    }

    /// Load config from the default path, or return None if it doesn't exist
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from `path`, or return None if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(Some(config))
    }

    /// Load the config, falling back to defaults when there is none
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load()?.unwrap_or_default())
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the base docviz directory path (~/.docviz)
pub fn docviz_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine the home directory")?;
    Ok(home.join(".docviz"))
}
