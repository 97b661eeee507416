use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Run configuration, read from `config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Key into the topic catalog.
    pub active_topic: String,
    pub active_topic_file: PathBuf,
    pub difficulty: String,
    pub settings: GenerationSettings,

    #[serde(default = "default_model")]
    pub model: String,

    /// Dated topic folders are created under this directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub mcq_count: u32,

    /// How much of the solution the starter code gives away ("minimal", "partial", ...).
    pub problem_scaffold: String,
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_api_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout() -> u64 {
    120
}
