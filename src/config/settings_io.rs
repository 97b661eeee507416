use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::Secret;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::error::ConfigError;
use crate::config::RunContext;
use crate::model::config::GeneratorConfig;
use crate::model::topic::{Topic, TopicCatalog};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// `config.json` in the working directory wins over the per-user one.
fn candidate_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(mut path) = dirs::config_dir() {
        path.push("daily-drill");
        path.push(CONFIG_FILE_NAME);
        paths.push(path);
    }
    paths
}

pub fn find_config() -> Result<PathBuf, ConfigError> {
    find_config_in(&candidate_config_paths())
}

/// First candidate that is an existing file.
fn find_config_in(candidates: &[PathBuf]) -> Result<PathBuf, ConfigError> {
    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .ok_or_else(|| {
            let searched = candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            ConfigError::NotFound(searched)
        })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Loads the config file. Relative paths inside it are taken relative to the
/// directory that holds it.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let mut config: GeneratorConfig = read_json(path)?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    config.active_topic_file = resolve(base, &config.active_topic_file);
    config.output_dir = resolve(base, &config.output_dir);

    Ok(config)
}

pub fn load_topics(path: &Path) -> Result<TopicCatalog, ConfigError> {
    read_json(path)
}

pub fn active_topic(config: &GeneratorConfig) -> Result<Topic, ConfigError> {
    let catalog = load_topics(&config.active_topic_file)?;

    catalog
        .get(&config.active_topic)
        .cloned()
        .ok_or_else(|| ConfigError::UnknownTopic {
            topic: config.active_topic.clone(),
            catalog: config.active_topic_file.clone(),
        })
}

pub fn api_key_from(value: Option<String>) -> Result<Secret<String>, ConfigError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(Secret::new(key.trim().to_string())),
        _ => Err(ConfigError::MissingApiKey(API_KEY_VAR)),
    }
}

pub fn load_run_context() -> Result<RunContext, ConfigError> {
    let path = find_config()?;
    debug!(path = %path.display(), "loading config");

    let config = load_config(&path)?;
    let topic = active_topic(&config)?;
    let api_key = api_key_from(env::var(API_KEY_VAR).ok())?;

    Ok(RunContext {
        config,
        topic,
        api_key,
    })
}
