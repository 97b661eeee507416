//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the config, the topic catalog or the credential.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config file found (looked for {0})")]
    NotFound(String),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("topic '{topic}' is not defined in {}", .catalog.display())]
    UnknownTopic { topic: String, catalog: PathBuf },

    #[error("required environment variable {0} is not set")]
    MissingApiKey(&'static str),
}
