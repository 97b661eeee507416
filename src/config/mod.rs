pub mod error;
pub mod settings_io;

use secrecy::Secret;

use crate::model::config::GeneratorConfig;
use crate::model::topic::Topic;

/// Everything a run needs, loaded and checked up front.
#[derive(Debug)]
pub struct RunContext {
    pub config: GeneratorConfig,
    pub topic: Topic,
    pub api_key: Secret<String>,
}
