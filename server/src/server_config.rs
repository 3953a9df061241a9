use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use common::codenames::GameRules;
use common::config::Validate;
use common::ConfigurationError;

pub const DEFAULT_CONFIG_PATH: &str = "codenames.yaml";
pub const DEFAULT_COMMAND: &str = "!codenames";
pub const REPLY_QUEUE_SIZE: usize = 256;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub command: String,
    pub log_prefix: Option<String>,
    pub rules: GameRules,
    pub word_list_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            log_prefix: None,
            rules: GameRules::default(),
            word_list_path: None,
            seed: None,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.command.trim().is_empty() || self.command.contains(char::is_whitespace) {
            return Err(ConfigurationError::InvalidSetting(format!(
                "start command must be a single word, got '{}'",
                self.command
            )));
        }
        self.rules.validate()
    }
}
