use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::errors::{ConfigError, ConfigurationError};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError>;
    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigurationError>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(config)?)
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError> {
        Ok(serde_yaml_ng::from_str(content)?)
    }
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Read(err)),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(ConfigError::Write)
    }
}

#[derive(Default)]
pub struct StringConfigProvider {
    content: Mutex<Option<String>>,
}

impl StringConfigProvider {
    pub fn new(content: Option<String>) -> Self {
        Self { content: Mutex::new(content) }
    }
}

impl ConfigContentProvider for StringConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.content.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        *self.content.lock().unwrap_or_else(PoisonError::into_inner) = Some(content.to_string());
        Ok(())
    }
}

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + Validate + Default + for<'de> Deserialize<'de> + Serialize,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer)
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer> ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(config_content_provider: TConfigContentProvider, config_serializer: TConfigSerializer) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate()?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codenames::{BoardConfig, GameRules, WinCounting};

    fn manager(content: Option<&str>) -> ConfigManager<StringConfigProvider, GameRules> {
        ConfigManager::new(
            StringConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer,
        )
    }

    #[test]
    fn test_missing_content_yields_defaults() {
        let rules = manager(None).get_config().unwrap();

        assert_eq!(rules, GameRules::default());
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let yaml = "board:\n  size: 3\n  team_count: 1\n  forbidden_count: 1\nwin_counting: cumulative\n";

        let rules = manager(Some(yaml)).get_config().unwrap();

        assert_eq!(rules.board, BoardConfig { size: 3, team_count: 1, forbidden_count: 1 });
        assert_eq!(rules.win_counting, WinCounting::Cumulative);
    }

    #[test]
    fn test_invalid_board_is_rejected() {
        let yaml = "board:\n  size: 3\n  team_count: 3\n  forbidden_count: 1\n";

        let result = manager(Some(yaml)).get_config();

        assert!(matches!(result, Err(ConfigError::Invalid(ConfigurationError::CardCountMismatch { .. }))));
    }

    #[test]
    fn test_malformed_yaml_is_reported() {
        let result = manager(Some("board: [")).get_config();

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_set_config_round_trips_through_provider() {
        let manager = manager(None);
        let rules = GameRules {
            win_counting: WinCounting::Cumulative,
            ..GameRules::default()
        };

        manager.set_config(&rules).unwrap();
        let stored = manager.config_content_provider.get_config_content().unwrap().unwrap();

        assert!(stored.contains("cumulative"));
        assert_eq!(manager.get_config().unwrap(), rules);
    }
}
