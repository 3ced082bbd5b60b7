use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config document. A missing document yields
/// `TConfig::default()` without touching the cache, so the first explicit
/// `set_config` still persists it.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
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
        config.validate().map_err(ConfigError::Validation)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(config.clone());
        Ok(())
    }
}
