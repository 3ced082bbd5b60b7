use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::tictactoe::FirstPlayerMode;

use super::LogConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 5000;

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub first_player: FirstPlayerMode,
    pub bot_delay_ms: u64,
    pub show_cell_numbers: bool,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        self.log.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Human,
            bot_delay_ms: 500,
            show_cell_numbers: true,
            log: LogConfig::default(),
        }
    }
}
