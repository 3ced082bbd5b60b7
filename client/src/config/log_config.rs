use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub prefix: Option<String>,
    pub verbose: bool,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("Log prefix must not be blank".to_string());
        }
        Ok(())
    }
}
