use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Failed to deserialize config: {0}")]
    Deserialize(String),

    #[error("Config validation error: {0}")]
    Validation(String),
}
