use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigError;

/// Source of raw config text. `Ok(None)` means nothing has been stored yet.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn display_path(&self) -> String {
        self.file_path.display().to_string()
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: self.display_path(),
                source,
            }),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|source| ConfigError::Write {
            path: self.display_path(),
            source,
        })
    }
}
