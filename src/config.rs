use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("./data01.json"),
            output_dir: PathBuf::from("./results"),
            output_file: "produtos_categorizados.json".to_string(),
        }
    }
}

impl AppConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config)
}

/// Like `load_config`, but a missing file yields the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    match load_config(path) {
        Err(ConfigError::Io { path, source }) if source.kind() == ErrorKind::NotFound => {
            warn!("Config {} not found, using defaults", path.display());
            Ok(AppConfig::default())
        }
        other => other,
    }
}
