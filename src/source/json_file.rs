// Reads product records from a JSON array on disk
use crate::model::{ProductRecord, SourceError};
use crate::source::traits::ProductSource;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ProductSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<ProductRecord>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<ProductRecord> =
            serde_json::from_str(&content).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}
