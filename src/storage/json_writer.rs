use crate::model::{CategoryEntry, StorageError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes categorized products as pretty-printed JSON.
pub struct JsonResultWriter {
    output_dir: PathBuf,
    file_name: String,
}

impl JsonResultWriter {
    pub fn new(output_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: file_name.into(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    /// Creates the output directory if needed and writes `entries`.
    /// Returns the path that was written.
    pub async fn write(&self, entries: &[CategoryEntry]) -> Result<PathBuf, StorageError> {
        Self::ensure_dir(&self.output_dir).await?;

        let json = serde_json::to_string_pretty(entries)?;
        let path = self.output_path();
        tokio::fs::write(&path, json)
            .await
            .map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;

        debug!("Wrote {} categories to {}", entries.len(), path.display());
        Ok(path)
    }

    async fn ensure_dir(dir: &Path) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| StorageError::Io {
                path: dir.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductRef;
    use serde_json::json;

    #[tokio::test]
    async fn creates_nested_dir_and_writes_interchange_shape() {
        let root = std::env::temp_dir().join(format!(
            "mercado-categorizer-writer-{}",
            std::process::id()
        ));
        let writer = JsonResultWriter::new(root.join("results").join("run"), "out.json");

        let mut entry = CategoryEntry::new("1l leite".to_string());
        entry.push(ProductRef { title: "Leite 1L".into(), supermarket: "A".into() });
        entry.push(ProductRef { title: "leite 1000ml".into(), supermarket: "B".into() });

        let path = writer.write(&[entry]).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(&root).ok();

        assert_eq!(path, root.join("results").join("run").join("out.json"));
        assert!(written.starts_with("[\n  {"));
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            value,
            json!([{
                "category": "1l leite",
                "count": 2,
                "products": [
                    {"title": "Leite 1L", "supermarket": "A"},
                    {"title": "leite 1000ml", "supermarket": "B"}
                ]
            }])
        );
    }

    #[tokio::test]
    async fn empty_result_is_an_empty_array() {
        let root = std::env::temp_dir().join(format!(
            "mercado-categorizer-writer-empty-{}",
            std::process::id()
        ));
        let writer = JsonResultWriter::new(&root, "out.json");
        let path = writer.write(&[]).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(&root).ok();

        assert_eq!(written, "[]");
    }
}
