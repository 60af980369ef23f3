use crate::domain::model::ProductItem;
use crate::domain::ports::{CatalogStore, Storage};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    pub fn from_path(path: &str) -> Option<Self> {
        let extension = Path::new(path).extension()?.to_str()?;
        Self::from_name(&extension.to_ascii_lowercase())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Row layout of a CSV catalog: `id,name,description,image`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: Option<String>,
}

impl From<CsvRow> for ProductItem {
    fn from(row: CsvRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            image: row.image.filter(|url| !url.is_empty()),
        }
    }
}

/// Catalog kept in a JSON or CSV file. The file is re-read on every call.
#[derive(Debug, Clone)]
pub struct FileCatalog<S: Storage> {
    storage: S,
    path: String,
    format: CatalogFormat,
}

impl<S: Storage> FileCatalog<S> {
    pub fn new(storage: S, path: impl Into<String>, format: CatalogFormat) -> Self {
        Self {
            storage,
            path: path.into(),
            format,
        }
    }

    /// Picks the format from the file extension.
    pub fn from_extension(storage: S, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let format =
            CatalogFormat::from_path(&path).ok_or_else(|| CatalogError::InvalidConfigValueError {
                field: "catalog.path".to_string(),
                value: path.clone(),
                reason: "Cannot infer catalog format; expected a .json or .csv file".to_string(),
            })?;
        Ok(Self::new(storage, path, format))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn format(&self) -> CatalogFormat {
        self.format
    }

    fn parse(&self, bytes: &[u8]) -> Result<Vec<ProductItem>> {
        match self.format {
            CatalogFormat::Json => {
                serde_json::from_slice(bytes).map_err(|e| CatalogError::CatalogUnavailable {
                    message: format!("{} is not a valid JSON catalog: {}", self.path, e),
                })
            }
            CatalogFormat::Csv => {
                let mut reader = csv::ReaderBuilder::new()
                    .has_headers(true)
                    .trim(csv::Trim::Headers)
                    .from_reader(bytes);
                let mut items = Vec::new();
                for row in reader.deserialize::<CsvRow>() {
                    items.push(row?.into());
                }
                Ok(items)
            }
        }
    }
}

#[async_trait]
impl<S: Storage> CatalogStore for FileCatalog<S> {
    async fn list_all(&self) -> Result<Vec<ProductItem>> {
        let bytes = self.storage.read_file(&self.path).await?;
        let items = self.parse(&bytes)?;
        tracing::debug!("Loaded {} products from {}", items.len(), self.path);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::local_storage::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(CatalogFormat::from_path("items.json"), Some(CatalogFormat::Json));
        assert_eq!(CatalogFormat::from_path("dir/items.CSV"), Some(CatalogFormat::Csv));
        assert_eq!(CatalogFormat::from_path("items.xml"), None);
        assert_eq!(CatalogFormat::from_path("items"), None);
    }

    #[test]
    fn test_csv_rows_default_missing_text_to_empty() {
        let catalog = FileCatalog::new(LocalStorage::new("."), "unused.csv", CatalogFormat::Csv);
        let items = catalog
            .parse(b"id,name,description,image\n1,Widget,,\n2,,Great for Kids,http://img/2.png\n")
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "");
        assert_eq!(items[0].image, None);
        assert_eq!(items[1].name, "");
        assert_eq!(items[1].image.as_deref(), Some("http://img/2.png"));
    }

    #[test]
    fn test_json_null_field_is_rejected() {
        let catalog = FileCatalog::new(LocalStorage::new("."), "bad.json", CatalogFormat::Json);
        let err = catalog
            .parse(br#"[{"id": 1, "name": null, "description": "x"}]"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::CatalogUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_file_is_reread_on_every_call() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        storage
            .write_file("catalog.json", br#"[{"id": 1, "name": "Widget", "description": "Blue"}]"#)
            .await
            .unwrap();

        let catalog = FileCatalog::from_extension(storage.clone(), "catalog.json").unwrap();
        assert_eq!(catalog.count().await.unwrap(), 1);

        storage.write_file("catalog.json", b"[]").await.unwrap();
        assert_eq!(catalog.count().await.unwrap(), 0);
    }

    #[test]
    fn test_from_extension_rejects_unknown_format() {
        let err = FileCatalog::from_extension(LocalStorage::new("."), "catalog.txt").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfigValueError { .. }));
    }
}
