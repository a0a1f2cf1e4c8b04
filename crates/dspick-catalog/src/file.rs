//! File-backed catalog reading a saved-object export

use std::path::{Path, PathBuf};

use dspick_core::prelude::*;
use serde::Deserialize;

use crate::client::CatalogClient;
use crate::record::{CatalogRecord, FindQuery};

/// Accepted export layouts
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogExport {
    /// `[{"id": ..., "attributes": {...}}, ...]`
    Bare(Vec<CatalogRecord>),
    /// `{"saved_objects": [...]}`, the shape of a find response
    Wrapped { saved_objects: Vec<CatalogRecord> },
}

impl CatalogExport {
    fn into_records(self) -> Vec<CatalogRecord> {
        match self {
            CatalogExport::Bare(records) => records,
            CatalogExport::Wrapped { saved_objects } => saved_objects,
        }
    }
}

/// Catalog backed by a JSON export on disk.
///
/// The file is re-read on every `find`, so edits show up on the next
/// activation.
#[derive(Debug, Clone)]
pub struct FileCatalogClient {
    path: PathBuf,
}

impl FileCatalogClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogClient for FileCatalogClient {
    async fn find(&self, query: &FindQuery) -> Result<Vec<CatalogRecord>> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Err(Error::catalog_not_found(&self.path));
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::fetch_failure(format!("{}: {}", self.path.display(), e)))?;

        let export: CatalogExport = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog {}", self.path.display()))?;

        let records: Vec<CatalogRecord> = export
            .into_records()
            .into_iter()
            .filter(|record| record.is_type(&query.object_type))
            .take(query.per_page)
            .map(|record| record.project(&query.fields))
            .collect();

        debug!(
            "Read {} {} records from {}",
            records.len(),
            query.object_type,
            self.path.display()
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::DATA_SOURCE_FIELDS;
    use tempfile::tempdir;

    const EXPORT: &str = r#"[
        {"id": "ds1", "type": "data-source", "attributes": {"title": "Prod", "endpoint": "https://prod", "auth": {"type": "no_auth"}}},
        {"id": "ip1", "type": "index-pattern", "attributes": {"title": "logs-*"}},
        {"id": "ds2", "type": "data-source", "attributes": {"title": "Staging", "auth": {"type": "sigv4"}}}
    ]"#;

    fn query() -> FindQuery {
        FindQuery::data_sources(&DATA_SOURCE_FIELDS)
    }

    #[tokio::test]
    async fn test_reads_data_sources_in_file_order() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, EXPORT).unwrap();

        let records = FileCatalogClient::new(&path).find(&query()).await.unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ds1", "ds2"]);
        // endpoint is outside the projection
        assert!(records[0].attribute("endpoint").is_none());
        assert_eq!(records[1].attribute_str("auth.type"), Some("sigv4"));
    }

    #[tokio::test]
    async fn test_reads_wrapped_export() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"saved_objects": [{"id": "ds9", "attributes": {"title": "Nine"}}]}"#,
        )
        .unwrap();

        let records = FileCatalogClient::new(&path).find(&query()).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].attribute_str("title"), Some("Nine"));
    }

    #[tokio::test]
    async fn test_empty_export_is_not_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, "[]").unwrap();

        let records = FileCatalogClient::new(&path).find(&query()).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let temp = tempdir().unwrap();
        let client = FileCatalogClient::new(temp.path().join("nope.json"));

        let err = client.find(&query()).await.unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileCatalogClient::new(&path)
            .find(&query())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_catalog_error());
    }

    #[tokio::test]
    async fn test_per_page_caps_result() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, EXPORT).unwrap();

        let mut query = query();
        query.per_page = 1;
        let records = FileCatalogClient::new(&path).find(&query).await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
