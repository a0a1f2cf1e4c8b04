//! Saved-object records and find queries

use dspick_core::DataSourceRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Saved-object type under which data sources are registered
pub const DATA_SOURCE_TYPE: &str = "data-source";

/// Page size used when listing data sources. The picker loads the whole
/// catalog in one request.
pub const DEFAULT_PER_PAGE: usize = 10_000;

/// A raw saved object as stored by the catalog
///
/// `id` is top-level; everything else lives under `attributes`, e.g. the
/// display title at `attributes.title` and the auth mode at
/// `attributes.auth.type`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogRecord {
    pub id: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl CatalogRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object_type: Some(DATA_SOURCE_TYPE.to_string()),
            attributes: Map::new(),
        }
    }

    /// Set an attribute by dotted path, creating intermediate objects
    pub fn with_attribute(mut self, path: &str, value: impl Into<Value>) -> Self {
        let segments: Vec<&str> = path.split('.').collect();
        insert_path(&mut self.attributes, &segments, value.into());
        self
    }

    /// Look up an attribute by field name.
    ///
    /// A literal key (`"auth.type"`) wins over the nested path
    /// (`auth` → `type`).
    pub fn attribute(&self, field: &str) -> Option<&Value> {
        if let Some(value) = self.attributes.get(field) {
            return Some(value);
        }

        let mut segments = field.split('.');
        let first = segments.next()?;
        let mut current = self.attributes.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// String-valued attribute, `None` for missing or non-string values
    pub fn attribute_str(&self, field: &str) -> Option<&str> {
        self.attribute(field).and_then(Value::as_str)
    }

    /// Whether this record is of the given saved-object type.
    ///
    /// Untyped records (bare exports) match every type.
    pub fn is_type(&self, object_type: &str) -> bool {
        self.object_type
            .as_deref()
            .map_or(true, |t| t == object_type)
    }

    /// Restrict `attributes` to the requested fields. `id` is always kept
    /// since it is not an attribute.
    pub fn project(&self, fields: &[String]) -> Self {
        let mut attributes = Map::new();
        for field in fields.iter().filter(|f| f.as_str() != "id") {
            if let Some(value) = self.attribute(field) {
                let segments: Vec<&str> = field.split('.').collect();
                insert_path(&mut attributes, &segments, value.clone());
            }
        }

        Self {
            id: self.id.clone(),
            object_type: self.object_type.clone(),
            attributes,
        }
    }

    /// Extract the fields the picker works with
    pub fn into_data_source(self) -> DataSourceRecord {
        let title = self.attribute_str("title").map(str::to_string);
        let auth_type = self.attribute_str("auth.type").map(str::to_string);
        DataSourceRecord {
            id: self.id,
            title,
            auth_type,
        }
    }
}

fn insert_path(target: &mut Map<String, Value>, path: &[&str], value: Value) {
    match path {
        [] => {}
        [last] => {
            target.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let entry = target
                .entry((*head).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(inner) = entry {
                insert_path(inner, rest, value);
            }
        }
    }
}

/// Parameters of a catalog listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
    pub object_type: String,
    pub fields: Vec<String>,
    pub per_page: usize,
}

impl FindQuery {
    /// Query for all data sources with the given field projection
    pub fn data_sources(fields: &[&str]) -> Self {
        Self {
            object_type: DATA_SOURCE_TYPE.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}
