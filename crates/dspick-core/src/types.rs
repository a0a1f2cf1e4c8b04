//! Core domain type definitions

use serde::{Deserialize, Serialize};

/// Identifier reserved for the synthetic local-cluster option.
///
/// Catalog-derived options always carry a non-empty id.
pub const LOCAL_CLUSTER_ID: &str = "";

/// Display label of the synthetic local-cluster option.
pub const LOCAL_CLUSTER_LABEL: &str = "Local cluster";

/// A data source as fetched from the catalog.
///
/// Read-only once fetched; only lives until it has been normalized into a
/// [`SelectableOption`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceRecord {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub auth_type: Option<String>,
}

impl DataSourceRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            auth_type: None,
        }
    }

    pub fn with_auth_type(mut self, auth_type: impl Into<String>) -> Self {
        self.auth_type = Some(auth_type.into());
        self
    }
}

/// Checkbox state of a selectable option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    #[default]
    On,
    Off,
}

impl CheckState {
    pub fn is_on(self) -> bool {
        self == CheckState::On
    }

    pub fn toggled(self) -> Self {
        match self {
            CheckState::On => CheckState::Off,
            CheckState::Off => CheckState::On,
        }
    }
}

impl std::fmt::Display for CheckState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckState::On => write!(f, "on"),
            CheckState::Off => write!(f, "off"),
        }
    }
}

/// One entry of the picker's option list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectableOption {
    pub id: String,
    pub label: String,
    pub checked: CheckState,
    /// Set by list filtering in the presentation layer. Never consulted
    /// when deciding which options are selected.
    pub visible: bool,
}

impl SelectableOption {
    /// Create a checked, visible option
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: CheckState::On,
            visible: true,
        }
    }

    /// The synthetic local-cluster option
    pub fn local_cluster() -> Self {
        Self::new(LOCAL_CLUSTER_ID, LOCAL_CLUSTER_LABEL)
    }

    pub fn is_local_cluster(&self) -> bool {
        self.id == LOCAL_CLUSTER_ID
    }

    pub fn is_checked(&self) -> bool {
        self.checked.is_on()
    }

    pub fn with_checked(mut self, checked: CheckState) -> Self {
        self.checked = checked;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_option_defaults_on_and_visible() {
        let option = SelectableOption::new("ds1", "Prod");
        assert_eq!(option.checked, CheckState::On);
        assert!(option.visible);
        assert!(!option.is_local_cluster());
    }

    #[test]
    fn test_local_cluster_option() {
        let option = SelectableOption::local_cluster();
        assert_eq!(option.id, "");
        assert_eq!(option.label, "Local cluster");
        assert!(option.is_local_cluster());
        assert!(option.is_checked());
    }

    #[test]
    fn test_check_state_toggled() {
        assert_eq!(CheckState::On.toggled(), CheckState::Off);
        assert_eq!(CheckState::Off.toggled(), CheckState::On);
    }

    #[test]
    fn test_option_serializes_checked_as_on_off() {
        let option = SelectableOption::new("ds1", "Prod").with_checked(CheckState::Off);
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "ds1", "label": "Prod", "checked": "off", "visible": true})
        );
    }

    #[test]
    fn test_record_deserializes_without_optional_fields() {
        let record: DataSourceRecord = serde_json::from_str(r#"{"id":"a"}"#).unwrap();
        assert_eq!(record.id, "a");
        assert!(record.title.is_none());
        assert!(record.auth_type.is_none());
    }

    #[test]
    fn test_record_auth_type_uses_camel_case() {
        let record = DataSourceRecord::new("ds1", "Prod").with_auth_type("sigv4");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["authType"], "sigv4");
    }
}
