//! Conversion of catalog records into the picker's option list

use crate::prelude::*;
use crate::types::{DataSourceRecord, SelectableOption};

/// Build the ordered option list for a set of fetched records.
///
/// Each record becomes a checked, visible option in input order; a missing
/// or empty title yields an empty label. When `include_local_cluster` is
/// set the local-cluster option is placed at index 0, even if there are no
/// records.
///
/// Records with an empty id are dropped: that id belongs to the local
/// cluster alone.
pub fn normalize(
    records: &[DataSourceRecord],
    include_local_cluster: bool,
) -> Vec<SelectableOption> {
    let mut options = Vec::with_capacity(records.len() + usize::from(include_local_cluster));

    if include_local_cluster {
        options.push(SelectableOption::local_cluster());
    }

    for record in records {
        if record.id.is_empty() {
            warn!(
                "Skipping data source without id (title: {:?})",
                record.title
            );
            continue;
        }
        let label = record.title.clone().unwrap_or_default();
        options.push(SelectableOption::new(record.id.clone(), label));
    }

    options
}

/// Keep the options whose checkbox is on, preserving order.
pub fn checked_only(options: &[SelectableOption]) -> Vec<SelectableOption> {
    options
        .iter()
        .filter(|option| option.is_checked())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CheckState, LOCAL_CLUSTER_ID};

    fn records() -> Vec<DataSourceRecord> {
        vec![
            DataSourceRecord::new("ds1", "Prod").with_auth_type("no_auth"),
            DataSourceRecord::new("ds2", "Staging"),
            DataSourceRecord::new("ds3", "Dev"),
        ]
    }

    #[test]
    fn test_local_cluster_first_then_fetch_order() {
        let options = normalize(&records(), true);

        let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec![LOCAL_CLUSTER_ID, "ds1", "ds2", "ds3"]);
        assert_eq!(options[0].label, "Local cluster");
    }

    #[test]
    fn test_no_local_cluster_when_excluded() {
        let mut records = records();
        // A record that tries to masquerade as local cluster by title still
        // keeps its own id
        records.push(DataSourceRecord::new("ds4", "Local cluster"));

        let options = normalize(&records, false);

        assert_eq!(options.len(), 4);
        assert!(options.iter().all(|o| !o.id.is_empty()));
    }

    #[test]
    fn test_empty_id_records_are_dropped() {
        let records = vec![
            DataSourceRecord::new("", "Impostor"),
            DataSourceRecord::new("ds1", "Prod"),
        ];

        let hidden = normalize(&records, false);
        assert_eq!(hidden, vec![SelectableOption::new("ds1", "Prod")]);

        let shown = normalize(&records, true);
        let empty_ids = shown.iter().filter(|o| o.id == LOCAL_CLUSTER_ID).count();
        assert_eq!(empty_ids, 1);
        assert_eq!(shown[0], SelectableOption::local_cluster());
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn test_auth_type_does_not_affect_option() {
        let options = normalize(&records()[..1], false);
        assert_eq!(options, vec![SelectableOption::new("ds1", "Prod")]);
    }

    #[test]
    fn test_scenario_single_record_with_local_cluster() {
        let options = normalize(&[DataSourceRecord::new("ds1", "Prod")], true);

        assert_eq!(
            options,
            vec![
                SelectableOption {
                    id: "".to_string(),
                    label: "Local cluster".to_string(),
                    checked: CheckState::On,
                    visible: true,
                },
                SelectableOption {
                    id: "ds1".to_string(),
                    label: "Prod".to_string(),
                    checked: CheckState::On,
                    visible: true,
                },
            ]
        );
    }

    #[test]
    fn test_empty_records_hidden_local_cluster() {
        assert!(normalize(&[], false).is_empty());
    }

    #[test]
    fn test_empty_records_still_get_local_cluster() {
        let options = normalize(&[], true);
        assert_eq!(options, vec![SelectableOption::local_cluster()]);
    }

    #[test]
    fn test_empty_title_collapses_to_empty_label() {
        let options = normalize(&[DataSourceRecord::new("a", "")], false);
        assert_eq!(options[0].label, "");

        let untitled = DataSourceRecord {
            id: "b".to_string(),
            title: None,
            auth_type: None,
        };
        let options = normalize(&[untitled], false);
        assert_eq!(options[0].label, "");
        assert_eq!(options[0].id, "b");
    }

    #[test]
    fn test_every_option_starts_checked_and_visible() {
        let options = normalize(&records(), true);
        assert!(options.iter().all(|o| o.is_checked() && o.visible));
    }

    #[test]
    fn test_normalize_does_not_touch_input() {
        let input = records();
        let before = input.clone();
        let _ = normalize(&input, true);
        assert_eq!(input, before);
    }

    #[test]
    fn test_checked_only_ignores_visibility() {
        let mut options = normalize(&records(), false);
        options[0].checked = CheckState::Off;
        options[2].visible = false;

        let checked = checked_only(&options);

        let ids: Vec<&str> = checked.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ds2", "ds3"]);
    }
}
