//! Background task spawning for catalog access

use std::sync::Arc;
use std::time::Duration;

use dspick_catalog::{fetch_data_sources_with_timeout, CatalogClient};
use dspick_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Spawn the catalog fetch in background.
///
/// The outcome comes back as [`Message::DataSourcesFetched`] or
/// [`Message::DataSourceFetchFailed`]; whether it is still wanted is decided
/// when that message is processed.
pub fn spawn_data_source_fetch<C>(
    catalog: Arc<C>,
    fields: &'static [&'static str],
    timeout: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    C: CatalogClient + Sync + 'static,
{
    tokio::spawn(async move {
        let message =
            match fetch_data_sources_with_timeout(catalog.as_ref(), fields, timeout).await {
                Ok(records) => Message::DataSourcesFetched { records },
                Err(e) => Message::DataSourceFetchFailed {
                    error: e.to_string(),
                },
            };

        if msg_tx.send(message).await.is_err() {
            debug!("Picker dropped before the data source fetch completed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dspick_catalog::test_utils::{test_record, StaticCatalogClient};
    use dspick_catalog::DATA_SOURCE_FIELDS;

    #[tokio::test]
    async fn test_fetch_success_message() {
        let (tx, mut rx) = mpsc::channel(4);
        let catalog = Arc::new(StaticCatalogClient::with_records(vec![test_record(
            "ds1", "Prod",
        )]));

        spawn_data_source_fetch(catalog, &DATA_SOURCE_FIELDS, Duration::from_secs(1), tx)
            .await
            .unwrap();

        match rx.recv().await {
            Some(Message::DataSourcesFetched { records }) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].id, "ds1");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_message() {
        let (tx, mut rx) = mpsc::channel(4);
        let catalog = Arc::new(StaticCatalogClient::failing("connection refused"));

        spawn_data_source_fetch(catalog, &DATA_SOURCE_FIELDS, Duration::from_secs(1), tx)
            .await
            .unwrap();

        match rx.recv().await {
            Some(Message::DataSourceFetchFailed { error }) => {
                assert!(error.contains("connection refused"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dropped_receiver_is_not_an_error() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let catalog = Arc::new(StaticCatalogClient::with_records(vec![]));

        let result =
            spawn_data_source_fetch(catalog, &DATA_SOURCE_FIELDS, Duration::from_secs(1), tx)
                .await;

        assert!(result.is_ok());
    }
}
