//! Data source fetching with a fixed field projection

use std::time::Duration;

use dspick_core::prelude::*;
use dspick_core::DataSourceRecord;
use tokio::time::timeout;

use crate::client::CatalogClient;
use crate::record::{CatalogRecord, FindQuery};

/// Fields requested for every data source: identifier, display title and
/// auth mode. Callers can rely on exactly these being populated.
pub const DATA_SOURCE_FIELDS: [&str; 3] = ["id", "title", "auth.type"];

/// Default timeout for a catalog listing
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch every data source known to the catalog.
///
/// Records come back in catalog order. There is no retry; a failed read is
/// returned to the caller as is.
pub async fn fetch_data_sources<C>(client: &C, fields: &[&str]) -> Result<Vec<DataSourceRecord>>
where
    C: CatalogClient + Sync,
{
    if fields.is_empty() {
        return Err(Error::EmptyProjection);
    }

    let query = FindQuery::data_sources(fields);
    let records = client.find(&query).await?;

    info!("Fetched {} data sources", records.len());

    Ok(records
        .into_iter()
        .map(CatalogRecord::into_data_source)
        .collect())
}

/// Fetch data sources, failing with [`Error::CatalogTimeout`] if the
/// catalog does not answer within `timeout_duration`
pub async fn fetch_data_sources_with_timeout<C>(
    client: &C,
    fields: &[&str],
    timeout_duration: Duration,
) -> Result<Vec<DataSourceRecord>>
where
    C: CatalogClient + Sync,
{
    timeout(timeout_duration, fetch_data_sources(client, fields))
        .await
        .map_err(|_| Error::CatalogTimeout {
            after_ms: timeout_duration.as_millis() as u64,
        })?
}
