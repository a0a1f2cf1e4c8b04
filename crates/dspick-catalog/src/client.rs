//! Catalog client abstraction
//!
//! The picker only needs one read operation from the catalog: list records
//! of a type with a field projection. Backends implement [`CatalogClient`];
//! `trait_variant` derives it from [`LocalCatalogClient`] with `Send`
//! futures so fetches can run on a spawned task.

use dspick_core::prelude::*;

use crate::record::{CatalogRecord, FindQuery};

/// Read access to the saved-object catalog
#[trait_variant::make(CatalogClient: Send)]
pub trait LocalCatalogClient {
    /// List the records matching `query`, in catalog order.
    ///
    /// An empty list is a valid answer. Transport or storage problems are
    /// reported as errors; implementations do not retry.
    async fn find(&self, query: &FindQuery) -> Result<Vec<CatalogRecord>>;
}
