//! # dspick-catalog - Data Source Catalog Access
//!
//! Reads data source definitions from the saved-object catalog.
//!
//! Depends on [`dspick_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`CatalogClient`] - Async, `Send` read access to the catalog
//! - [`FileCatalogClient`] - Catalog backed by a JSON saved-object export
//!
//! ### Records
//! - [`CatalogRecord`] - Raw saved object (`id`, `type`, `attributes`)
//! - [`FindQuery`] - Type, field projection and page size of a listing
//!
//! ### Fetching
//! - [`fetch_data_sources()`] - List data sources with the given projection
//! - [`fetch_data_sources_with_timeout()`] - Same, bounded by a timeout
//! - [`DATA_SOURCE_FIELDS`] - The projection the picker requests

pub mod client;
pub mod fetch;
pub mod file;
pub mod record;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{CatalogClient, LocalCatalogClient};
pub use fetch::{
    fetch_data_sources, fetch_data_sources_with_timeout, DATA_SOURCE_FIELDS, FETCH_TIMEOUT,
};
pub use file::FileCatalogClient;
pub use record::{CatalogRecord, FindQuery, DATA_SOURCE_TYPE, DEFAULT_PER_PAGE};
