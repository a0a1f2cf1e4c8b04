//! Test utilities for catalog clients
//!
//! Provides in-memory catalog clients with fixed answers, plus a gated
//! client whose answer is held back until the test releases it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use dspick_core::prelude::*;
use tokio::sync::Semaphore;

use crate::client::CatalogClient;
use crate::record::{CatalogRecord, FindQuery};

/// Creates a data-source record with a title.
pub fn test_record(id: &str, title: &str) -> CatalogRecord {
    CatalogRecord::new(id).with_attribute("title", title)
}

/// Catalog client that always returns the same records or the same failure.
///
/// Clones share their call counter and recorded query.
#[derive(Debug, Clone)]
pub struct StaticCatalogClient {
    outcome: std::result::Result<Vec<CatalogRecord>, String>,
    calls: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<FindQuery>>>,
}

impl StaticCatalogClient {
    pub fn with_records(records: Vec<CatalogRecord>) -> Self {
        Self::from_outcome(Ok(records))
    }

    /// Every `find` fails with [`Error::FetchFailure`] carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self::from_outcome(Err(message.to_string()))
    }

    fn from_outcome(outcome: std::result::Result<Vec<CatalogRecord>, String>) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
            last_query: Arc::new(Mutex::new(None)),
        }
    }

    /// Number of `find` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The query passed to the most recent `find`
    pub fn last_query(&self) -> Option<FindQuery> {
        self.last_query.lock().ok().and_then(|q| q.clone())
    }

    fn answer(&self, query: &FindQuery) -> Result<Vec<CatalogRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_query.lock() {
            *last = Some(query.clone());
        }
        match &self.outcome {
            Ok(records) => Ok(records.clone()),
            Err(message) => Err(Error::fetch_failure(message.clone())),
        }
    }
}

impl CatalogClient for StaticCatalogClient {
    async fn find(&self, query: &FindQuery) -> Result<Vec<CatalogRecord>> {
        self.answer(query)
    }
}

/// Releases answers held by a [`GatedCatalogClient`]
#[derive(Debug, Clone)]
pub struct CatalogGate {
    permits: Arc<Semaphore>,
}

impl CatalogGate {
    /// Let one pending (or future) `find` complete
    pub fn release(&self) {
        self.permits.add_permits(1);
    }
}

/// Catalog client that suspends every `find` until its gate is released.
#[derive(Debug, Clone)]
pub struct GatedCatalogClient {
    inner: StaticCatalogClient,
    permits: Arc<Semaphore>,
}

impl GatedCatalogClient {
    pub fn new(inner: StaticCatalogClient) -> (Self, CatalogGate) {
        let permits = Arc::new(Semaphore::new(0));
        let gate = CatalogGate {
            permits: permits.clone(),
        };
        (Self { inner, permits }, gate)
    }

    pub fn calls(&self) -> usize {
        self.inner.calls()
    }
}

impl CatalogClient for GatedCatalogClient {
    async fn find(&self, query: &FindQuery) -> Result<Vec<CatalogRecord>> {
        let permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| Error::fetch_failure("catalog gate closed"))?;
        permit.forget();
        self.inner.answer(query)
    }
}
