//! The [`RecordStore`] trait and an in-memory implementation.
//!
//! The trait is implemented by storage backends (e.g. `clubdesk-store-json`).
//! The record service depends on this abstraction, not on any concrete
//! backend, so tests run against [`MemoryStore`] and a future embedded
//! database can slot in without touching the service.

use std::{collections::HashMap, future::Future};

use serde_json::Value;
use tokio::sync::Mutex;

use crate::{Error, Result, record::Record};

/// Abstraction over durable per-kind record collections.
///
/// `load` is deliberately infallible: a missing or corrupt backing document
/// degrades to an empty collection (availability over strictness). `save`
/// replaces the whole collection; write failures surface as
/// [`Error::StorageUnavailable`].
pub trait RecordStore: Send + Sync {
  fn load<R: Record>(&self) -> impl Future<Output = Vec<R>> + Send;

  fn save<R: Record>(
    &self,
    records: Vec<R>,
  ) -> impl Future<Output = Result<()>> + Send;
}

// ─── In-memory store ─────────────────────────────────────────────────────────

/// A store holding each collection as serialized JSON values in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
  collections: Mutex<HashMap<&'static str, Vec<Value>>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl RecordStore for MemoryStore {
  async fn load<R: Record>(&self) -> Vec<R> {
    let collections = self.collections.lock().await;
    collections
      .get(R::KIND)
      .map(|values| {
        values
          .iter()
          .filter_map(|v| serde_json::from_value(v.clone()).ok())
          .collect()
      })
      .unwrap_or_default()
  }

  async fn save<R: Record>(&self, records: Vec<R>) -> Result<()> {
    let values = records
      .iter()
      .map(serde_json::to_value)
      .collect::<Result<Vec<_>, _>>()
      .map_err(|e| Error::StorageUnavailable(e.to_string()))?;
    self.collections.lock().await.insert(R::KIND, values);
    Ok(())
  }
}
