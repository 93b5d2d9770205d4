//! Load-modify-save orchestration over a [`RecordStore`].

use std::{marker::PhantomData, sync::Arc};

use tokio::sync::Mutex;

use crate::{Error, Result, record::Record, store::RecordStore};

/// One record kind's collection, with writers serialized.
///
/// Create and delete hold a per-collection mutex across their
/// load-modify-save cycle so two concurrent writers cannot drop each
/// other's records. List takes no lock.
pub struct Collection<R: Record, S: RecordStore> {
  store:      Arc<S>,
  write_lock: Mutex<()>,
  _kind:      PhantomData<fn() -> R>,
}

impl<R: Record, S: RecordStore> Collection<R, S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store, write_lock: Mutex::new(()), _kind: PhantomData }
  }

  /// The full current collection, insertion-ordered.
  pub async fn list(&self) -> Vec<R> {
    self.store.load().await
  }

  /// Append `record` and persist. Returns the stored record.
  pub async fn insert(&self, record: R) -> Result<R> {
    let _guard = self.write_lock.lock().await;
    let mut records: Vec<R> = self.store.load().await;
    records.push(record.clone());
    self.store.save(records).await?;
    tracing::info!(kind = R::KIND, id = record.id(), "record created");
    Ok(record)
  }

  /// Remove the record with `id` and persist the filtered collection.
  pub async fn remove(&self, id: &str) -> Result<()> {
    let _guard = self.write_lock.lock().await;
    let mut records: Vec<R> = self.store.load().await;
    let before = records.len();
    records.retain(|r| r.id() != id);
    if records.len() == before {
      return Err(Error::NotFound(id.to_string()));
    }
    self.store.save(records).await?;
    tracing::info!(kind = R::KIND, id, "record deleted");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::Collection;
  use crate::{
    Error,
    event::{Event, EventDraft},
    store::MemoryStore,
  };

  fn events() -> Collection<Event, MemoryStore> {
    Collection::new(Arc::new(MemoryStore::new()))
  }

  // Tests mint their own ids: the coarse millisecond token can collide for
  // records created back-to-back within one test.
  fn event_with_id(id: &str, title: &str) -> Event {
    let mut event = EventDraft {
      title: title.to_string(),
      start: "3-5-2024".to_string(),
      all_day: true,
      ..EventDraft::default()
    }
    .into_event()
    .unwrap();
    event.id = id.to_string();
    event
  }

  fn event(title: &str) -> Event {
    event_with_id("1700000000000", title)
  }

  #[tokio::test]
  async fn insert_then_list_round_trip() {
    let collection = events();
    let created = collection.insert(event("Meeting")).await.unwrap();

    let listed = collection.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].title, "Meeting");
    assert_eq!(listed[0].start, "2024-03-05");
  }

  #[tokio::test]
  async fn remove_deletes_exactly_the_matching_record() {
    let collection = events();
    let keep = collection.insert(event_with_id("1", "Keep")).await.unwrap();
    let drop = collection.insert(event_with_id("2", "Drop")).await.unwrap();

    collection.remove(&drop.id).await.unwrap();

    let listed = collection.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);
  }

  #[tokio::test]
  async fn remove_missing_id_is_not_found_and_leaves_collection_unchanged() {
    let collection = events();
    collection.insert(event("Meeting")).await.unwrap();

    let result = collection.remove("missing").await;
    assert!(matches!(result, Err(Error::NotFound(_))));
    assert_eq!(collection.list().await.len(), 1);
  }

  #[tokio::test]
  async fn remove_is_idempotent_via_not_found_on_retry() {
    let collection = events();
    let created = collection.insert(event("Once")).await.unwrap();

    collection.remove(&created.id).await.unwrap();
    let retry = collection.remove(&created.id).await;
    assert!(matches!(retry, Err(Error::NotFound(_))));
  }

  #[tokio::test]
  async fn concurrent_inserts_both_persist() {
    let collection = Arc::new(events());
    let (a, b) = (collection.clone(), collection.clone());

    let first = tokio::spawn(async move { a.insert(event_with_id("1", "A")).await });
    let second = tokio::spawn(async move { b.insert(event_with_id("2", "B")).await });
    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    assert_eq!(collection.list().await.len(), 2);
  }
}
