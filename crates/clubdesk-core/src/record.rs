//! The [`Record`] trait and id generation.

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

/// A persisted record kind (events, spotlight stories, ...).
///
/// Each kind maps to one backing document; records carry a string id that
/// is unique within their collection.
pub trait Record:
  Clone + Send + Sync + Serialize + DeserializeOwned + 'static
{
  /// Collection name. Used as the backing document stem and in logs.
  const KIND: &'static str;

  fn id(&self) -> &str;
}

/// Mint a fresh record id from the current time, in milliseconds.
///
/// Coarse and collision-unchecked: good enough for low-write-volume
/// administrative use, not cryptographically unique.
pub fn next_id() -> String {
  Utc::now().timestamp_millis().to_string()
}
