//! Error types for `clubdesk-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field is missing, empty, or failed normalization.
  /// Always names the offending field.
  #[error("missing or invalid field: {0}")]
  InvalidInput(&'static str),

  #[error("no record with id {0}")]
  NotFound(String),

  /// The backing store could not be written. Reads never produce this;
  /// an unreadable document degrades to an empty collection instead.
  #[error("storage unavailable: {0}")]
  StorageUnavailable(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
