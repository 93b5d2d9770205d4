//! [`JsonStore`] — the flat-file implementation of [`RecordStore`].

use std::{
  io,
  path::{Path, PathBuf},
};

use clubdesk_core::{Error, Result, record::Record, store::RecordStore};

/// A record store backed by one JSON document per record kind.
///
/// Cloning is cheap; the store holds only the data directory path. There is
/// no caching: every operation re-reads durable storage, trading performance
/// for simplicity and crash consistency.
#[derive(Debug, Clone)]
pub struct JsonStore {
  data_dir: PathBuf,
}

impl JsonStore {
  /// Create a store rooted at `data_dir`, creating the directory if needed.
  pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
    let data_dir = data_dir.as_ref().to_path_buf();
    std::fs::create_dir_all(&data_dir).map_err(|e| {
      Error::StorageUnavailable(format!(
        "cannot create {}: {e}",
        data_dir.display()
      ))
    })?;
    Ok(Self { data_dir })
  }

  fn document_path(&self, kind: &str) -> PathBuf {
    self.data_dir.join(format!("{kind}.json"))
  }
}

impl RecordStore for JsonStore {
  async fn load<R: Record>(&self) -> Vec<R> {
    let path = self.document_path(R::KIND);
    let raw = match tokio::fs::read_to_string(&path).await {
      Ok(raw) => raw,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
      Err(e) => {
        tracing::warn!(
          kind = R::KIND,
          error = %e,
          "backing document unreadable; treating as empty"
        );
        return Vec::new();
      }
    };

    if raw.trim().is_empty() {
      return Vec::new();
    }
    match serde_json::from_str(&raw) {
      Ok(records) => records,
      Err(e) => {
        tracing::warn!(
          kind = R::KIND,
          error = %e,
          "backing document corrupt; treating as empty"
        );
        Vec::new()
      }
    }
  }

  async fn save<R: Record>(&self, records: Vec<R>) -> Result<()> {
    let path = self.document_path(R::KIND);
    let payload = serde_json::to_vec_pretty(&records)
      .map_err(|e| Error::StorageUnavailable(e.to_string()))?;

    // Write-then-rename so a crash mid-write cannot truncate the document.
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &payload).await.map_err(|e| {
      Error::StorageUnavailable(format!("write {}: {e}", tmp.display()))
    })?;
    tokio::fs::rename(&tmp, &path).await.map_err(|e| {
      Error::StorageUnavailable(format!("rename to {}: {e}", path.display()))
    })?;
    Ok(())
  }
}
