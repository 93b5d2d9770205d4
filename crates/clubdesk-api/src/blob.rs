//! Image blob storage seam.
//!
//! The record service never touches upload bytes itself: the blob store
//! persists them and hands back a path reference, which is all the record
//! carries.

use std::path::{Path, PathBuf};

use clubdesk_core::{Error, Result};

/// Stores uploaded image bytes and returns a path reference for the record.
pub trait BlobStore: Send + Sync {
  fn store(&self, filename: &str, bytes: &[u8]) -> Result<String>;
}

// ─── Filesystem implementation ───────────────────────────────────────────────

/// Blob store writing under an upload directory.
///
/// Stored names follow `<stem>-<millis><ext>` so repeated uploads of the
/// same filename do not collide.
pub struct FsBlobStore {
  upload_dir:    PathBuf,
  public_prefix: String,
}

impl FsBlobStore {
  /// `public_prefix` is the path prefix recorded in the reference, e.g.
  /// `images/uploads`.
  pub fn open(
    upload_dir: impl AsRef<Path>,
    public_prefix: impl Into<String>,
  ) -> Result<Self> {
    let upload_dir = upload_dir.as_ref().to_path_buf();
    std::fs::create_dir_all(&upload_dir).map_err(|e| {
      Error::StorageUnavailable(format!(
        "cannot create {}: {e}",
        upload_dir.display()
      ))
    })?;
    Ok(Self { upload_dir, public_prefix: public_prefix.into() })
  }
}

impl BlobStore for FsBlobStore {
  fn store(&self, filename: &str, bytes: &[u8]) -> Result<String> {
    let original = Path::new(filename);
    let stem = original
      .file_stem()
      .and_then(|s| s.to_str())
      .filter(|s| !s.is_empty())
      .unwrap_or("upload");
    let ext = original
      .extension()
      .and_then(|s| s.to_str())
      .map(|e| format!(".{e}"))
      .unwrap_or_default();

    let name =
      format!("{stem}-{}{ext}", chrono::Utc::now().timestamp_millis());
    let path = self.upload_dir.join(&name);
    std::fs::write(&path, bytes).map_err(|e| {
      Error::StorageUnavailable(format!("write {}: {e}", path.display()))
    })?;
    Ok(format!("{}/{name}", self.public_prefix))
  }
}

// ─── In-memory implementation ────────────────────────────────────────────────

/// Blob store that discards bytes and returns a synthetic reference.
/// Test-only behaviour, exported so API tests can build states.
#[derive(Debug, Default)]
pub struct MemoryBlobStore;

impl BlobStore for MemoryBlobStore {
  fn store(&self, filename: &str, _bytes: &[u8]) -> Result<String> {
    Ok(format!("memory/{filename}"))
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::{BlobStore as _, FsBlobStore};

  #[test]
  fn stored_reference_carries_prefix_stem_and_extension() {
    let dir = tempdir().unwrap();
    let blobs = FsBlobStore::open(dir.path(), "images/uploads").unwrap();

    let reference = blobs.store("portrait.png", b"PNGDATA").unwrap();
    assert!(reference.starts_with("images/uploads/portrait-"), "{reference}");
    assert!(reference.ends_with(".png"), "{reference}");

    let name = reference.rsplit('/').next().unwrap();
    assert_eq!(std::fs::read(dir.path().join(name)).unwrap(), b"PNGDATA");
  }

  #[test]
  fn extensionless_and_empty_names_still_store() {
    let dir = tempdir().unwrap();
    let blobs = FsBlobStore::open(dir.path(), "images/uploads").unwrap();

    assert!(blobs.store("headshot", b"data").is_ok());
    let reference = blobs.store("", b"data").unwrap();
    assert!(reference.contains("upload-"), "{reference}");
  }
}
