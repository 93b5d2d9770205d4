//! Outbound notification seam (email or similar).
//!
//! Delivery is best-effort: persistence is the source of truth, and a
//! notifier failure is logged, never surfaced as the operation's result.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

pub trait Notifier: Send + Sync {
  fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// Default notifier: records the notification in the log only. A real
/// mail transport slots in behind the same trait.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
  fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
    tracing::info!(subject, body_len = body.len(), "notification (log only)");
    Ok(())
  }
}
