//! Contact-form submissions (corporate and engagement enquiries).
//!
//! Submissions are persisted like any other record kind; notification of the
//! club inbox is a best-effort side effect handled by the API layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  record::{self, Record},
};

/// A persisted contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
  pub id:           String,
  pub company:      String,
  pub contact_name: String,
  pub email:        String,
  pub phone:        String,
  /// Enquiry category, e.g. "corporate" or "engagement".
  #[serde(rename = "type")]
  pub kind:         String,
  pub message:      String,
  pub received:     DateTime<Utc>,
}

impl Record for ContactSubmission {
  const KIND: &'static str = "contact-submissions";

  fn id(&self) -> &str {
    &self.id
  }
}

/// Caller-supplied payload for a contact submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
  #[serde(default)]
  pub company:      String,
  #[serde(default)]
  pub contact_name: String,
  #[serde(default)]
  pub email:        String,
  #[serde(default)]
  pub phone:        String,
  #[serde(default, rename = "type")]
  pub kind:         String,
  #[serde(default)]
  pub message:      String,
}

impl ContactDraft {
  /// Validate into a persistable [`ContactSubmission`] stamped with the
  /// receipt time.
  pub fn into_submission(self) -> Result<ContactSubmission> {
    for (field, value) in [
      ("company", &self.company),
      ("contactName", &self.contact_name),
      ("email", &self.email),
    ] {
      if value.trim().is_empty() {
        return Err(Error::InvalidInput(field));
      }
    }

    Ok(ContactSubmission {
      id: record::next_id(),
      company: self.company,
      contact_name: self.contact_name,
      email: self.email,
      phone: self.phone,
      kind: self.kind,
      message: self.message,
      received: Utc::now(),
    })
  }
}
