//! `/api/contact` handler — corporate and engagement enquiries.

use axum::{Json, extract::State};
use clubdesk_core::{contact::ContactDraft, store::RecordStore};
use serde_json::json;

use crate::{AppState, error::Error};

pub async fn submit<S: RecordStore>(
  State(state): State<AppState<S>>,
  Json(draft): Json<ContactDraft>,
) -> Result<Json<serde_json::Value>, Error> {
  let submission = draft.into_submission()?;
  let body = format!(
    "Type: {}\nCompany: {}\nContact: {}\nEmail: {}\nPhone: {}\n\n{}",
    submission.kind,
    submission.company,
    submission.contact_name,
    submission.email,
    submission.phone,
    submission.message,
  );

  let submission = state.contacts.insert(submission).await?;

  // Persistence is the source of truth; notification is best-effort.
  let subject = format!("Contact submission: {}", submission.company);
  if let Err(e) = state.notifier.notify(&subject, &body) {
    tracing::warn!(
      error = %e,
      id = submission.id.as_str(),
      "contact notification failed"
    );
  }

  Ok(Json(json!({ "success": true })))
}
