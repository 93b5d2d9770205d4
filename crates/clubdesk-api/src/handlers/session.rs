//! `/api/login` and `/api/logout` handlers.

use axum::{Json, extract::State};
use clubdesk_core::store::RecordStore;
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, auth, error::Error, token::IssuedToken};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
  pub username: Option<String>,
  pub password: Option<String>,
}

pub async fn login<S: RecordStore>(
  State(state): State<AppState<S>>,
  Json(req): Json<LoginRequest>,
) -> Result<Json<IssuedToken>, Error> {
  let issued = auth::issue_token(
    req.username.as_deref(),
    req.password.as_deref(),
    &state.auth,
  )?;
  tracing::info!(user = %state.auth.admin_username, "session token issued");
  Ok(Json(issued))
}

/// Stateless tokens mean the server holds no revocation list; logout only
/// acknowledges so the client can discard its token.
pub async fn logout() -> Json<serde_json::Value> {
  Json(json!({ "success": true }))
}
