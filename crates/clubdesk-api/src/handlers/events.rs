//! `/api/events` handlers.

use axum::{
  Json,
  extract::{Path, State},
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
};
use clubdesk_core::{
  event::{Event, EventDraft},
  store::RecordStore,
};
use serde_json::json;

use crate::{AppState, auth, error::Error};

pub async fn list<S: RecordStore>(
  State(state): State<AppState<S>>,
) -> Json<Vec<Event>> {
  Json(state.events.list().await)
}

pub async fn create<S: RecordStore>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Json(draft): Json<EventDraft>,
) -> Result<impl IntoResponse, Error> {
  if !auth::authorize(&headers, &state.auth) {
    return Err(Error::Unauthorized);
  }
  let event = draft.into_event()?;
  let event = state.events.insert(event).await?;
  Ok((StatusCode::CREATED, Json(event)))
}

pub async fn remove<S: RecordStore>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, Error> {
  if !auth::authorize(&headers, &state.auth) {
    return Err(Error::Unauthorized);
  }
  state.events.remove(&id).await?;
  Ok(Json(json!({ "success": true })))
}
