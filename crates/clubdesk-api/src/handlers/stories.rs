//! `/api/spotlight` handlers.
//!
//! Story creation arrives as multipart form data: text fields plus the image
//! file. The blob store persists the image first; the record only carries
//! the resulting path reference.

use axum::{
  Json,
  extract::{Multipart, Path, State, multipart::MultipartError},
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
};
use clubdesk_core::{
  store::RecordStore,
  story::{SpotlightStory, StoryDraft},
};
use serde_json::json;

use crate::{AppState, auth, error::Error};

pub async fn list<S: RecordStore>(
  State(state): State<AppState<S>>,
) -> Json<Vec<SpotlightStory>> {
  Json(state.stories.list().await)
}

pub async fn create<S: RecordStore>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
  if !auth::authorize(&headers, &state.auth) {
    return Err(Error::Unauthorized);
  }

  let mut draft = StoryDraft::default();
  while let Some(field) = multipart.next_field().await.map_err(bad)? {
    let name = field.name().unwrap_or_default().to_string();
    match name.as_str() {
      "name" => draft.name = field.text().await.map_err(bad)?,
      "title" => draft.title = field.text().await.map_err(bad)?,
      "story" => draft.story = field.text().await.map_err(bad)?,
      "image" => {
        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await.map_err(bad)?;
        draft.image = Some(state.blobs.store(&filename, &bytes)?);
      }
      _ => {}
    }
  }

  let story = draft.into_story()?;
  let story = state.stories.insert(story).await?;
  Ok((StatusCode::CREATED, Json(story)))
}

pub async fn remove<S: RecordStore>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, Error> {
  if !auth::authorize(&headers, &state.auth) {
    return Err(Error::Unauthorized);
  }
  state.stories.remove(&id).await?;
  Ok(Json(json!({ "success": true })))
}

fn bad(e: MultipartError) -> Error {
  Error::BadRequest(e.to_string())
}
