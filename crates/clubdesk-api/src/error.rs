//! API error taxonomy and axum `IntoResponse` implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,
  #[error("missing credentials")]
  MissingCredentials,
  #[error("invalid credentials")]
  InvalidCredentials,
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("token error: {0}")]
  Token(#[from] jsonwebtoken::errors::Error),
  #[error(transparent)]
  Core(#[from] clubdesk_core::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    use clubdesk_core::Error as Core;

    let status = match &self {
      Error::Unauthorized | Error::InvalidCredentials => {
        StatusCode::UNAUTHORIZED
      }
      Error::MissingCredentials | Error::BadRequest(_) => {
        StatusCode::BAD_REQUEST
      }
      Error::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
      Error::Core(Core::InvalidInput(_)) => StatusCode::BAD_REQUEST,
      Error::Core(Core::NotFound(_)) => StatusCode::NOT_FOUND,
      Error::Core(Core::StorageUnavailable(_)) => {
        StatusCode::SERVICE_UNAVAILABLE
      }
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
