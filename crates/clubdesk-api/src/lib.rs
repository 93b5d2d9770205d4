//! HTTP layer for the clubdesk back-office API.
//!
//! Exposes an axum [`Router`] implementing the club website's admin API
//! backed by any [`RecordStore`]: calendar events, spotlight stories,
//! contact submissions, and admin session tokens.

pub mod auth;
pub mod blob;
pub mod error;
pub mod handlers;
pub mod notify;
pub mod token;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{delete, get, post},
};
use clubdesk_core::{
  contact::ContactSubmission, event::Event, service::Collection,
  store::RecordStore, story::SpotlightStory,
};
use serde::Deserialize;

use auth::AuthConfig;
use blob::BlobStore;
use notify::Notifier;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `CLUBDESK_*` environment.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  /// Directory holding the per-kind JSON documents.
  pub data_dir:       PathBuf,
  /// Directory receiving uploaded image blobs.
  pub upload_dir:     PathBuf,
  pub api_key:        String,
  pub admin_username: String,
  pub admin_password: String,
  pub token_secret:   String,
  /// Session token lifetime.
  #[serde(default = "default_token_ttl_days")]
  pub token_ttl_days: i64,
}

fn default_token_ttl_days() -> i64 {
  30
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S: RecordStore> {
  pub events:   Arc<Collection<Event, S>>,
  pub stories:  Arc<Collection<SpotlightStory, S>>,
  pub contacts: Arc<Collection<ContactSubmission, S>>,
  pub auth:     Arc<AuthConfig>,
  pub blobs:    Arc<dyn BlobStore>,
  pub notifier: Arc<dyn Notifier>,
}

impl<S: RecordStore> AppState<S> {
  pub fn new(
    store: S,
    auth: AuthConfig,
    blobs: Arc<dyn BlobStore>,
    notifier: Arc<dyn Notifier>,
  ) -> Self {
    let store = Arc::new(store);
    Self {
      events:   Arc::new(Collection::new(store.clone())),
      stories:  Arc::new(Collection::new(store.clone())),
      contacts: Arc::new(Collection::new(store)),
      auth:     Arc::new(auth),
      blobs,
      notifier,
    }
  }
}

// Manual impl: `#[derive(Clone)]` would demand `S: Clone`, which the Arcs
// make unnecessary.
impl<S: RecordStore> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      events:   self.events.clone(),
      stories:  self.stories.clone(),
      contacts: self.contacts.clone(),
      auth:     self.auth.clone(),
      blobs:    self.blobs.clone(),
      notifier: self.notifier.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the back-office API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RecordStore + 'static,
{
  Router::new()
    .route(
      "/api/events",
      get(handlers::events::list::<S>).post(handlers::events::create::<S>),
    )
    .route("/api/events/{id}", delete(handlers::events::remove::<S>))
    .route(
      "/api/spotlight",
      get(handlers::stories::list::<S>).post(handlers::stories::create::<S>),
    )
    .route("/api/spotlight/{id}", delete(handlers::stories::remove::<S>))
    .route("/api/login", post(handlers::session::login::<S>))
    .route("/api/logout", post(handlers::session::logout))
    .route("/api/contact", post(handlers::contact::submit::<S>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
