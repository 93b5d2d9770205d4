//! clubdesk-api server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the
//! flat-file JSON store, and serves the back-office API over HTTP.
//! Every setting can also come from the environment with a `CLUBDESK_`
//! prefix, e.g. `CLUBDESK_API_KEY`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use chrono::Duration;
use clap::Parser;
use clubdesk_api::{
  AppState, ServerConfig, auth::AuthConfig, blob::FsBlobStore,
  notify::LogNotifier,
};
use clubdesk_store_json::JsonStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Clubdesk back-office API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("CLUBDESK"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the flat-file store and the upload directory.
  let data_dir = expand_tilde(&server_cfg.data_dir);
  let store = JsonStore::open(&data_dir)
    .with_context(|| format!("failed to open store at {data_dir:?}"))?;

  let upload_dir = expand_tilde(&server_cfg.upload_dir);
  let blobs = FsBlobStore::open(&upload_dir, "images/uploads")
    .with_context(|| format!("failed to open uploads at {upload_dir:?}"))?;

  // Build application state.
  let state = AppState::new(
    store,
    AuthConfig {
      api_key:        server_cfg.api_key.clone(),
      admin_username: server_cfg.admin_username.clone(),
      admin_password: server_cfg.admin_password.clone(),
      token_secret:   server_cfg.token_secret.clone(),
      token_ttl:      Duration::days(server_cfg.token_ttl_days),
    },
    Arc::new(blobs),
    Arc::new(LogNotifier),
  );

  let app = clubdesk_api::router(state).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
