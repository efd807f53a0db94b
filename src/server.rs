//! HTTP server wiring: production collaborators in, listening socket out.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::api::{self, AppState, SharedState};
use crate::auth::TokenAuthenticator;
use crate::config::{AppConfig, ConfigError};
use crate::copywriter::{CopyError, OpenAiCopyGenerator};
use crate::generate::SiteGenerator;
use crate::palette::{ColorResolver, ImagePaletteExtractor};
use crate::publish::Publisher;
use crate::store::{Store, StoreError, StoreHandle};

#[derive(Error, Debug)]
pub enum StartError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Copy(#[from] CopyError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Assemble the application state from config.
///
/// Fails when the database cannot be opened or the copy API key is missing:
/// a server that cannot generate copy cannot serve its main route.
pub fn build_state(config: &AppConfig) -> Result<SharedState, StartError> {
    let store = StoreHandle::new(Store::open(Path::new(&config.database.path))?);
    let extractor = ImagePaletteExtractor::new(&config.extraction)?;
    let resolver = ColorResolver::new(config.colors.to_palette()?, Arc::new(extractor));
    let copy = OpenAiCopyGenerator::from_env(&config.copy)?;

    if config.auth.tokens.is_empty() {
        tracing::warn!("no auth tokens configured; every authenticated route will return 401");
    }

    Ok(Arc::new(AppState {
        generator: SiteGenerator::new(store.clone(), resolver, Arc::new(copy)),
        publisher: Publisher::new(store),
        auth: Arc::new(TokenAuthenticator::from_config(&config.auth)),
    }))
}

/// Serve until Ctrl+C.
pub async fn run(config: &AppConfig) -> Result<(), StartError> {
    let state = build_state(config)?;
    let app = api::router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartError::Bind {
            addr: addr.clone(),
            source,
        })?;
    let local_addr = listener.local_addr().map_err(StartError::Serve)?;
    tracing::info!(%local_addr, "pagesmith listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartError::Serve)?;

    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
