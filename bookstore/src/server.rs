//! Process-level wiring: bind, serve until interrupted, release the store.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

use bookstore_core::{backend::StoreBackend, error::StoreError, store::DocumentStore};

use crate::{
    config::Config,
    http::{AppState, router},
    service::BookRecordService,
};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Unsupported(String),
}

/// Serves the book routes over `backend` until Ctrl-C, then shuts the backend down.
///
/// # Errors
///
/// Fails if the collection cannot be created, the listen address cannot be bound, the
/// server stops abnormally, or the backend reports an error on shutdown.
pub async fn serve<B: StoreBackend + 'static>(backend: B, config: &Config) -> Result<(), StartupError> {
    let service = Arc::new(
        BookRecordService::new(DocumentStore::new(backend)).with_collection(config.collection.clone()),
    );

    // Touches the store once, so an unreachable database fails startup instead of the
    // first request.
    service.store().create_collection(service.collection_name()).await?;

    let app = router(AppState::new(service.clone(), config.request_timeout()));
    let listener = TcpListener::bind(&config.listen).await?;

    info!(
        address = %listener.local_addr()?,
        collection = service.collection_name(),
        "bookstore listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped, shutting down store");

    // The router and every in-flight request hold a clone; once serve returns only
    // ours is left.
    match Arc::try_unwrap(service) {
        Ok(service) => service.into_store().shutdown().await?,
        Err(_) => warn!("store still in use, skipping shutdown"),
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
