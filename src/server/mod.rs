//! HTTP server: shared state, listener, and graceful shutdown.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::fetch::{FetchOptions, UserSource};

pub use routes::router;

/// State shared by every request. Immutable once the server starts.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn UserSource>,
    pub options: FetchOptions,
}

impl AppState {
    pub fn new(source: Arc<dyn UserSource>, options: FetchOptions) -> Self {
        Self { source, options }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, cache = %state.options.cache, "serving user directory");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
