//! HTTP server - binds the router to an address and serves until shutdown.

use crate::{
    api::routes::{SharedQueries, router},
    errors::Result,
};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Serves the room API.
pub struct Server {
    router: Router,
}

impl Server {
    /// Creates a server whose handlers read from `queries`.
    #[must_use]
    pub fn new(queries: SharedQueries) -> Self {
        Self {
            router: router(queries),
        }
    }

    /// The router instance of the server.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Runs the server on `address` until Ctrl-C or SIGTERM.
    #[instrument(skip(self))]
    pub async fn start(self, address: &str) -> Result<()> {
        let listener = TcpListener::bind(address).await?;
        info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped.");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    () = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(e) => {
                warn!("Failed to register SIGTERM handler: {}", e);
                ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await;

    info!("Shutdown signal received.");
}
