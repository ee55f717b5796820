use std::sync::Arc;

use circ_chain::SharedChain;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// The circ ledger server.
///
/// Owns the chain handle for the lifetime of the process; the chain is
/// bootstrapped (genesis included) at construction, never lazily.
pub struct CircServer {
    config: ServerConfig,
    chain: Arc<SharedChain>,
}

impl CircServer {
    /// Bootstrap a server around a freshly created chain.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        Ok(Self {
            config,
            chain: Arc::new(SharedChain::new()?),
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handle to the chain this server serves.
    pub fn chain(&self) -> Arc<SharedChain> {
        Arc::clone(&self.chain)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.chain))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("circ server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
