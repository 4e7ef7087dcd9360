//! Toy authentication server.
//!
//! Bind first, then run: `try_bind` reports the actual address (useful
//! with port 0), `run` serves until shutdown. One fixed user table, no
//! persistence.

pub mod routes;
pub mod shutdown;
pub mod store;

use std::future::IntoFuture;
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::server::routes::build_router;
use crate::server::shutdown::ShutdownSignal;
use crate::server::store::UserStore;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },

    #[error("try_bind() must be called before run()")]
    NotBound,
}

pub struct AuthServer {
    addr: Option<SocketAddr>,
    /// The bound listener, kept alive between try_bind() and run() so the
    /// reported port cannot be claimed by another process in between.
    listener: Option<TcpListener>,
    store: Arc<UserStore>,
    shutdown: Arc<ShutdownSignal>,
}

impl AuthServer {
    pub fn new(store: UserStore) -> Self {
        Self {
            addr: None,
            listener: None,
            store: Arc::new(store),
            shutdown: Arc::new(ShutdownSignal::new()),
        }
    }

    /// Bind to `bind_addr` (host:port) and return the actual address.
    pub async fn try_bind(&mut self, bind_addr: &str) -> Result<SocketAddr, ServerError> {
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr {
                addr: bind_addr.to_string(),
                source,
            })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let actual_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Serve { source })?;

        tracing::info!("auth server bound to {actual_addr}");
        self.addr = Some(actual_addr);
        self.listener = Some(listener);
        Ok(actual_addr)
    }

    /// Handle for stopping the server from another task.
    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until ctrl-c, SIGTERM, or `ServerHandle::shutdown`.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    pub async fn run(mut self) -> Result<(), ServerError> {
        let listener = self.listener.take().ok_or(ServerError::NotBound)?;
        let addr = self.addr.ok_or(ServerError::NotBound)?;

        tracing::info!("auth server listening on {addr}");

        let app = build_router(self.store.clone());
        let shutdown = self.shutdown.clone();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
            })
            .into_future()
            .await
            .map_err(|source| ServerError::Serve { source })?;

        tracing::info!("auth server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownSignal>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.trigger();
    }
}
