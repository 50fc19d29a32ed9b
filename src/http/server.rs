//! HTTP server setup for a single origin.
//!
//! # Responsibilities
//! - Create the Axum router for an origin and wire up tracing
//! - Bind the origin's listener before anything is served
//! - Serve over TLS (Origins A and B) or plain HTTP (Origin C)
//! - Stop gracefully when the shutdown signal fires

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::origins::{landing, origin_a, Origin, PageState};

/// In-flight TLS connections get this long to finish after shutdown.
const TLS_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// How an origin is reached.
#[derive(Clone)]
pub enum Transport {
    Plain,
    Tls(RustlsConfig),
}

/// An origin stopped serving with an I/O error.
#[derive(Debug, thiserror::Error)]
#[error("{origin} stopped: {source}")]
pub struct ServeError {
    pub origin: Origin,
    #[source]
    pub source: std::io::Error,
}

/// Build the route table for `origin`, with request tracing.
pub fn build_router(origin: Origin, pages: PageState) -> Router {
    let routes = match origin {
        Origin::A => origin_a::router(pages),
        Origin::B | Origin::C => landing::router(origin, pages),
    };
    routes.layer(TraceLayer::new_for_http())
}

/// A bound, not yet serving, origin listener.
pub struct OriginServer {
    origin: Origin,
    router: Router,
    listener: TcpListener,
    transport: Transport,
}

impl OriginServer {
    /// Bind `addr` for `origin`.
    pub async fn bind(
        origin: Origin,
        addr: impl ToSocketAddrs,
        pages: PageState,
        transport: Transport,
    ) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            origin,
            router: build_router(origin, pages),
            listener,
            transport,
        })
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Get the local address this origin is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` fires.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> Result<(), ServeError> {
        let origin = self.origin;
        let serve_error = |source| ServeError { origin, source };

        let addr = self.local_addr().map_err(serve_error)?;
        tracing::info!(
            origin = %origin,
            address = %addr,
            scheme = origin.scheme(),
            "Origin serving"
        );

        match self.transport {
            Transport::Plain => {
                axum::serve(self.listener, self.router)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown.recv().await;
                    })
                    .await
                    .map_err(serve_error)?;
            }
            Transport::Tls(tls) => {
                let handle = axum_server::Handle::new();
                let trigger = handle.clone();
                tokio::spawn(async move {
                    let _ = shutdown.recv().await;
                    trigger.graceful_shutdown(Some(TLS_SHUTDOWN_GRACE));
                });

                let listener = self.listener.into_std().map_err(serve_error)?;
                axum_server::tls_rustls::from_tcp_rustls(listener, tls)
                    .handle(handle)
                    .serve(self.router.into_make_service())
                    .await
                    .map_err(serve_error)?;
            }
        }

        tracing::info!(origin = %origin, "Origin stopped");
        Ok(())
    }
}
