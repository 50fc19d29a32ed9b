//! Startup orchestration.
//!
//! # Responsibilities
//! - Read the certificate and key once for both TLS origins
//! - Bind all three listeners
//! - Serve them until a shutdown signal or the first failure
//!
//! # Design Decisions
//! - Fail fast: TLS or bind errors abort before any origin serves
//! - Origins run as independent tasks sharing only read-only page settings

use tokio::task::{JoinError, JoinSet};

use crate::config::ServerConfig;
use crate::http::server::{OriginServer, ServeError, Transport};
use crate::lifecycle::{signals, Shutdown};
use crate::net::{load_tls_config, TlsError};
use crate::origins::{Origin, PageState};

/// Error type for bringing the origins up and keeping them running.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to load TLS material: {0}")]
    Tls(#[from] TlsError),
    #[error("{origin} failed to bind {addr}: {source}")]
    Bind {
        origin: Origin,
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Serve(#[from] ServeError),
    #[error("origin task failed: {0}")]
    Task(#[from] JoinError),
}

/// Load TLS material and bind every origin, in A, B, C order.
pub async fn prepare(config: &ServerConfig) -> Result<Vec<OriginServer>, RunError> {
    let tls = load_tls_config(&config.tls).await?;
    let pages = PageState::from_config(config);

    let mut servers = Vec::with_capacity(Origin::ALL.len());
    for origin in Origin::ALL {
        let transport = if origin.is_tls() {
            Transport::Tls(tls.clone())
        } else {
            Transport::Plain
        };
        let addr = format!("{}:{}", config.origins.bind_host, origin.port(config));

        let server = OriginServer::bind(origin, addr.as_str(), pages.clone(), transport)
            .await
            .map_err(|source| RunError::Bind {
                origin,
                addr: addr.clone(),
                source,
            })?;

        tracing::debug!(origin = %server.origin(), address = %addr, "Listener bound");
        servers.push(server);
    }

    Ok(servers)
}

/// Bring up all origins and serve until shutdown.
pub async fn run(config: ServerConfig) -> Result<(), RunError> {
    let servers = prepare(&config).await?;
    serve(servers, Shutdown::new()).await
}

/// Serve already-bound origins; the process signal handler triggers `shutdown`.
pub async fn serve(servers: Vec<OriginServer>, shutdown: Shutdown) -> Result<(), RunError> {
    let mut tasks = JoinSet::new();
    for server in servers {
        tasks.spawn(server.run(shutdown.subscribe()));
    }

    let trigger = shutdown.clone();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        trigger.trigger();
    });

    supervise(tasks, &shutdown).await
}

/// Wait for every origin task. The first failure tells the rest to stop, and
/// they are still drained before that failure is returned.
pub async fn supervise(
    mut tasks: JoinSet<Result<(), ServeError>>,
    shutdown: &Shutdown,
) -> Result<(), RunError> {
    let mut first_error: Option<RunError> = None;

    while let Some(joined) = tasks.join_next().await {
        let failure = match joined {
            Ok(Ok(())) => continue,
            Ok(Err(e)) => RunError::from(e),
            Err(e) => RunError::from(e),
        };

        if first_error.is_none() {
            tracing::error!(error = %failure, "Origin failed, stopping");
            shutdown.trigger();
            first_error = Some(failure);
        } else {
            tracing::warn!(error = %failure, "Origin failed while stopping");
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
