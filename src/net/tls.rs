//! TLS configuration and certificate loading.

use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;

use crate::config::TlsConfig;

/// Error type for TLS material loading.
#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no certificate found in {0:?}")]
    NoCertificate(PathBuf),
    #[error("no private key found in {0:?}")]
    NoPrivateKey(PathBuf),
    #[error("invalid TLS configuration: {0}")]
    Config(#[source] std::io::Error),
}

/// Read the certificate and key once and build a shareable rustls config.
///
/// The returned config is reference counted; clone it for every TLS origin.
pub async fn load_tls_config(config: &TlsConfig) -> Result<RustlsConfig, TlsError> {
    let cert_path = Path::new(&config.cert_path);
    let key_path = Path::new(&config.key_path);

    // Both files are read before either is inspected.
    let (cert, key) = tokio::try_join!(read_pem(cert_path), read_pem(key_path))?;

    check_certificate(cert_path, &cert)?;
    check_private_key(key_path, &key)?;

    tracing::debug!(
        cert_path = %cert_path.display(),
        key_path = %key_path.display(),
        "TLS material loaded"
    );

    RustlsConfig::from_pem(cert, key).await.map_err(TlsError::Config)
}

async fn read_pem(path: &Path) -> Result<Vec<u8>, TlsError> {
    tokio::fs::read(path).await.map_err(|source| TlsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn check_certificate(path: &Path, pem: &[u8]) -> Result<(), TlsError> {
    let mut reader = pem;
    let first = rustls_pemfile::certs(&mut reader).next();
    match first {
        Some(Ok(_)) => Ok(()),
        _ => Err(TlsError::NoCertificate(path.to_path_buf())),
    }
}

fn check_private_key(path: &Path, pem: &[u8]) -> Result<(), TlsError> {
    let mut reader = pem;
    match rustls_pemfile::private_key(&mut reader) {
        Ok(Some(_)) => Ok(()),
        _ => Err(TlsError::NoPrivateKey(path.to_path_buf())),
    }
}
