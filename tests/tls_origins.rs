//! Brings all three origins up with a generated certificate and talks TLS to
//! the secure ones.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use rustls::pki_types::{CertificateDer, ServerName};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinSet;
use tokio_rustls::TlsConnector;

use referrer_origins::config::ServerConfig;
use referrer_origins::lifecycle::{self, startup::supervise};
use referrer_origins::origins::Origin;
use referrer_origins::Shutdown;

struct Fixture {
    _dir: TempDir,
    config: ServerConfig,
    cert: CertificateDer<'static>,
}

/// Self-signed `localhost` certificate written to disk, origins on ephemeral ports.
fn fixture() -> Fixture {
    let rcgen::CertifiedKey { cert, key_pair } =
        rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let cert_path = dir.path().join("localhost.pem");
    let key_path = dir.path().join("localhost-key.pem");
    std::fs::write(&cert_path, cert.pem()).unwrap();
    std::fs::write(&key_path, key_pair.serialize_pem()).unwrap();

    let mut config = ServerConfig::default();
    config.tls.cert_path = cert_path.to_string_lossy().into_owned();
    config.tls.key_path = key_path.to_string_lossy().into_owned();
    config.origins.bind_host = "127.0.0.1".into();
    config.origins.a_port = 0;
    config.origins.b_port = 0;
    config.origins.c_port = 0;

    Fixture {
        _dir: dir,
        config,
        cert: cert.der().clone(),
    }
}

/// One HTTP/1.1 GET over TLS, returning the raw response.
async fn fetch_tls(
    addr: SocketAddr,
    cert: &CertificateDer<'static>,
    path: &str,
    referer: Option<&str>,
) -> String {
    let mut roots = rustls::RootCertStore::empty();
    roots.add(cert.clone()).unwrap();
    let client = rustls::ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();
    let connector = TlsConnector::from(Arc::new(client));

    let tcp = TcpStream::connect(addr).await.unwrap();
    let domain = ServerName::try_from("localhost").unwrap();
    let mut stream = connector.connect(domain, tcp).await.unwrap();

    let mut request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n", path);
    if let Some(referer) = referer {
        request.push_str(&format!("Referer: {}\r\n", referer));
    }
    request.push_str("\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    // A peer closing without close_notify still leaves the bytes read so far.
    let _ = stream.read_to_end(&mut response).await;
    String::from_utf8_lossy(&response).into_owned()
}

#[tokio::test]
async fn test_tls_origins_serve_and_stop() {
    let fixture = fixture();
    let servers = lifecycle::prepare(&fixture.config).await.unwrap();

    let origins: Vec<_> = servers.iter().map(|s| s.origin()).collect();
    assert_eq!(origins, vec![Origin::A, Origin::B, Origin::C]);
    let addr_a = servers[0].local_addr().unwrap();
    let addr_b = servers[1].local_addr().unwrap();

    let shutdown = Shutdown::new();
    let mut tasks = JoinSet::new();
    for server in servers {
        tasks.spawn(server.run(shutdown.subscribe()));
    }

    let response = fetch_tls(addr_a, &fixture.cert, "/same-origin?referrerPolicy=origin", None).await;
    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
    assert!(response.contains("<meta name=\"referrer\" content=\"origin\">"));
    assert!(response.contains("window.open(\"https://0.0.0.0:4020\", \"_self\");"));

    let response = fetch_tls(addr_b, &fixture.cert, "/", Some("https://0.0.0.0:4020/")).await;
    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
    assert!(response.contains("<dd>https://0.0.0.0:4020/</dd>"));

    shutdown.trigger();
    let stopped = tokio::time::timeout(Duration::from_secs(10), supervise(tasks, &shutdown))
        .await
        .expect("origins did not stop");
    assert!(stopped.is_ok());
}

#[tokio::test]
async fn test_certificate_file_holding_only_a_key_is_rejected() {
    let mut fixture = fixture();
    fixture.config.tls.cert_path = fixture.config.tls.key_path.clone();

    let err = lifecycle::prepare(&fixture.config).await.err().unwrap();
    assert!(matches!(
        err,
        lifecycle::RunError::Tls(referrer_origins::net::TlsError::NoCertificate(_))
    ));
}
