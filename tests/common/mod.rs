//! Shared utilities for the origin integration tests.

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use referrer_origins::config::ServerConfig;
use referrer_origins::http::build_router;
use referrer_origins::origins::{Origin, PageState};

/// Router for `origin` with default configuration.
pub fn app(origin: Origin) -> Router {
    app_with(origin, &ServerConfig::default())
}

/// Router for `origin` with a custom configuration.
pub fn app_with(origin: Origin, config: &ServerConfig) -> Router {
    build_router(origin, PageState::from_config(config))
}

/// A response reduced to what the tests look at.
pub struct Page {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Issue a GET through the router without a network listener.
pub async fn get(app: Router, uri: &str, referer: Option<&str>) -> Page {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(referer) = referer {
        request = request.header(header::REFERER, referer);
    }
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();

    Page {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
