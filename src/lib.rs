//! Referrer-Policy demonstration origins.
//!
//! Three tiny sites used to watch how browsers propagate the `Referer`
//! header across same-origin, cross-origin and HTTPS → HTTP navigations:
//!
//! ```text
//!   Origin A (https:4020)  form + interstitials ──┬─▶ Origin A (same origin)
//!                                                 ├─▶ Origin B (https:4021)
//!                                                 └─▶ Origin C (http:4022, downgrade)
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod origins;
pub mod pages;
pub mod policy;

pub use config::ServerConfig;
pub use http::OriginServer;
pub use lifecycle::Shutdown;
pub use policy::ReferrerPolicy;
