//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, TLS or plain transport)
//!     → request.rs (Referer header, referrerPolicy query)
//!     → origins::* handlers render HTML
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{Referer, RequestedPolicy};
pub use server::{build_router, OriginServer, ServeError, Transport};
