//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup
//!     → tls.rs (read certificate + key once, build RustlsConfig)
//!     → shared by Origin A and Origin B listeners
//!     → Origin C listens in plain HTTP
//! ```

pub mod tls;

pub use tls::{load_tls_config, TlsError};
