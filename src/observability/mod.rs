//! Observability subsystem.
//!
//! Structured logs via `tracing`; every origin router carries
//! `tower_http`'s `TraceLayer` so each request gets a span.

pub mod logging;

pub use logging::init_logging;
