//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Read TLS material → Bind all three listeners → Serve concurrently
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → every origin drains and stops
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and no origin serves
//! - Listeners are all bound before any of them serves
//! - One origin failing stops the process

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{prepare, run, RunError};
