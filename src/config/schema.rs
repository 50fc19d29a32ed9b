//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the three
//! origins. All types derive Serde traits for deserialization from config
//! files, and every default reproduces the fixed demo layout
//! (A on https:4020, B on https:4021, C on http:4022).

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Certificate and key shared by the TLS origins.
    pub tls: TlsConfig,

    /// Hosts and ports of the three origins.
    pub origins: OriginsConfig,

    /// Page rendering settings.
    pub pages: PagesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// TLS material for Origins A and B.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            cert_path: "0.0.0.0.pem".to_string(),
            key_path: "0.0.0.0-key.pem".to_string(),
        }
    }
}

/// Listener layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OriginsConfig {
    /// Address every listener binds to.
    pub bind_host: String,

    /// Host written into navigation targets and back links.
    pub public_host: String,

    /// Origin A (TLS).
    pub a_port: u16,

    /// Origin B (TLS).
    pub b_port: u16,

    /// Origin C (plain HTTP).
    pub c_port: u16,
}

impl Default for OriginsConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            public_host: "0.0.0.0".to_string(),
            a_port: 4020,
            b_port: 4021,
            c_port: 4022,
        }
    }
}

/// Page rendering settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Delay before an interstitial page navigates away, in milliseconds.
    pub redirect_delay_ms: u64,

    /// HTML-escape the echoed `Referer` header instead of emitting it verbatim.
    pub escape_referer: bool,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: 1_000,
            escape_referer: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
