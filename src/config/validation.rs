//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (ports non-zero and distinct)
//! - Reject hosts that would break the generated markup
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::ServerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.tls.cert_path.trim().is_empty() {
        errors.push(ValidationError::new("tls.cert_path", "must not be empty"));
    }
    if config.tls.key_path.trim().is_empty() {
        errors.push(ValidationError::new("tls.key_path", "must not be empty"));
    }

    let origins = &config.origins;
    validate_host("origins.bind_host", &origins.bind_host, &mut errors);
    validate_host("origins.public_host", &origins.public_host, &mut errors);

    let ports = [
        ("origins.a_port", origins.a_port),
        ("origins.b_port", origins.b_port),
        ("origins.c_port", origins.c_port),
    ];
    for (i, (field, port)) in ports.iter().enumerate() {
        if *port == 0 {
            errors.push(ValidationError::new(field, "must not be 0"));
            continue;
        }
        if let Some((other, _)) = ports[..i].iter().find(|(_, p)| p == port) {
            errors.push(ValidationError::new(
                field,
                format!("port {} already used by {}", port, other),
            ));
        }
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!(
                "unknown level {:?}, expected one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// Hosts end up inside href attributes and a JS string literal.
fn validate_host(field: &str, host: &str, errors: &mut Vec<ValidationError>) {
    if host.is_empty() {
        errors.push(ValidationError::new(field, "must not be empty"));
    } else if host
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '\\' | '/'))
    {
        errors.push(ValidationError::new(
            field,
            format!("{:?} contains characters not allowed in a host", host),
        ));
    }
}
