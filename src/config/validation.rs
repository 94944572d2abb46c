//! Configuration validation.
//!
//! Serde handles syntax; this module checks values that would otherwise fail
//! at request time (header values) or at bind time (addresses). All errors
//! are collected, not just the first.

use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::config::schema::RelayConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("upstream.user_agent must not be empty")]
    EmptyUserAgent,

    #[error("{field} {value:?} is not a valid header value")]
    HeaderValue { field: &'static str, value: String },
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.upstream.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    let header_fields = [
        ("upstream.user_agent", &config.upstream.user_agent),
        ("cors.allow_origin", &config.cors.allow_origin),
        ("cors.allow_methods", &config.cors.allow_methods),
        ("cors.allow_headers", &config.cors.allow_headers),
        ("cors.expose_headers", &config.cors.expose_headers),
    ];
    for (field, value) in header_fields {
        if HeaderValue::from_str(value).is_err() {
            errors.push(ValidationError::HeaderValue {
                field,
                value: value.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
