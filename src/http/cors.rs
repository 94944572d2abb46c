//! Cross-origin header sets.
//!
//! Values are converted to `HeaderValue` once, when the relay is built, so
//! request handling never re-parses or fails on them.

use axum::{
    body::Body,
    http::{
        header::{self, HeaderMap, HeaderValue},
        StatusCode,
    },
    response::Response,
};

use crate::config::{validation::ValidationError, CorsConfig};

/// Pre-validated CORS header values.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
    expose_headers: HeaderValue,
    max_age: HeaderValue,
}

impl CorsHeaders {
    pub fn from_config(config: &CorsConfig) -> Result<Self, ValidationError> {
        let value = |field: &'static str, raw: &str| {
            HeaderValue::from_str(raw).map_err(|_| ValidationError::HeaderValue {
                field,
                value: raw.to_string(),
            })
        };

        Ok(Self {
            allow_origin: value("cors.allow_origin", &config.allow_origin)?,
            allow_methods: value("cors.allow_methods", &config.allow_methods)?,
            allow_headers: value("cors.allow_headers", &config.allow_headers)?,
            expose_headers: value("cors.expose_headers", &config.expose_headers)?,
            max_age: HeaderValue::from(config.max_age_secs),
        })
    }

    /// The response to a preflight (`OPTIONS`) request: 204, no body.
    pub fn preflight(&self) -> Response {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::NO_CONTENT;

        let headers = response.headers_mut();
        self.set_common(headers);
        headers.insert(header::ACCESS_CONTROL_MAX_AGE, self.max_age.clone());
        response
    }

    /// Overwrite the CORS headers on a relayed response.
    pub fn apply(&self, headers: &mut HeaderMap) {
        self.set_common(headers);
        headers.insert(header::ACCESS_CONTROL_EXPOSE_HEADERS, self.expose_headers.clone());
    }

    fn set_common(&self, headers: &mut HeaderMap) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
    }
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self {
            allow_origin: HeaderValue::from_static("*"),
            allow_methods: HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
            allow_headers: HeaderValue::from_static("*"),
            expose_headers: HeaderValue::from_static("*"),
            max_age: HeaderValue::from_static("86400"),
        }
    }
}
