//! The request relay.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → OPTIONS?  → CorsHeaders::preflight (204, no I/O)
//!     → target_from_uri (missing → 400)
//!     → outbound_headers + body (GET/HEAD: none)
//!     → reqwest fetch, redirects followed (failure → 500)
//!     → relay_response (status, reason, body, headers + CORS)
//! ```
//!
//! # Design Decisions
//! - One upstream request per inbound request, no retries
//! - The relay holds only immutable state and is shared via Arc
//! - Dropping the handler future (client disconnect) abandons the fetch

use std::time::Duration;

use axum::{
    body::{Body, HttpBody},
    http::{HeaderValue, Method, Request},
    response::{IntoResponse, Response},
};
use reqwest::redirect::Policy;
use url::Url;

use crate::config::{validation::ValidationError, RelayConfig, UpstreamConfig};
use crate::error::RelayError;
use crate::http::cors::CorsHeaders;
use crate::http::request::{forwards_body, outbound_headers, target_from_uri};
use crate::http::response::relay_response;

/// Error raised while constructing a [`Relay`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Forwards requests to the URL named in their `url` query parameter.
pub struct Relay {
    client: reqwest::Client,
    user_agent: HeaderValue,
    cors: CorsHeaders,
}

impl Relay {
    pub fn from_config(config: &RelayConfig) -> Result<Self, BuildError> {
        let user_agent = HeaderValue::from_str(&config.upstream.user_agent).map_err(|_| {
            ValidationError::HeaderValue {
                field: "upstream.user_agent",
                value: config.upstream.user_agent.clone(),
            }
        })?;

        Ok(Self {
            client: build_client(&config.upstream)?,
            user_agent,
            cors: CorsHeaders::from_config(&config.cors)?,
        })
    }

    /// Handle one inbound request. Always yields a well-formed response.
    pub async fn handle(&self, request: Request<Body>) -> Response {
        if *request.method() == Method::OPTIONS {
            return self.cors.preflight();
        }

        let Some(target) = target_from_uri(request.uri()) else {
            tracing::warn!(uri = %request.uri(), "Request without target URL");
            return RelayError::MissingTarget.into_response();
        };

        match self.forward(request, &target).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(target_url = %target, error = %err, "Upstream fetch failed");
                err.into_response()
            }
        }
    }

    async fn forward(&self, request: Request<Body>, target: &str) -> Result<Response, RelayError> {
        let url = Url::parse(target).map_err(|e| RelayError::fetch(target, &e))?;

        let (parts, body) = request.into_parts();
        let with_body = forwards_body(&parts.method);
        let headers = outbound_headers(&parts.headers, &self.user_agent, with_body);

        tracing::debug!(method = %parts.method, target_url = %url, "Forwarding request");

        let mut outbound = self.client.request(parts.method, url).headers(headers);
        if with_body && !body.is_end_stream() {
            outbound = outbound.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }

        let upstream = outbound
            .send()
            .await
            .map_err(|e| RelayError::fetch(target, &e))?;

        tracing::debug!(target_url = %target, status = %upstream.status(), "Upstream responded");
        Ok(relay_response(upstream, &self.cors))
    }
}

fn build_client(config: &UpstreamConfig) -> Result<reqwest::Client, reqwest::Error> {
    let redirect = if config.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(config.max_redirects)
    };

    let mut builder = reqwest::Client::builder()
        .redirect(redirect)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .no_proxy();
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}
