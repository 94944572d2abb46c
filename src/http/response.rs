//! Upstream response → client response.
//!
//! # Responsibilities
//! - Carry status code, reason phrase and body through unchanged
//! - Strip hop-by-hop headers before hyper re-frames the response
//! - Overwrite CORS headers
//!
//! # Design Decisions
//! - The body is streamed, never buffered
//! - A non-canonical reason phrase survives via `hyper::ext::ReasonPhrase`

use axum::{body::Body, response::Response};
use hyper::ext::ReasonPhrase;

use crate::http::cors::CorsHeaders;
use crate::security::headers::strip_hop_by_hop;

/// Convert an upstream response into the response sent to the client.
pub fn relay_response(upstream: reqwest::Response, cors: &CorsHeaders) -> Response {
    let status = upstream.status();
    let reason = upstream.extensions().get::<ReasonPhrase>().cloned();
    let mut headers = upstream.headers().clone();

    strip_hop_by_hop(&mut headers);
    cors.apply(&mut headers);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    if let Some(reason) = reason {
        response.extensions_mut().insert(reason);
    }
    response
}
