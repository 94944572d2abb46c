//! Header manipulation between the client and upstream legs.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers (RFC 9110 §7.6.1), including any the
//!   `Connection` header names
//! - Drop framing headers when a body is not forwarded
//!
//! # Design Decisions
//! - End-to-end headers are copied untouched, including duplicates
//! - Header names are matched case-insensitively via `HeaderName`

use axum::http::header::{self, HeaderMap, HeaderName};

/// Headers that only describe a single transport hop.
const HOP_BY_HOP: [&str; 7] = [
    "connection",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Remove hop-by-hop headers in place.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    for name in listed {
        headers.remove(name);
    }
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}

/// Remove headers that describe a body which is not being sent.
pub fn strip_body_framing(headers: &mut HeaderMap) {
    headers.remove(header::CONTENT_LENGTH);
    headers.remove(header::TRANSFER_ENCODING);
}
