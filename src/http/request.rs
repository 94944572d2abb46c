//! Inbound request inspection and outbound request preparation.
//!
//! # Responsibilities
//! - Extract the target URL from the `url` query parameter
//! - Rewrite headers for the upstream leg (drop `Host`, force `User-Agent`)
//! - Decide whether the method carries a body
//!
//! # Design Decisions
//! - The first `url` occurrence wins; an empty value counts as missing
//! - The target is not vetted beyond being an absolute URL

use axum::http::{
    header::{self, HeaderMap, HeaderValue},
    Method, Uri,
};

use crate::security::headers::{strip_body_framing, strip_hop_by_hop};

/// Query parameter carrying the target URL.
pub const TARGET_PARAM: &str = "url";

/// Return the decoded `url` query parameter, if present and non-empty.
pub fn target_from_uri(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TARGET_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Whether a request with this method forwards its body.
pub fn forwards_body(method: &Method) -> bool {
    *method != Method::GET && *method != Method::HEAD
}

/// Build the upstream header set from the inbound headers.
pub fn outbound_headers(
    inbound: &HeaderMap,
    user_agent: &HeaderValue,
    with_body: bool,
) -> HeaderMap {
    let mut headers = inbound.clone();
    headers.remove(header::HOST);
    strip_hop_by_hop(&mut headers);
    if !with_body {
        strip_body_framing(&mut headers);
    }
    headers.insert(header::USER_AGENT, user_agent.clone());
    headers
}
