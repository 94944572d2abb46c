//! Relay-level failures and their HTTP rendering.
//!
//! Upstream non-2xx responses are not errors here; they are relayed as-is.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// A failure that ends a relayed request before an upstream response exists.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The `url` query parameter is absent or empty.
    #[error("Missing \"url\" query parameter")]
    MissingTarget,

    /// The outbound fetch failed. `target` is the literal `url` parameter.
    #[error("Error fetching {target}: {message}")]
    Fetch { target: String, message: String },
}

impl RelayError {
    /// Build a fetch failure, flattening the source chain into one message.
    pub fn fetch(target: impl Into<String>, err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        RelayError::Fetch {
            target: target.into(),
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingTarget => StatusCode::BAD_REQUEST,
            RelayError::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
