//! CORS relay library.
//!
//! Forwards any request to the URL given in its `url` query parameter and
//! returns the upstream response with permissive cross-origin headers.
//! Preflight (`OPTIONS`) requests are answered locally.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod security;

pub use config::RelayConfig;
pub use error::RelayError;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
pub use relay::Relay;
