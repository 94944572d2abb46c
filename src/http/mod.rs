//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing span with request ID)
//!     → relay (method dispatch)
//!     → request.rs (target extraction, outbound header rewrite)
//!     → [upstream fetch]
//!     → response.rs (status/body passthrough) + cors.rs (CORS headers)
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod response;
pub mod server;

pub use cors::CorsHeaders;
pub use server::RelayServer;
