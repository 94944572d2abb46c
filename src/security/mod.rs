//! Header hygiene for relayed traffic.
//!
//! # Data Flow
//! ```text
//! Inbound request headers
//!     → headers.rs (strip hop-by-hop, drop framing for bodiless methods)
//!     → forwarded upstream
//!
//! Upstream response headers
//!     → headers.rs (strip hop-by-hop)
//!     → CORS headers applied, sent to client
//! ```

pub mod headers;
