//! Observability subsystem.
//!
//! Structured `tracing` events from every module, collected by the
//! subscriber installed in `logging.rs`. Each request runs inside a span
//! carrying a UUID request ID (see `http::server`).

pub mod logging;

pub use logging::init_logging;
