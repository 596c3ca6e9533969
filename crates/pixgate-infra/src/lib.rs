//! Pixgate Infrastructure
//!
//! Tracing setup and shared HTTP middleware.

#[cfg(feature = "middleware")]
pub mod middleware;
pub mod telemetry;

#[cfg(feature = "middleware")]
pub use middleware::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use telemetry::{init_telemetry, shutdown_telemetry};
