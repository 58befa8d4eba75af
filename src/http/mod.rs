//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer stack)
//!     → request.rs (assign / propagate x-request-id)
//!     → middleware/request_logger.rs (log method + path, then status)
//!     → timeout + body limit
//!     → users::handlers / health.rs
//!     → Send to client
//! ```

pub mod health;
pub mod middleware;
pub mod request;
pub mod server;

pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
