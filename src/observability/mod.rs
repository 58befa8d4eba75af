//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers, store and middleware produce:
//!     → logging.rs (structured tracing events, fmt output)
//!     → metrics.rs (counters, histograms, gauges)
//!
//! Consumers:
//!     → stdout log stream
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through the per-request span
//! - Metric calls are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
