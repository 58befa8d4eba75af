//! Request pipeline middleware.

pub mod request_logger;

pub use request_logger::log_requests;
