//! Request/response logging middleware.
//!
//! Logs the method and path of every request before it is forwarded and the
//! response status once the inner service produces one. The request, the
//! response and any panic raised downstream pass through untouched.
//!
//! If the inner future never yields a response (the handler panicked, or
//! the connection went away and the future was dropped) an in-flight guard
//! logs the outcome on drop, so every logged request has a matching
//! completion line.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::observability::metrics;

/// Pass-through logging middleware. Install with `axum::middleware::from_fn`.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    tracing::info!(method = %method, path = %path, "Request");

    let mut in_flight = InFlight::new(method, path);
    let response = next.run(request).await;
    in_flight.finish(response.status());
    response
}

/// Tracks a request between forwarding and completion.
struct InFlight {
    method: Method,
    path: String,
    started: Instant,
    finished: bool,
}

impl InFlight {
    fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            started: Instant::now(),
            finished: false,
        }
    }

    fn finish(&mut self, status: StatusCode) {
        self.finished = true;
        tracing::info!(
            method = %self.method,
            path = %self.path,
            status = status.as_u16(),
            elapsed_ms = self.started.elapsed().as_millis() as u64,
            "Response status"
        );
        metrics::record_request(self.method.as_str(), status.as_u16(), self.started);
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        if std::thread::panicking() {
            tracing::error!(
                method = %self.method,
                path = %self.path,
                elapsed_ms,
                "Handler panicked before producing a response"
            );
        } else {
            tracing::warn!(
                method = %self.method,
                path = %self.path,
                elapsed_ms,
                "Request dropped before producing a response"
            );
        }
    }
}
