//! Per-request structured logging.

use std::time::Duration;

use tracing::{info, warn};

use crate::response::Response;

/// Emits one event per completed request. Server errors log at `warn`.
pub fn record(parts: &http::request::Parts, response: &Response, elapsed: Duration) {
    let status = response.status_code();
    let latency_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);

    if status >= 500 {
        warn!(method = %parts.method, path = %parts.uri.path(), status, latency_us, "request failed");
    } else {
        info!(method = %parts.method, path = %parts.uri.path(), status, latency_us, "request");
    }
}
