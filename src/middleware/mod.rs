//! Middleware layer.
//!
//! Cross-cutting concerns applied by [`Router::dispatch`](crate::Router::dispatch)
//! around every request, in this order:
//!
//! 1. [`cors`] answers preflight requests and stamps the allow-origin header
//!    on every response.
//! 2. [`trace`] emits one structured event per request with method, path,
//!    status, and latency.

pub mod cors;
pub mod trace;
