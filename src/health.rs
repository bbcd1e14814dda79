//! Kubernetes health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the pod serve traffic? Failure → pulled from load-balancer. |
//!
//! Both are generic over the router state so they can be registered on any
//! [`Router`](crate::Router).

use crate::{Request, Response};

/// Always `200 OK` with body `"ok"`.
pub async fn liveness<S>(_req: Request, _state: S) -> Response {
    Response::text("ok")
}

/// Always `200 OK` with body `"ready"`.
///
/// Tour data is loaded before the listener binds, so any process that can
/// answer this request is ready to serve it.
pub async fn readiness<S>(_req: Request, _state: S) -> Response {
    Response::text("ready")
}
