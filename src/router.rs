//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. Register a path, get a
//! handler. Application state is handed to every handler by value.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{cors, trace};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup with the shared state, then pass it to
/// [`Server::serve`](crate::Server::serve). Each [`Router::on`] call returns
/// `self` so registrations chain naturally.
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: S,
}

/// Outcome of matching a method + path against the routing table.
enum Route<S> {
    Found(BoxedHandler<S>, HashMap<String, String>),
    MethodNotAllowed,
    NotFound,
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(state: S) -> Self {
        Self { routes: HashMap::new(), state }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax — `req.param("name")` retrieves them:
    ///
    /// ```rust,no_run
    /// # use tourbook::{Method, Request, Response, Router};
    /// # async fn list(_: Request, _: ()) -> Response { Response::text("") }
    /// # async fn get(_: Request, _: ()) -> Response { Response::text("") }
    /// Router::new(())
    ///     .on(Method::Get, "/tours",      list)
    ///     .on(Method::Get, "/tours/{id}", get);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Routes are fixed at startup.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Routes one request and produces one response.
    ///
    /// CORS preflight is answered before routing; every response leaves
    /// through the CORS and trace middleware.
    pub async fn dispatch(&self, parts: &http::request::Parts) -> Response {
        let started = Instant::now();

        let response = if cors::is_preflight(parts) {
            cors::preflight(parts)
        } else {
            self.route(parts).await
        };
        let response = cors::decorate(response);

        trace::record(parts, &response, started.elapsed());
        response
    }

    async fn route(&self, parts: &http::request::Parts) -> Response {
        let Ok(method) = Method::try_from(&parts.method) else {
            return Response::status(Status::MethodNotAllowed);
        };

        match self.lookup(method, normalize(parts.uri.path())) {
            Route::Found(handler, params) => {
                handler.call(Request::new(method, parts, params), self.state.clone()).await
            }
            Route::MethodNotAllowed => Response::status(Status::MethodNotAllowed),
            Route::NotFound => Response::status(Status::NotFound),
        }
    }

    fn lookup(&self, method: Method, path: &str) -> Route<S> {
        let tree = match (self.routes.get(&method), method) {
            (None, Method::Head) => self.routes.get(&Method::Get),
            (tree, _) => tree,
        };

        if let Some(matched) = tree.and_then(|t| t.at(path).ok()) {
            let handler = Arc::clone(matched.value);
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            return Route::Found(handler, params);
        }

        if self.routes.values().any(|t| t.at(path).is_ok()) {
            Route::MethodNotAllowed
        } else {
            Route::NotFound
        }
    }
}

/// Drops a single trailing slash so `/tours/` routes like `/tours`.
fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}
