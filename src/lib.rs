//! # tourbook
//!
//! A read-only HTTP API over a catalogue of tours loaded once from a JSON
//! file.
//!
//! ## Endpoints
//!
//! - `GET /tours` — filter (`country`, `region`, `minPrice` + `maxPrice`),
//!   sort (`sortBy=<field>,<asc|desc>`) and paginate (`page`, `pageSize`).
//!   Responds with `{"tours": [...], "totalPages": n}`.
//! - `GET /tours/{id}` — one tour, or `404 Tour not found`.
//! - `GET /healthz`, `GET /readyz` — Kubernetes probes.
//!
//! Every response allows cross-origin access from any origin.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tourbook::{Config, Server, TourStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tourbook::Error> {
//!     let config = Config::from_env();
//!     let store = Arc::new(TourStore::load(&config.data_path)?);
//!     Server::bind(config.listen_addr()).serve(tourbook::app(store)).await
//! }
//! ```
//!
//! ## Layout
//!
//! - [`tours`] — records, the store, the filter → sort → paginate pipeline.
//! - [`Router`], [`Server`], [`middleware`] — a thin layer over hyper:
//!   radix-tree routing via [`matchit`], CORS, request tracing, graceful
//!   shutdown.

mod config;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod health;
pub mod middleware;
pub mod tours;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::{Server, serve_listener};
pub use status::Status;
pub use tours::routes::router as app;
pub use tours::{Page, Tour, TourQuery, TourStore};
