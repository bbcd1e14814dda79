//! `/tours` endpoints.

use std::sync::Arc;

use tracing::debug;

use crate::health;
use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::status::Status;
use crate::tours::pipeline;
use crate::tours::query::{TourQuery, parse_leading_int};
use crate::tours::store::TourStore;

pub const NOT_FOUND_BODY: &str = "Tour not found";

/// The full application: tour endpoints plus health probes.
pub fn router(store: Arc<TourStore>) -> Router<Arc<TourStore>> {
    Router::new(store)
        .on(Method::Get, "/tours",      list_tours)
        .on(Method::Get, "/tours/{id}", get_tour)
        .on(Method::Get, "/healthz",    health::liveness)
        .on(Method::Get, "/readyz",     health::readiness)
}

// GET /tours?country=&region=&minPrice=&maxPrice=&sortBy=&page=&pageSize=
async fn list_tours(req: Request, store: Arc<TourStore>) -> Response {
    let query = TourQuery::from_params(req.query_map());
    let page = pipeline::run(store.all(), &query);
    debug!(?query, returned = page.tours.len(), total_pages = page.total_pages, "listed tours");
    Json(page).into_response()
}

// GET /tours/{id}
//
// Only the id's leading integer counts, so `2abc` is tour 2. An id with no
// leading digits cannot match any tour and takes the same 404 path.
async fn get_tour(req: Request, store: Arc<TourStore>) -> Response {
    let tour = req.param("id")
        .and_then(parse_leading_int)
        .and_then(|id| store.find_by_id(id));

    match tour {
        Some(tour) => Json(tour).into_response(),
        None => Response::builder().status(Status::NotFound).text(NOT_FOUND_BODY),
    }
}
