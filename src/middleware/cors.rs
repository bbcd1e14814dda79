//! Cross-origin resource sharing for all origins.
//!
//! Every response carries `access-control-allow-origin: *`. An `OPTIONS`
//! request is treated as a preflight and answered here without reaching the
//! router.

use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_REQUEST_HEADERS, VARY,
};

use crate::response::Response;
use crate::status::Status;

const ANY_ORIGIN: &str = "*";
const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

pub fn is_preflight(parts: &http::request::Parts) -> bool {
    parts.method == http::Method::OPTIONS
}

/// `204 No Content` preflight answer. Requested headers are reflected back.
pub fn preflight(parts: &http::request::Parts) -> Response {
    let mut builder = Response::builder()
        .status(Status::NoContent)
        .header(ACCESS_CONTROL_ALLOW_METHODS.as_str(), ALLOWED_METHODS);

    let requested = parts.headers
        .get(ACCESS_CONTROL_REQUEST_HEADERS)
        .and_then(|v| v.to_str().ok());
    if let Some(requested) = requested {
        builder = builder
            .header(ACCESS_CONTROL_ALLOW_HEADERS.as_str(), requested)
            .header(VARY.as_str(), ACCESS_CONTROL_REQUEST_HEADERS.as_str());
    }

    builder.no_body()
}

/// Adds the allow-origin header unless a handler already set one.
pub fn decorate(mut response: Response) -> Response {
    if response.header(ACCESS_CONTROL_ALLOW_ORIGIN.as_str()).is_none() {
        response.push_header(ACCESS_CONTROL_ALLOW_ORIGIN.as_str(), ANY_ORIGIN);
    }
    response
}
