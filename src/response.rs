//! Shared response shaping.
//!
//! Every response the gateway produces, success, error, preflight, or
//! fallback, carries the same CORS headers so browser clients can call the
//! endpoint directly.

use axum::{
    Json,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Append the CORS headers the web client depends on.
pub fn apply_cors_headers(response: &mut Response) {
    let headers = response.headers_mut();
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("authorization, x-client-info, apikey"),
    );
}

/// Render `body` as a JSON response with `status` and the CORS headers.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let mut response = (status, Json(body)).into_response();
    apply_cors_headers(&mut response);

    response
}

/// The response to a CORS preflight request: 200 with the literal body
/// `"ok"` and no storage access.
pub fn preflight_response() -> Response {
    let mut response = (StatusCode::OK, "ok").into_response();
    apply_cors_headers(&mut response);

    response
}
