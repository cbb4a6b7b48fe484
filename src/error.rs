//! Defines the app level error type and its conversion to JSON error
//! responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::response::json_response;

/// The errors that may occur while resolving a transaction operation.
///
/// The taxonomy is deliberately small: every failure, whether caused by the
/// client or by the storage service, is surfaced to the caller as a 400
/// response with a `{"error": ...}` body. Not-found is not an error at all,
/// a read of a missing id answers 200 with an empty array.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The storage service rejected the operation.
    ///
    /// The message is the service's own description of the failure
    /// (constraint violation, authentication, and so on) and is passed
    /// through to the client unchanged.
    #[error("{0}")]
    Storage(String),

    /// The storage service could not be reached, or its response could not
    /// be read.
    #[error("storage request failed: {0}")]
    Connection(String),

    /// The request body could not be parsed as JSON.
    ///
    /// Only `POST` and `PUT` requests read the body, so this error only
    /// occurs for those methods.
    #[error("could not parse the request body as JSON: {0}")]
    InvalidBody(String),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Connection(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        json_response(
            StatusCode::BAD_REQUEST,
            &json!({ "error": self.to_string() }),
        )
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::Value;

    use super::Error;

    #[tokio::test]
    async fn errors_render_as_bad_request_with_a_message() {
        let response = Error::Storage("violates foreign key constraint".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body["error"], "violates foreign key constraint");
    }

    #[test]
    fn connection_errors_keep_the_underlying_description() {
        let error = Error::Connection("connection refused".to_owned());

        assert_eq!(
            error.to_string(),
            "storage request failed: connection refused"
        );
    }
}
