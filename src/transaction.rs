//! The transaction endpoint: routes each request to one of the five storage
//! operations and shapes the result into a JSON response.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::{
    Error,
    response::{json_response, preflight_response},
    state::AppState,
    stores::TransactionStore,
};

/// A route handler for the transaction collection: list and create, plus the
/// method fallback.
pub async fn collection_endpoint<T>(
    State(state): State<AppState<T>>,
    method: Method,
    body: Bytes,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync,
{
    dispatch(&state, method, None, &body).await
}

/// A route handler for a single transaction: read, replace, and delete, plus
/// the method fallback.
pub async fn resource_endpoint<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    method: Method,
    body: Bytes,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync,
{
    dispatch(&state, method, Some(id), &body).await
}

/// Route a request to the operation selected by its method and optional path
/// id, converting any failure into the uniform error response.
async fn dispatch<T>(
    state: &AppState<T>,
    method: Method,
    id: Option<String>,
    body: &[u8],
) -> Response
where
    T: TransactionStore + Send + Sync,
{
    if method == Method::OPTIONS {
        return preflight_response();
    }

    match route_request(state, method, id, body).await {
        Ok(response) => response,
        Err(error) => {
            tracing::error!("transaction request failed: {error}");
            error.into_response()
        }
    }
}

/// Select and run one of the five storage operations.
///
/// Combinations that match none of the five operations (a `POST` with an id
/// among them) fall through to the full listing instead of an error; existing
/// clients rely on that behaviour.
async fn route_request<T>(
    state: &AppState<T>,
    method: Method,
    id: Option<String>,
    body: &[u8],
) -> Result<Response, Error>
where
    T: TransactionStore + Send + Sync,
{
    // The body is read for POST and PUT before routing, so a malformed body
    // fails the request even when the method and id combination would fall
    // through to the listing.
    let transaction = if method == Method::POST || method == Method::PUT {
        parse_body(body)?
    } else {
        Value::Null
    };

    let store = &state.transaction_store;

    match (id, method) {
        (Some(id), method) if method == Method::GET => get_transaction(store, &id).await,
        (Some(id), method) if method == Method::PUT => {
            update_transaction(store, &id, transaction).await
        }
        (Some(id), method) if method == Method::DELETE => delete_transaction(store, &id).await,
        (None, method) if method == Method::POST => create_transaction(store, transaction).await,
        _ => get_all_transactions(store).await,
    }
}

/// Parse a request body as JSON.
///
/// No field or type checks happen here; anything beyond structural JSON
/// parsing is the storage service's job.
fn parse_body(body: &[u8]) -> Result<Value, Error> {
    serde_json::from_slice(body).map_err(|error| Error::InvalidBody(error.to_string()))
}

/// Retrieve a transaction by its `id`, answering a JSON array of zero or one
/// rows. A miss is a 200 with an empty array, not a 404.
async fn get_transaction<T>(store: &T, id: &str) -> Result<Response, Error>
where
    T: TransactionStore + Send + Sync,
{
    let rows = store.get(id).await?;

    Ok(json_response(StatusCode::OK, &rows))
}

/// Retrieve every transaction with the foreign-key columns expanded into
/// embedded sub-objects.
async fn get_all_transactions<T>(store: &T) -> Result<Response, Error>
where
    T: TransactionStore + Send + Sync,
{
    let rows = store.get_all().await?;

    Ok(json_response(StatusCode::OK, &rows))
}

/// Insert a new transaction; the storage service assigns the row id.
async fn create_transaction<T>(store: &T, transaction: Value) -> Result<Response, Error>
where
    T: TransactionStore + Send + Sync,
{
    store.create(transaction).await?;

    Ok(json_response(
        StatusCode::OK,
        &json!({ "success": true, "message": "transaction created successfully" }),
    ))
}

/// Replace the transaction matching `id` with the submitted fields.
///
/// The response echoes the submitted body; the row is not re-read after the
/// replacement.
async fn update_transaction<T>(store: &T, id: &str, transaction: Value) -> Result<Response, Error>
where
    T: TransactionStore + Send + Sync,
{
    store.update(id, transaction.clone()).await?;

    Ok(json_response(
        StatusCode::OK,
        &json!({ "transaction": transaction }),
    ))
}

/// Delete the transaction matching `id`.
async fn delete_transaction<T>(store: &T, id: &str) -> Result<Response, Error>
where
    T: TransactionStore + Send + Sync,
{
    store.delete(id).await?;

    Ok(json_response(
        StatusCode::OK,
        &json!({ "success": true, "message": "transaction deleted successfully" }),
    ))
}
