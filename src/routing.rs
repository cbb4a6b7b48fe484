//! Gateway router configuration.

use axum::{
    Router,
    http::{Method, StatusCode},
    response::Response,
    routing::any,
};
use serde_json::json;

use crate::{
    endpoints,
    response::{json_response, preflight_response},
    state::AppState,
    stores::TransactionStore,
    transaction::{collection_endpoint, resource_endpoint},
};

/// Return a router with the gateway's routes.
///
/// Both transaction routes accept any method: the endpoint decides what to do
/// from the method and the presence of an id, including answering CORS
/// preflights itself.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::TRANSACTIONS, any(collection_endpoint::<T>))
        .route(endpoints::TRANSACTION, any(resource_endpoint::<T>))
        .fallback(fallback)
        .with_state(state)
}

/// Answer requests outside the transaction routes.
///
/// CORS preflights are accepted for any path; everything else is a 404.
async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return preflight_response();
    }

    json_response(StatusCode::NOT_FOUND, &json!({ "error": "not found" }))
}

#[cfg(test)]
mod fallback_route_tests {
    use axum::http::{Method, StatusCode};
    use axum_test::TestServer;
    use serde_json::Value;

    use async_trait::async_trait;

    use crate::{AppState, Error, stores::TransactionStore};

    use super::build_router;

    /// The fallback never reaches the store, so every operation can bail.
    #[derive(Debug, Clone)]
    struct UnreachableTransactionStore;

    #[async_trait]
    impl TransactionStore for UnreachableTransactionStore {
        async fn get(&self, _id: &str) -> Result<Vec<Value>, Error> {
            unreachable!("the fallback must not read from the store")
        }

        async fn get_all(&self) -> Result<Vec<Value>, Error> {
            unreachable!("the fallback must not read from the store")
        }

        async fn create(&self, _transaction: Value) -> Result<(), Error> {
            unreachable!("the fallback must not write to the store")
        }

        async fn update(&self, _id: &str, _transaction: Value) -> Result<(), Error> {
            unreachable!("the fallback must not write to the store")
        }

        async fn delete(&self, _id: &str) -> Result<(), Error> {
            unreachable!("the fallback must not write to the store")
        }
    }

    fn test_server() -> TestServer {
        let app = build_router(AppState::new(UnreachableTransactionStore));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn preflights_are_accepted_on_any_path() {
        let server = test_server();

        let response = server.method(Method::OPTIONS, "/somewhere/else").await;

        response.assert_status_ok();
        assert_eq!(response.text(), "ok");
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let server = test_server();

        let response = server.get("/accounts").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }
}
