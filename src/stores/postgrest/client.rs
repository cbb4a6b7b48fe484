//! A minimal client for the storage service's REST interface.
//!
//! Requests are composed with the same fluent vocabulary the storage
//! service's own client libraries use (`from`, `select`, `eq`, `insert`,
//! `update`, `delete`) and resolve to raw JSON rows. Request construction is
//! kept separate from transmission so the exact request shape can be checked
//! without a live service.

use reqwest::{Method, header::AUTHORIZATION};
use serde_json::Value;

use crate::{Error, config::AppConfig};

/// A client scoped to one storage service endpoint and access key.
#[derive(Debug, Clone)]
pub struct Postgrest {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl Postgrest {
    /// Create a client for the endpoint and access key in `config`.
    ///
    /// An empty endpoint or key is accepted: the storage service rejects the
    /// first request instead of the gateway failing at start-up.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.storage_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Start a query against `table`.
    pub fn from(&self, table: &str) -> Query {
        Query {
            client: self.clone(),
            table: table.to_owned(),
            method: Method::GET,
            params: Vec::new(),
            payload: None,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

/// A single request against one table, built fluently and sent with
/// [Query::execute].
#[derive(Debug)]
pub struct Query {
    pub(crate) client: Postgrest,
    pub(crate) table: String,
    pub(crate) method: Method,
    pub(crate) params: Vec<(String, String)>,
    pub(crate) payload: Option<Value>,
}

impl Query {
    /// Request `columns` from the table.
    pub fn select(mut self, columns: &str) -> Self {
        self.method = Method::GET;
        self.params.push(("select".to_owned(), columns.to_owned()));
        self
    }

    /// Filter to rows where `column` equals `value`.
    ///
    /// `value` is forwarded verbatim; the storage service applies its own
    /// type coercion.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_owned(), format!("eq.{value}")));
        self
    }

    /// Insert `row` into the table.
    pub fn insert(mut self, row: Value) -> Self {
        self.method = Method::POST;
        self.payload = Some(row);
        self
    }

    /// Replace matching rows with `row`.
    pub fn update(mut self, row: Value) -> Self {
        self.method = Method::PATCH;
        self.payload = Some(row);
        self
    }

    /// Delete matching rows.
    pub fn delete(mut self) -> Self {
        self.method = Method::DELETE;
        self
    }

    /// Send the request and resolve it to the returned rows.
    ///
    /// Mutations answer with an empty body, which resolves to no rows.
    ///
    /// # Errors
    /// Returns [Error::Storage] when the storage service rejects the request
    /// and [Error::Connection] when the service cannot be reached or its
    /// response cannot be read.
    pub async fn execute(self) -> Result<Vec<Value>, Error> {
        let url = self.client.table_url(&self.table);

        let request = self
            .client
            .http
            .request(self.method, url)
            .query(&self.params)
            .header("apikey", &self.client.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.client.anon_key));

        let request = match &self.payload {
            Some(payload) => request.json(payload),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Storage(error_message(&body)));
        }

        parse_rows(&body)
    }
}

/// Extract the storage service's description of a failure from an error
/// response body.
///
/// The service reports failures as JSON objects with a `message` field;
/// anything else is passed through raw.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|error| {
            error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.to_owned())
}

/// Parse a success response body into rows.
///
/// Empty bodies parse to no rows; a single JSON object is treated as a
/// one-row result.
fn parse_rows(body: &str) -> Result<Vec<Value>, Error> {
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let rows = serde_json::from_str(body)
        .map_err(|error| Error::Connection(format!("unreadable storage response: {error}")))?;

    match rows {
        Value::Array(rows) => Ok(rows),
        row => Ok(vec![row]),
    }
}

#[cfg(test)]
mod client_tests {
    use reqwest::Method;
    use serde_json::json;

    use crate::{AppConfig, Error};

    use super::{Postgrest, error_message, parse_rows};

    fn test_client() -> Postgrest {
        Postgrest::new(&AppConfig::new("http://localhost:54321", "anon-key"))
    }

    #[test]
    fn select_requests_columns_with_get() {
        let query = test_client().from("transactions").select("*");

        assert_eq!(query.method, Method::GET);
        assert_eq!(query.params, vec![("select".to_owned(), "*".to_owned())]);
    }

    #[test]
    fn eq_appends_an_equality_filter() {
        let query = test_client().from("transactions").select("*").eq("id", "5");

        assert_eq!(
            query.params,
            vec![
                ("select".to_owned(), "*".to_owned()),
                ("id".to_owned(), "eq.5".to_owned()),
            ]
        );
    }

    #[test]
    fn insert_attaches_the_row_payload() {
        let row = json!({"description": "chairs"});
        let query = test_client().from("transactions").insert(row.clone());

        assert_eq!(query.method, Method::POST);
        assert_eq!(query.payload, Some(row));
    }

    #[test]
    fn update_patches_matching_rows() {
        let row = json!({"debit": 12.5});
        let query = test_client()
            .from("transactions")
            .update(row.clone())
            .eq("id", "7");

        assert_eq!(query.method, Method::PATCH);
        assert_eq!(query.payload, Some(row));
        assert_eq!(query.params, vec![("id".to_owned(), "eq.7".to_owned())]);
    }

    #[test]
    fn delete_sends_no_payload() {
        let query = test_client().from("transactions").delete().eq("id", "7");

        assert_eq!(query.method, Method::DELETE);
        assert_eq!(query.payload, None);
    }

    #[test]
    fn table_url_joins_the_rest_path() {
        let query = test_client().from("transactions");

        assert_eq!(
            query.client.table_url(&query.table),
            "http://localhost:54321/rest/v1/transactions"
        );
    }

    #[test]
    fn error_message_prefers_the_message_field() {
        let body = r#"{"code":"23503","message":"violates foreign key constraint"}"#;

        assert_eq!(error_message(body), "violates foreign key constraint");
    }

    #[test]
    fn error_message_falls_back_to_the_raw_body() {
        assert_eq!(error_message("upstream timed out"), "upstream timed out");
    }

    #[test]
    fn empty_bodies_resolve_to_no_rows() {
        assert_eq!(parse_rows("").unwrap(), Vec::<serde_json::Value>::new());
    }

    #[test]
    fn array_bodies_resolve_to_rows() {
        let rows = parse_rows(r#"[{"id":1},{"id":2}]"#).unwrap();

        assert_eq!(rows, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn a_single_object_is_one_row() {
        assert_eq!(parse_rows(r#"{"id":1}"#).unwrap(), vec![json!({"id": 1})]);
    }

    #[test]
    fn garbage_bodies_are_connection_errors() {
        let error = parse_rows("<html>bad gateway</html>").unwrap_err();

        assert!(matches!(error, Error::Connection(_)));
    }
}
