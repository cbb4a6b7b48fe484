//! Defines the transaction store trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::Error;

/// Handles the persistence of transactions in the storage service.
///
/// Rows and request bodies are raw JSON values: the gateway shapes responses
/// around them but never interprets or validates their fields. Field and
/// constraint validation is the storage service's job.
#[async_trait]
pub trait TransactionStore {
    /// Retrieve the rows whose id equals `id`, all columns.
    ///
    /// An id that matches nothing yields an empty vector, not an error.
    async fn get(&self, id: &str) -> Result<Vec<Value>, Error>;

    /// Retrieve every row, with the foreign-key columns expanded into
    /// embedded `{id, name}` sub-objects (`{id, username}` for the creating
    /// user).
    async fn get_all(&self) -> Result<Vec<Value>, Error>;

    /// Insert one row. The storage service assigns the id.
    async fn create(&self, transaction: Value) -> Result<(), Error>;

    /// Replace the row whose id equals `id` with `transaction`.
    ///
    /// Full-replace semantics: fields omitted from `transaction` are cleared
    /// or defaulted by the storage service, not preserved from the old row.
    async fn update(&self, id: &str, transaction: Value) -> Result<(), Error>;

    /// Remove the row whose id equals `id`.
    async fn delete(&self, id: &str) -> Result<(), Error>;
}
