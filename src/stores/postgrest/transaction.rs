//! Implements a transaction store backed by the PostgREST storage service.

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    Error,
    config::AppConfig,
    stores::{
        TransactionStore,
        postgrest::client::{Postgrest, Query},
    },
};

/// The table holding the transaction rows.
const TABLE: &str = "transactions";

/// The columns requested by the enriched listing: every transaction column
/// plus `{id, name}` sub-objects resolved from the foreign-key columns. The
/// `users` table exposes `username` instead of `name`.
const ENRICHED_COLUMNS: &str = "*, account_id:accounts(id, name), customer_id:customers(id, name), segment_id:segments(id, name), supplier_id:suppliers(id, name), created_by_user_id:users(id, username)";

/// Stores transactions in the PostgREST storage service.
///
/// Each operation is a single HTTP request; the service's own retry and
/// timeout behaviour is relied on, none is added here.
#[derive(Debug, Clone)]
pub struct PostgrestTransactionStore {
    client: Postgrest,
}

impl PostgrestTransactionStore {
    /// Create a store for the storage service configured in `config`.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Postgrest::new(config),
        }
    }

    fn get_query(&self, id: &str) -> Query {
        self.client.from(TABLE).select("*").eq("id", id)
    }

    fn get_all_query(&self) -> Query {
        self.client.from(TABLE).select(ENRICHED_COLUMNS)
    }

    fn create_query(&self, transaction: Value) -> Query {
        self.client.from(TABLE).insert(transaction)
    }

    fn update_query(&self, id: &str, transaction: Value) -> Query {
        self.client.from(TABLE).update(transaction).eq("id", id)
    }

    fn delete_query(&self, id: &str) -> Query {
        self.client.from(TABLE).delete().eq("id", id)
    }
}

#[async_trait]
impl TransactionStore for PostgrestTransactionStore {
    /// Retrieve the rows whose id equals `id`, all columns.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the storage service rejects the query,
    /// or an [Error::Connection] if it cannot be reached.
    async fn get(&self, id: &str) -> Result<Vec<Value>, Error> {
        self.get_query(id).execute().await
    }

    /// Retrieve every row with the foreign-key columns expanded.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the storage service rejects the query,
    /// or an [Error::Connection] if it cannot be reached.
    async fn get_all(&self) -> Result<Vec<Value>, Error> {
        self.get_all_query().execute().await
    }

    /// Insert one row; the storage service assigns the id.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the row violates a constraint, or an
    /// [Error::Connection] if the service cannot be reached.
    async fn create(&self, transaction: Value) -> Result<(), Error> {
        self.create_query(transaction).execute().await?;

        Ok(())
    }

    /// Replace the row whose id equals `id` with `transaction`.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the replacement violates a constraint,
    /// or an [Error::Connection] if the service cannot be reached.
    async fn update(&self, id: &str, transaction: Value) -> Result<(), Error> {
        self.update_query(id, transaction).execute().await?;

        Ok(())
    }

    /// Remove the row whose id equals `id`.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the storage service rejects the
    /// deletion, or an [Error::Connection] if it cannot be reached.
    async fn delete(&self, id: &str) -> Result<(), Error> {
        self.delete_query(id).execute().await?;

        Ok(())
    }
}
