//! Implements a struct that holds the state of the gateway.

use crate::stores::TransactionStore;

/// The state of the gateway.
///
/// Generic over the store so tests can substitute an in-memory stub for the
/// storage service through the same seam production code uses.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The store the five transaction operations are delegated to.
    pub transaction_store: T,
}

impl<T> AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState] around `transaction_store`.
    pub fn new(transaction_store: T) -> Self {
        Self { transaction_store }
    }
}
