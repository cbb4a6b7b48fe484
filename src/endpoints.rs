//! The API endpoint URIs.

/// The route to list or create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to read, replace, or delete a single transaction.
pub const TRANSACTION: &str = "/transactions/{id}";
