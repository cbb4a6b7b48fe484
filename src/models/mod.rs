//! Contains the domain models for the gateway.

mod transaction;

pub use transaction::Transaction;
