//! A storage backend that speaks the PostgREST dialect of the
//! database-as-a-service the gateway fronts.

mod client;
mod transaction;

pub use client::{Postgrest, Query};
pub use transaction::PostgrestTransactionStore;
