//! Ledger Gateway is a web service that fronts the `transactions` record set
//! of a PostgREST-style storage service.
//!
//! The gateway maps each HTTP request onto one of five storage operations
//! (read one, read all with joined references, create, replace, delete) and
//! shapes the result into a JSON response carrying the CORS headers the web
//! client expects. All querying, joins, and persistence live in the storage
//! service; this crate is the request router and response shaper, nothing
//! more.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod config;
mod endpoints;
mod error;
mod models;
mod response;
mod routing;
mod state;
mod transaction;

pub mod stores;

pub use config::AppConfig;
pub use error::Error;
pub use models::Transaction;
pub use routing::build_router;
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
