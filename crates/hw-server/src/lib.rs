//! hw-server: HTTP server for the assignment tracker.
//!
//! This crate ties the other hw-* crates into a running application:
//!
//! - Axum router with HTML views rendered by maud
//! - Request-id and trace middleware
//! - Static file serving for stylesheets and images
//! - Graceful shutdown via signal handling

pub mod context;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod views;

use hw_core::config::Config;

use crate::context::AppContext;

/// Start the hwtracker server.
///
/// Opens (or creates) the database, builds the [`AppContext`], and serves
/// HTTP until a shutdown signal arrives. The connection pool is dropped
/// once in-flight requests have drained.
pub async fn start(config: Config) -> hw_core::Result<()> {
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    let db_path = &config.server.db_path;
    let existed = db_path.exists();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            tracing::info!("Created database directory {}", parent.display());
        }
    }
    let db_str = db_path.to_string_lossy();
    let db = hw_db::pool::init_pool(&db_str)?;
    if existed {
        tracing::info!("Database opened (existing) at {db_str}");
    } else {
        tracing::info!("Database created (new) at {db_str}");
    }

    let host = config.server.host.clone();
    let port = config.server.port;
    let static_dir = config.server.static_dir.clone();
    let ctx = AppContext::new(db, config);

    let app = router::build_router(ctx, static_dir);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .map_err(|e| hw_core::Error::Internal(format!("Failed to bind to {host}:{port}: {e}")))?;
    let addr = listener
        .local_addr()
        .map_err(|e| hw_core::Error::Internal(format!("Failed to read local address: {e}")))?;

    tracing::info!("App server listening on {addr} (go to http://localhost:{})", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| hw_core::Error::Internal(format!("Server error: {e}")))?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
