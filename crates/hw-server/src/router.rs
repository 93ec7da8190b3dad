//! Axum router construction.
//!
//! Builds the application router with the page routes, middleware layers,
//! and static file serving.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::middleware::request_id::request_id_middleware;
use crate::routes;

/// Build the complete Axum router.
pub fn build_router(ctx: AppContext, static_dir: Option<PathBuf>) -> Router {
    let inventory_routes = Router::new()
        .route(
            "/inventory",
            get(routes::inventory::list_items).post(routes::inventory::create_item),
        )
        .route(
            "/inventory/details/{item_id}",
            get(routes::inventory::get_item).post(routes::inventory::update_item),
        )
        .route(
            "/inventory/details/{item_id}/delete",
            get(routes::inventory::delete_item),
        );

    let mut app = Router::new()
        .route("/", get(routes::home::homepage))
        .route("/health", get(routes::health::health_check))
        .merge(inventory_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx);

    // Static assets (stylesheets, images) under the configured directory.
    if let Some(dir) = static_dir {
        if dir.exists() {
            tracing::info!("Serving static files from {:?}", dir);
            app = app.fallback_service(ServeDir::new(&dir));
        }
    }

    app
}
