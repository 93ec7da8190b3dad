//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB, default config,
//! and full [`AppContext`], plus helpers that drive the router with
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hw_core::config::Config;
use hw_core::ItemId;
use hw_db::models::{Item, NewItem};
use hw_db::pool::{get_conn, init_memory_pool, DbPool};
use hw_server::context::AppContext;
use hw_server::router::build_router;

/// Test harness wrapping a fully-constructed [`AppContext`] backed by an
/// in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
}

impl TestHarness {
    /// Create a new harness with default configuration and in-memory DB.
    pub fn new() -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        let ctx = AppContext::new(db.clone(), Config::default());
        Self { ctx, db }
    }

    /// Router without static file serving.
    pub fn router(&self) -> Router {
        build_router(self.ctx.clone(), None)
    }

    /// Insert an item directly through the query layer.
    pub fn create_item(&self, class_name: &str, assignment_name: &str) -> ItemId {
        let conn = get_conn(&self.db).unwrap();
        hw_db::queries::items::create_item(
            &conn,
            &NewItem {
                class_name: Some(class_name.into()),
                assignment_name: Some(assignment_name.into()),
                due_date: Some("2024-01-01".into()),
                priority_rating: Some("3".into()),
            },
        )
        .unwrap()
    }

    /// Read an item directly through the query layer.
    pub fn fetch_item(&self, id: ItemId) -> Option<Item> {
        let conn = get_conn(&self.db).unwrap();
        hw_db::queries::items::get_item(&conn, id).unwrap()
    }

    /// Number of rows in the `Item` table.
    pub fn item_count(&self) -> usize {
        let conn = get_conn(&self.db).unwrap();
        hw_db::queries::items::list_items(&conn).unwrap().len()
    }

    /// Break the schema so every item statement fails.
    pub fn drop_item_table(&self) {
        let conn = get_conn(&self.db).unwrap();
        conn.execute_batch("DROP TABLE Item").unwrap();
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        self.router()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Helper to get response body as string.
pub async fn body_to_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Item id at the end of a `/inventory/details/<id>` location.
pub fn id_from_location(location: &str) -> ItemId {
    location
        .strip_prefix("/inventory/details/")
        .expect("not a details location")
        .parse()
        .unwrap()
}
