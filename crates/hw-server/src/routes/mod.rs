//! Route handlers.

pub mod health;
pub mod home;
pub mod inventory;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// `302 Found` pointing at `location`.
///
/// `axum::response::Redirect` only offers 303/307/308.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
