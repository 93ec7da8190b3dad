//! Landing page.

use axum::response::Html;

use crate::views;

/// GET /
pub async fn homepage() -> Html<String> {
    Html(views::home().into_string())
}
