//! Inventory route handlers: one storage statement per request.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::response::{Html, Response};
use axum::Form;
use hw_core::ItemId;

use crate::context::AppContext;
use crate::error::AppError;
use crate::forms::{changes_from_form, CreateItemForm};
use crate::routes::found;
use crate::views;

/// Parse the `{item_id}` path segment. Text that is not an integer key
/// cannot match any row, so callers treat `None` like a missing item.
fn parse_item_id(raw: &str) -> Option<ItemId> {
    raw.parse().ok()
}

fn details_location(id: impl std::fmt::Display) -> String {
    format!("/inventory/details/{id}")
}

/// GET /inventory
pub async fn list_items(State(ctx): State<AppContext>) -> Result<Html<String>, AppError> {
    let conn = hw_db::pool::get_conn(&ctx.db)?;
    let items = hw_db::queries::items::list_items(&conn)?;
    Ok(Html(views::inventory(&items).into_string()))
}

/// GET /inventory/details/{item_id}
pub async fn get_item(
    State(ctx): State<AppContext>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let item = match parse_item_id(&raw_id) {
        Some(item_id) => {
            let conn = hw_db::pool::get_conn(&ctx.db)?;
            hw_db::queries::items::get_item(&conn, item_id)?
        }
        None => None,
    }
    .ok_or_else(|| hw_core::Error::not_found("item", &raw_id))?;

    Ok(Html(views::details(&item).into_string()))
}

/// POST /inventory
pub async fn create_item(
    State(ctx): State<AppContext>,
    Form(form): Form<CreateItemForm>,
) -> Result<Response, AppError> {
    let conn = hw_db::pool::get_conn(&ctx.db)?;
    let item_id = hw_db::queries::items::create_item(&conn, &form.into())?;

    tracing::info!(%item_id, "Item created");
    Ok(found(&details_location(item_id)))
}

/// POST /inventory/details/{item_id}
pub async fn update_item(
    State(ctx): State<AppContext>,
    Path(raw_id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let updated = match parse_item_id(&raw_id) {
        Some(item_id) => {
            let changes = changes_from_form(&fields);
            let conn = hw_db::pool::get_conn(&ctx.db)?;
            hw_db::queries::items::update_item(&conn, item_id, &changes)?
        }
        None => false,
    };
    if !updated {
        tracing::debug!(item_id = %raw_id, "Update matched no rows");
    }

    Ok(found(&details_location(&raw_id)))
}

/// GET /inventory/details/{item_id}/delete
pub async fn delete_item(
    State(ctx): State<AppContext>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    if let Some(item_id) = parse_item_id(&raw_id) {
        let conn = hw_db::pool::get_conn(&ctx.db)?;
        if hw_db::queries::items::delete_item(&conn, item_id)? {
            tracing::info!(%item_id, "Item deleted");
        }
    }

    Ok(found("/inventory"))
}
