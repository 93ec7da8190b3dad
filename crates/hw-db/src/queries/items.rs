//! Item list, lookup, create, update, and delete.
//!
//! Each function issues exactly one statement with positionally bound
//! parameters and runs in autocommit mode.

use hw_core::{Error, ItemId, Result};
use rusqlite::{Connection, ToSql};

use crate::models::{Item, ItemChanges, ItemColumn, NewItem};

/// Column list used in SELECT statements, in [`Item::from_row`] order.
pub const COLS: &str = "item_id,
    class_name, assignment_name, assignment_type, assignment_format,
    due_date, priority_rating, interest_level, relevance_level,
    description";

/// List every item in storage order.
pub fn list_items(conn: &Connection) -> Result<Vec<Item>> {
    let q = format!("SELECT {COLS} FROM Item");
    let mut stmt = conn.prepare(&q).map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Item::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Get an item by ID.
pub fn get_item(conn: &Connection, id: ItemId) -> Result<Option<Item>> {
    let q = format!("SELECT {COLS} FROM Item WHERE item_id = ?1");
    let result = conn.query_row(&q, [id.get()], Item::from_row);
    match result {
        Ok(i) => Ok(Some(i)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Insert a row from the four create fields and return its generated key.
pub fn create_item(conn: &Connection, new: &NewItem) -> Result<ItemId> {
    conn.execute(
        "INSERT INTO Item (class_name, assignment_name, due_date, priority_rating)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            new.class_name.as_deref(),
            new.assignment_name.as_deref(),
            new.due_date.as_deref(),
            new.priority_rating.as_deref(),
        ],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(ItemId::from(conn.last_insert_rowid()))
}

fn update_sql() -> String {
    let assignments = ItemColumn::UPDATABLE
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ?{}", col.name(), i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE Item SET {assignments} WHERE item_id = ?{}",
        ItemColumn::UPDATABLE.len() + 1
    )
}

/// Overwrite every mutable column of an item.
///
/// Returns `false` when no row has `id`; that is not an error.
pub fn update_item(conn: &Connection, id: ItemId, changes: &ItemChanges) -> Result<bool> {
    let values: Vec<Option<&str>> = ItemColumn::UPDATABLE
        .iter()
        .map(|col| changes.get(*col))
        .collect();
    let raw_id = id.get();

    let mut params: Vec<&dyn ToSql> = Vec::with_capacity(values.len() + 1);
    for value in &values {
        params.push(value);
    }
    params.push(&raw_id);

    let n = conn
        .execute(&update_sql(), params.as_slice())
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

/// Delete an item by ID.
///
/// Returns `false` when no row has `id`; that is not an error.
pub fn delete_item(conn: &Connection, id: ItemId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM Item WHERE item_id = ?1", [id.get()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
