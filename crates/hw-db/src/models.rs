//! Rust structs mapping to database tables.
//!
//! [`Item`] implements `from_row` for constructing itself from a
//! `rusqlite::Row`; [`ItemColumn`] names the columns that writes touch.

use hw_core::ItemId;

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// One assignment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub item_id: ItemId,
    pub class_name: String,
    pub assignment_name: String,
    pub assignment_type: Option<String>,
    pub assignment_format: Option<String>,
    pub due_date: String,
    pub priority_rating: String,
    pub interest_level: Option<String>,
    pub relevance_level: Option<String>,
    pub description: Option<String>,
}

impl Item {
    /// Build from a row selected with [`crate::queries::items::COLS`].
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            item_id: ItemId::from(row.get::<_, i64>(0)?),
            class_name: row.get(1)?,
            assignment_name: row.get(2)?,
            assignment_type: row.get(3)?,
            assignment_format: row.get(4)?,
            due_date: row.get(5)?,
            priority_rating: row.get(6)?,
            interest_level: row.get(7)?,
            relevance_level: row.get(8)?,
            description: row.get(9)?,
        })
    }

    /// Current value of a mutable column. Required columns are always `Some`.
    pub fn value(&self, column: ItemColumn) -> Option<&str> {
        match column {
            ItemColumn::ClassName => Some(self.class_name.as_str()),
            ItemColumn::AssignmentName => Some(self.assignment_name.as_str()),
            ItemColumn::DueDate => Some(self.due_date.as_str()),
            ItemColumn::PriorityRating => Some(self.priority_rating.as_str()),
            ItemColumn::AssignmentType => self.assignment_type.as_deref(),
            ItemColumn::AssignmentFormat => self.assignment_format.as_deref(),
            ItemColumn::InterestLevel => self.interest_level.as_deref(),
            ItemColumn::RelevanceLevel => self.relevance_level.as_deref(),
            ItemColumn::Description => self.description.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// ItemColumn
// ---------------------------------------------------------------------------

/// A mutable (non-key) column of the `Item` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemColumn {
    ClassName,
    AssignmentName,
    DueDate,
    PriorityRating,
    AssignmentType,
    AssignmentFormat,
    InterestLevel,
    RelevanceLevel,
    Description,
}

impl ItemColumn {
    /// Columns overwritten by an update, in bind order.
    pub const UPDATABLE: [ItemColumn; 9] = [
        ItemColumn::ClassName,
        ItemColumn::AssignmentName,
        ItemColumn::DueDate,
        ItemColumn::PriorityRating,
        ItemColumn::AssignmentType,
        ItemColumn::AssignmentFormat,
        ItemColumn::InterestLevel,
        ItemColumn::RelevanceLevel,
        ItemColumn::Description,
    ];

    /// SQL column name.
    pub const fn name(self) -> &'static str {
        match self {
            ItemColumn::ClassName => "class_name",
            ItemColumn::AssignmentName => "assignment_name",
            ItemColumn::DueDate => "due_date",
            ItemColumn::PriorityRating => "priority_rating",
            ItemColumn::AssignmentType => "assignment_type",
            ItemColumn::AssignmentFormat => "assignment_format",
            ItemColumn::InterestLevel => "interest_level",
            ItemColumn::RelevanceLevel => "relevance_level",
            ItemColumn::Description => "description",
        }
    }
}

// ---------------------------------------------------------------------------
// Write shapes
// ---------------------------------------------------------------------------

/// Values for a new row. `None` binds SQL NULL; the schema decides whether
/// that is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    pub class_name: Option<String>,
    pub assignment_name: Option<String>,
    pub due_date: Option<String>,
    pub priority_rating: Option<String>,
}

/// Replacement values for every column in [`ItemColumn::UPDATABLE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub class_name: Option<String>,
    pub assignment_name: Option<String>,
    pub due_date: Option<String>,
    pub priority_rating: Option<String>,
    pub assignment_type: Option<String>,
    pub assignment_format: Option<String>,
    pub interest_level: Option<String>,
    pub relevance_level: Option<String>,
    pub description: Option<String>,
}

impl ItemChanges {
    fn slot(&mut self, column: ItemColumn) -> &mut Option<String> {
        match column {
            ItemColumn::ClassName => &mut self.class_name,
            ItemColumn::AssignmentName => &mut self.assignment_name,
            ItemColumn::DueDate => &mut self.due_date,
            ItemColumn::PriorityRating => &mut self.priority_rating,
            ItemColumn::AssignmentType => &mut self.assignment_type,
            ItemColumn::AssignmentFormat => &mut self.assignment_format,
            ItemColumn::InterestLevel => &mut self.interest_level,
            ItemColumn::RelevanceLevel => &mut self.relevance_level,
            ItemColumn::Description => &mut self.description,
        }
    }

    /// Value bound for `column`.
    pub fn get(&self, column: ItemColumn) -> Option<&str> {
        let value = match column {
            ItemColumn::ClassName => &self.class_name,
            ItemColumn::AssignmentName => &self.assignment_name,
            ItemColumn::DueDate => &self.due_date,
            ItemColumn::PriorityRating => &self.priority_rating,
            ItemColumn::AssignmentType => &self.assignment_type,
            ItemColumn::AssignmentFormat => &self.assignment_format,
            ItemColumn::InterestLevel => &self.interest_level,
            ItemColumn::RelevanceLevel => &self.relevance_level,
            ItemColumn::Description => &self.description,
        };
        value.as_deref()
    }

    /// Replace the value bound for `column`.
    pub fn set(&mut self, column: ItemColumn, value: Option<String>) {
        *self.slot(column) = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn updatable_columns_are_distinct() {
        let names: HashSet<_> = ItemColumn::UPDATABLE.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), ItemColumn::UPDATABLE.len());
        assert!(!names.contains("item_id"));
    }

    #[test]
    fn changes_set_and_get() {
        let mut changes = ItemChanges::default();
        for col in ItemColumn::UPDATABLE {
            assert_eq!(changes.get(col), None);
            changes.set(col, Some(col.name().to_uppercase()));
        }
        assert_eq!(changes.get(ItemColumn::DueDate), Some("DUE_DATE"));
        assert_eq!(changes.description.as_deref(), Some("DESCRIPTION"));

        changes.set(ItemColumn::DueDate, None);
        assert_eq!(changes.due_date, None);
    }
}
