//! Request body shapes for the inventory forms.
//!
//! The create form posts bare column names; the edit form on the detail page
//! posts `<column>_input` names, translated through [`UPDATE_FORM_FIELDS`].

use std::collections::HashMap;

use hw_db::models::{ItemChanges, ItemColumn, NewItem};
use serde::Deserialize;

/// Body of `POST /inventory`.
///
/// Missing fields stay `None` and reach storage as NULL.
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemForm {
    pub class_name: Option<String>,
    pub assignment_name: Option<String>,
    pub due_date: Option<String>,
    pub priority_rating: Option<String>,
}

impl From<CreateItemForm> for NewItem {
    fn from(form: CreateItemForm) -> Self {
        NewItem {
            class_name: form.class_name,
            assignment_name: form.assignment_name,
            due_date: form.due_date,
            priority_rating: form.priority_rating,
        }
    }
}

/// Edit-form field name for each updatable column, in bind order.
pub const UPDATE_FORM_FIELDS: [(&str, ItemColumn); 9] = [
    ("class_name_input", ItemColumn::ClassName),
    ("assignment_name_input", ItemColumn::AssignmentName),
    ("due_date_input", ItemColumn::DueDate),
    ("priority_rating_input", ItemColumn::PriorityRating),
    ("assignment_type_input", ItemColumn::AssignmentType),
    ("assignment_format_input", ItemColumn::AssignmentFormat),
    ("interest_level_input", ItemColumn::InterestLevel),
    ("relevance_level_input", ItemColumn::RelevanceLevel),
    ("description_input", ItemColumn::Description),
];

/// Build the update values from a decoded edit form. Fields not posted bind
/// NULL; unknown fields are ignored.
pub fn changes_from_form(fields: &HashMap<String, String>) -> ItemChanges {
    let mut changes = ItemChanges::default();
    for (field, column) in UPDATE_FORM_FIELDS {
        changes.set(column, fields.get(field).cloned());
    }
    changes
}
