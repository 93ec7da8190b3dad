//! HTML views rendered with maud.
//!
//! Every page shares [`layout`]. Dynamic values are escaped by maud, and
//! missing optional columns render as empty strings.

use hw_db::models::{Item, ItemColumn};
use maud::{html, Markup, DOCTYPE};

use crate::forms::UPDATE_FORM_FIELDS;

const SITE_TITLE: &str = "Homework Tracker";

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_TITLE) }
                link rel="stylesheet" href="/styles.css";
            }
            body {
                nav {
                    a href="/" { "Home" }
                    " "
                    a href="/inventory" { "Assignments" }
                }
                main { (body) }
            }
        }
    }
}

fn label(column: ItemColumn) -> &'static str {
    match column {
        ItemColumn::ClassName => "Class",
        ItemColumn::AssignmentName => "Assignment",
        ItemColumn::DueDate => "Due date",
        ItemColumn::PriorityRating => "Priority",
        ItemColumn::AssignmentType => "Type",
        ItemColumn::AssignmentFormat => "Format",
        ItemColumn::InterestLevel => "Interest",
        ItemColumn::RelevanceLevel => "Relevance",
        ItemColumn::Description => "Description",
    }
}

fn details_href(item: &Item) -> String {
    format!("/inventory/details/{}", item.item_id)
}

/// Landing page.
pub fn home() -> Markup {
    layout(
        "Home",
        html! {
            h1 { (SITE_TITLE) }
            p { "Keep track of classes, assignments, and when they are due." }
            a href="/inventory" { "View assignments" }
        },
    )
}

/// Every item, plus the form for adding one.
pub fn inventory(items: &[Item]) -> Markup {
    layout(
        "Assignments",
        html! {
            h1 { "Assignments" }
            table id="inventory" {
                thead {
                    tr {
                        th { "Class" }
                        th { "Assignment" }
                        th { "Due date" }
                        th { "Priority" }
                        th {}
                    }
                }
                tbody {
                    @for item in items {
                        tr {
                            td { (item.class_name) }
                            td { a href=(details_href(item)) { (item.assignment_name) } }
                            td { (item.due_date) }
                            td { (item.priority_rating) }
                            td {
                                a href=(details_href(item)) { "Info/Edit" }
                                " "
                                a href={ (details_href(item)) "/delete" } { "Delete" }
                            }
                        }
                    }
                }
            }
            h2 { "Add an assignment" }
            form method="post" action="/inventory" {
                label for="class_name" { "Class" }
                input type="text" id="class_name" name="class_name";
                label for="assignment_name" { "Assignment" }
                input type="text" id="assignment_name" name="assignment_name";
                label for="due_date" { "Due date" }
                input type="date" id="due_date" name="due_date";
                label for="priority_rating" { "Priority" }
                input type="number" id="priority_rating" name="priority_rating";
                button type="submit" { "Add" }
            }
        },
    )
}

/// One item with its edit form and delete link.
pub fn details(item: &Item) -> Markup {
    layout(
        &item.assignment_name,
        html! {
            h1 { (item.assignment_name) }
            dl id="details" {
                @for column in ItemColumn::UPDATABLE {
                    dt { (label(column)) }
                    dd { (item.value(column).unwrap_or_default()) }
                }
            }
            h2 { "Edit" }
            form method="post" action=(details_href(item)) {
                @for (field, column) in UPDATE_FORM_FIELDS {
                    label for=(field) { (label(column)) }
                    @if column == ItemColumn::Description {
                        textarea id=(field) name=(field) {
                            (item.value(column).unwrap_or_default())
                        }
                    } @else {
                        input type="text" id=(field) name=(field)
                            value=(item.value(column).unwrap_or_default());
                    }
                }
                button type="submit" { "Save" }
            }
            a href={ (details_href(item)) "/delete" } { "Delete" }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hw_core::ItemId;

    fn sample() -> Item {
        Item {
            item_id: ItemId::from(3),
            class_name: "CS101".into(),
            assignment_name: "HW <1>".into(),
            assignment_type: None,
            assignment_format: Some("pdf".into()),
            due_date: "2024-01-01".into(),
            priority_rating: "3".into(),
            interest_level: None,
            relevance_level: None,
            description: Some("Read chapter 2".into()),
        }
    }

    #[test]
    fn inventory_links_each_item() {
        let html = inventory(&[sample()]).into_string();
        assert!(html.contains(r#"href="/inventory/details/3""#));
        assert!(html.contains(r#"href="/inventory/details/3/delete""#));
        assert!(html.contains(r#"action="/inventory""#));
    }

    #[test]
    fn values_are_escaped() {
        let html = details(&sample()).into_string();
        assert!(html.contains("HW &lt;1&gt;"));
        assert!(!html.contains("HW <1>"));
    }

    #[test]
    fn details_form_uses_input_names() {
        let html = details(&sample()).into_string();
        for (field, _) in UPDATE_FORM_FIELDS {
            assert!(html.contains(&format!(r#"name="{field}""#)), "missing {field}");
        }
        assert!(html.contains(r#"value="pdf""#));
        assert!(html.contains(r#"name="assignment_type_input" value="""#));
        assert!(html.contains("Read chapter 2</textarea>"));
    }

    #[test]
    fn home_links_to_inventory() {
        let html = home().into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"href="/inventory""#));
    }
}
