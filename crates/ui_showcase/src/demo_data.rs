//! Demo datasets bundled with the showcase.

use leptos::logging;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use ui_core_headless::{Column, Row, RowError};
use ui_kit::{NavItem, SidebarItem};

const PEOPLE_JSON: &str = include_str!("../data/people.json");
const NAVIGATION_JSON: &str = include_str!("../data/navigation.json");
const SIDEBAR_JSON: &str = include_str!("../data/sidebar.json");

#[derive(Debug, Error)]
pub(crate) enum DemoDataError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid row: {0}")]
    Row(#[from] RowError),
}

fn parse_rows(raw: &str) -> Result<Vec<Row>, DemoDataError> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(Row::list_from_json(&value)?)
}

fn parse_list<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, DemoDataError> {
    Ok(serde_json::from_str(raw)?)
}

fn or_empty<T>(name: &str, result: Result<Vec<T>, DemoDataError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        logging::warn!("showcase {name} dataset skipped: {err}");
        Vec::new()
    })
}

pub(crate) fn people_columns() -> Vec<Column> {
    vec![
        Column::sortable("ID", "id"),
        Column::sortable("Name", "name"),
        Column::new("Role", "role"),
        Column::sortable("Team", "team"),
        Column::sortable("Joined", "joined"),
    ]
}

pub(crate) fn people_rows() -> Vec<Row> {
    or_empty("people", parse_rows(PEOPLE_JSON))
}

pub(crate) fn navigation_items() -> Vec<NavItem> {
    or_empty("navigation", parse_list(NAVIGATION_JSON))
}

pub(crate) fn sidebar_items() -> Vec<SidebarItem> {
    or_empty("sidebar", parse_list(SIDEBAR_JSON))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_core_headless::{SortState, TableModel};

    use super::*;

    #[test]
    fn bundled_datasets_parse() {
        assert_eq!(parse_rows(PEOPLE_JSON).expect("people").len(), 5);
        assert_eq!(
            parse_list::<NavItem>(NAVIGATION_JSON)
                .expect("navigation")
                .len(),
            4
        );
        assert_eq!(
            parse_list::<SidebarItem>(SIDEBAR_JSON)
                .expect("sidebar")
                .len(),
            4
        );
    }

    #[test]
    fn people_with_missing_join_year_render_placeholder() {
        let rows = parse_rows(PEOPLE_JSON).expect("people");
        let TableModel::Populated { rows: body, .. } =
            TableModel::build(&people_columns(), &rows, &SortState::default())
        else {
            panic!("expected populated table");
        };

        let turing = body
            .iter()
            .find(|row| row.cells[1] == "Alan Turing")
            .expect("turing row");
        assert_eq!(turing.cells[4], ui_core_headless::MISSING_PLACEHOLDER);
    }

    #[test]
    fn malformed_rows_are_reported() {
        assert!(matches!(
            parse_rows(r#"[{"id": [1, 2]}]"#),
            Err(DemoDataError::Row(_))
        ));
        assert!(matches!(parse_rows("not json"), Err(DemoDataError::Json(_))));
    }
}
