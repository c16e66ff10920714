//! Sortable table derivation: column definitions, open row records, single-key sort state,
//! and the render model consumed by the `Table` component.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Text rendered in place of a field a row does not carry.
pub const MISSING_PLACEHOLDER: &str = "—";
/// Message rendered instead of a table when there are no rows.
pub const EMPTY_MESSAGE: &str = "No data available";
/// Header indicator for a sortable column that is not the active sort key.
pub const UNSORTED_INDICATOR: &str = "↕";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Displayable scalar stored in a row field.
pub enum CellValue {
    /// Numeric value; compared numerically.
    Number(f64),
    /// Text value; compared lexicographically.
    Text(String),
}

impl CellValue {
    /// Returns the display text for the value.
    pub fn display(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }

    /// Native ordering between two present values.
    ///
    /// Numbers order before text so a mixed column still sorts deterministically.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while converting JSON records into [`Row`] values.
pub enum RowError {
    /// The record was not a JSON object.
    #[error("row record must be a JSON object")]
    NotAnObject,
    /// A field held an array or object, which a table cell cannot display.
    #[error("field `{field}` is not a displayable scalar")]
    UnsupportedValue {
        /// Offending field name.
        field: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
/// Open record mapping field names to displayable scalars.
///
/// Deserializes through the same rules as `TryFrom<&Value>`: `null` fields are absent and
/// booleans become text.
pub struct Row(BTreeMap<String, CellValue>);

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Row::try_from(&value).map_err(de::Error::custom)
    }
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts or replaces a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<CellValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Looks up the value stored under `accessor`.
    pub fn get(&self, accessor: &str) -> Option<&CellValue> {
        self.0.get(accessor)
    }

    /// Display text for `accessor`, or [`MISSING_PLACEHOLDER`] when the field is absent.
    pub fn display(&self, accessor: &str) -> String {
        self.get(accessor)
            .map(CellValue::display)
            .unwrap_or_else(|| MISSING_PLACEHOLDER.to_string())
    }

    /// Number of fields present in the row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row carries no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}

impl TryFrom<&Value> for Row {
    type Error = RowError;

    /// Converts a JSON object into a row. `null` fields are treated as absent and booleans are
    /// stored as their text form.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Object(fields) = value else {
            return Err(RowError::NotAnObject);
        };

        let mut row = Row::new();
        for (field, value) in fields {
            match value {
                Value::Null => {}
                Value::Bool(flag) => row.insert(field.as_str(), flag.to_string()),
                Value::Number(number) => {
                    let Some(number) = number.as_f64() else {
                        return Err(RowError::UnsupportedValue {
                            field: field.clone(),
                        });
                    };
                    row.insert(field.as_str(), number);
                }
                Value::String(text) => row.insert(field.as_str(), text.as_str()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(RowError::UnsupportedValue {
                        field: field.clone(),
                    })
                }
            }
        }
        Ok(row)
    }
}

impl Row {
    /// Converts a JSON array of objects into rows.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::NotAnObject`] when `value` is not an array of objects, or
    /// [`RowError::UnsupportedValue`] when a field cannot be displayed.
    pub fn list_from_json(value: &Value) -> Result<Vec<Row>, RowError> {
        let Value::Array(records) = value else {
            return Err(RowError::NotAnObject);
        };
        records.iter().map(Row::try_from).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Table column definition. Sequence order is left-to-right display order.
pub struct Column {
    /// Header label.
    pub name: String,
    /// Row field rendered in this column.
    pub accessor: String,
    /// Whether clicking the header toggles sorting.
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    /// Creates a non-sortable column.
    pub fn new(name: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accessor: accessor.into(),
            sortable: false,
        }
    }

    /// Creates a sortable column.
    pub fn sortable(name: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            sortable: true,
            ..Self::new(name, accessor)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Sort direction for the active sort key.
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header glyph for the direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }

    /// `aria-sort` token for the direction.
    pub fn aria_sort(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Active sort column and direction.
pub struct SortKey {
    /// Accessor of the sorted column.
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Table sort state. `None` keeps rows in input order.
pub struct SortState(Option<SortKey>);

impl SortState {
    /// Sort state that sorts by `key` in `direction`.
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self(Some(SortKey {
            key: key.into(),
            direction,
        }))
    }

    /// Active sort key, if any.
    pub fn key(&self) -> Option<&SortKey> {
        self.0.as_ref()
    }

    /// Direction applied to `accessor`, or `None` when it is not the active key.
    pub fn direction_for(&self, accessor: &str) -> Option<SortDirection> {
        self.0
            .as_ref()
            .filter(|sort| sort.key == accessor)
            .map(|sort| sort.direction)
    }

    /// Clears sorting, restoring input order.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Applies a header activation for `accessor`.
    ///
    /// A different sortable column becomes the sole key in ascending order; the active column
    /// flips direction. Unknown or non-sortable columns leave the state untouched. Returns
    /// whether the state changed.
    pub fn toggle(&mut self, columns: &[Column], accessor: &str) -> bool {
        let sortable = columns
            .iter()
            .any(|column| column.accessor == accessor && column.sortable);
        if !sortable {
            return false;
        }

        let direction = self
            .direction_for(accessor)
            .map(SortDirection::flipped)
            .unwrap_or(SortDirection::Ascending);
        self.0 = Some(SortKey {
            key: accessor.to_string(),
            direction,
        });
        true
    }
}

fn directed_cmp(a: Option<&CellValue>, b: Option<&CellValue>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.sort_cmp(b),
            SortDirection::Descending => a.sort_cmp(b).reverse(),
        },
    }
}

/// Display order of `rows` as indices into the input slice.
///
/// Rows missing the sort field always trail rows that carry it. Without a sort key the
/// order is the identity.
pub fn sorted_indices(rows: &[Row], sort: &SortState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if let Some(sort) = sort.key() {
        order.sort_by(|&a, &b| {
            directed_cmp(rows[a].get(&sort.key), rows[b].get(&sort.key), sort.direction)
        });
    }
    order
}

/// Rows in display order.
pub fn sorted_rows<'a>(rows: &'a [Row], sort: &SortState) -> Vec<&'a Row> {
    sorted_indices(rows, sort)
        .into_iter()
        .map(|index| &rows[index])
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Render description of one header cell.
pub struct HeaderCell {
    /// Column label.
    pub label: String,
    /// Column accessor, used to route header activation back to [`SortState::toggle`].
    pub accessor: String,
    /// Whether the header is interactive.
    pub sortable: bool,
    /// Sort glyph, absent for non-sortable columns.
    pub indicator: Option<&'static str>,
    /// `aria-sort` token.
    pub aria_sort: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One body row in display order.
pub struct BodyRow {
    /// Index of the row in the input data.
    pub source_index: usize,
    /// Cell text in column order.
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Derived table view: a pure function of columns, rows, and sort state.
pub enum TableModel {
    /// No rows; the table renders only an empty-state message.
    Empty {
        /// Message to display.
        message: &'static str,
    },
    /// Header and body in display order.
    Populated {
        /// Header cells in column order.
        headers: Vec<HeaderCell>,
        /// Body rows in display order.
        rows: Vec<BodyRow>,
    },
}

impl TableModel {
    /// Builds the render model.
    pub fn build(columns: &[Column], rows: &[Row], sort: &SortState) -> Self {
        if rows.is_empty() {
            return Self::Empty {
                message: EMPTY_MESSAGE,
            };
        }

        let headers = columns
            .iter()
            .map(|column| {
                let direction = sort.direction_for(&column.accessor);
                HeaderCell {
                    label: column.name.clone(),
                    accessor: column.accessor.clone(),
                    sortable: column.sortable,
                    indicator: column.sortable.then(|| {
                        direction
                            .map(SortDirection::indicator)
                            .unwrap_or(UNSORTED_INDICATOR)
                    }),
                    aria_sort: direction.map(SortDirection::aria_sort).unwrap_or("none"),
                }
            })
            .collect();

        let rows = sorted_indices(rows, sort)
            .into_iter()
            .map(|source_index| BodyRow {
                source_index,
                cells: columns
                    .iter()
                    .map(|column| rows[source_index].display(&column.accessor))
                    .collect(),
            })
            .collect();

        Self::Populated { headers, rows }
    }

    /// Whether the model is the empty state.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn ids(rows: &[Row], sort: &SortState) -> Vec<String> {
        sorted_rows(rows, sort)
            .into_iter()
            .map(|row| row.display("id"))
            .collect()
    }

    fn numeric_rows() -> Vec<Row> {
        vec![
            Row::new().with("id", 3).with("name", "Carol"),
            Row::new().with("id", 1).with("name", "Alice"),
            Row::new().with("id", 2).with("name", "Bob"),
        ]
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::sortable("ID", "id"),
            Column::sortable("Name", "name"),
            Column::new("Notes", "notes"),
        ]
    }

    #[test]
    fn numeric_column_sorts_numerically_in_both_directions() {
        let rows = numeric_rows();
        assert_eq!(
            ids(&rows, &SortState::by("id", SortDirection::Ascending)),
            vec!["1", "2", "3"]
        );
        assert_eq!(
            ids(&rows, &SortState::by("id", SortDirection::Descending)),
            vec!["3", "2", "1"]
        );
    }

    #[test]
    fn numbers_do_not_sort_lexically() {
        let rows = vec![
            Row::new().with("id", 10),
            Row::new().with("id", 9),
            Row::new().with("id", 100),
        ];
        assert_eq!(
            ids(&rows, &SortState::by("id", SortDirection::Ascending)),
            vec!["9", "10", "100"]
        );
    }

    #[test]
    fn unsorted_state_preserves_input_order() {
        let rows = numeric_rows();
        assert_eq!(sorted_indices(&rows, &SortState::default()), vec![0, 1, 2]);
    }

    #[test]
    fn sorting_is_pure_for_identical_inputs() {
        let rows = numeric_rows();
        let sort = SortState::by("name", SortDirection::Descending);
        assert_eq!(sorted_indices(&rows, &sort), sorted_indices(&rows, &sort));
    }

    #[test]
    fn toggle_cycles_between_directions_and_resets_on_new_column() {
        let columns = columns();
        let mut sort = SortState::default();

        assert!(sort.toggle(&columns, "id"));
        assert_eq!(sort, SortState::by("id", SortDirection::Ascending));

        assert!(sort.toggle(&columns, "id"));
        assert_eq!(sort, SortState::by("id", SortDirection::Descending));

        assert!(sort.toggle(&columns, "name"));
        assert_eq!(sort, SortState::by("name", SortDirection::Ascending));
        assert_eq!(sort.direction_for("id"), None);
    }

    #[test]
    fn odd_toggle_count_matches_single_toggle() {
        let columns = columns();
        let rows = numeric_rows();
        let mut once = SortState::default();
        once.toggle(&columns, "id");

        let mut thrice = SortState::default();
        for _ in 0..3 {
            thrice.toggle(&columns, "id");
        }

        assert_eq!(once, thrice);
        assert_eq!(sorted_indices(&rows, &once), sorted_indices(&rows, &thrice));
    }

    #[test]
    fn non_sortable_and_unknown_headers_are_no_ops() {
        let columns = columns();
        let mut sort = SortState::by("id", SortDirection::Descending);

        assert!(!sort.toggle(&columns, "notes"));
        assert!(!sort.toggle(&columns, "missing"));
        assert_eq!(sort, SortState::by("id", SortDirection::Descending));
    }

    #[test]
    fn rows_missing_the_sort_field_trail_in_both_directions() {
        let rows = vec![
            Row::new().with("id", "a"),
            Row::new().with("id", 2),
            Row::new().with("name", "no id"),
            Row::new().with("id", 1),
        ];
        assert_eq!(
            sorted_indices(&rows, &SortState::by("id", SortDirection::Ascending)),
            vec![3, 1, 0, 2]
        );
        assert_eq!(
            sorted_indices(&rows, &SortState::by("id", SortDirection::Descending)),
            vec![0, 1, 3, 2]
        );
    }

    #[test]
    fn empty_rows_build_empty_model_regardless_of_columns() {
        assert_eq!(
            TableModel::build(&columns(), &[], &SortState::default()),
            TableModel::Empty {
                message: EMPTY_MESSAGE
            }
        );
        assert!(TableModel::build(&[], &[], &SortState::default()).is_empty());
    }

    #[test]
    fn model_renders_placeholder_and_header_indicators() {
        let rows = vec![Row::new().with("id", 2), Row::new().with("id", 1).with("notes", "x")];
        let model = TableModel::build(
            &columns(),
            &rows,
            &SortState::by("id", SortDirection::Ascending),
        );

        let TableModel::Populated { headers, rows } = model else {
            panic!("expected populated model");
        };
        assert_eq!(
            headers
                .iter()
                .map(|header| (header.indicator, header.aria_sort))
                .collect::<Vec<_>>(),
            vec![
                (Some("↑"), "ascending"),
                (Some(UNSORTED_INDICATOR), "none"),
                (None, "none"),
            ]
        );
        assert_eq!(rows[0].source_index, 1);
        assert_eq!(rows[0].cells, vec!["1", MISSING_PLACEHOLDER, "x"]);
        assert_eq!(rows[1].cells, vec!["2", MISSING_PLACEHOLDER, MISSING_PLACEHOLDER]);
    }

    #[test]
    fn json_records_convert_with_null_as_absent() {
        let rows = Row::list_from_json(&json!([
            { "id": 1, "name": "Ada", "team": null, "active": true },
            { "id": 2.5 }
        ]))
        .expect("rows");

        assert_eq!(rows[0].display("team"), MISSING_PLACEHOLDER);
        assert_eq!(rows[0].display("active"), "true");
        assert_eq!(rows[1].display("id"), "2.5");
    }

    #[test]
    fn json_records_reject_nested_values() {
        assert_eq!(
            Row::try_from(&json!({ "tags": ["a"] })),
            Err(RowError::UnsupportedValue {
                field: "tags".to_string()
            })
        );
        assert_eq!(Row::try_from(&json!(3)), Err(RowError::NotAnObject));
    }

    #[test]
    fn deserializing_a_row_follows_json_conversion_rules() {
        let raw = r#"{"id": 1, "team": null, "ok": true}"#;

        let row: Row = serde_json::from_str(raw).expect("row");

        assert_eq!(
            row,
            Row::try_from(&serde_json::from_str::<Value>(raw).expect("json")).expect("row")
        );
        assert_eq!(row.get("team"), None);
        assert_eq!(row.display("ok"), "true");
        assert!(serde_json::from_str::<Row>(r#"{"tags": ["a"]}"#).is_err());
    }
}
