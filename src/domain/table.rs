// Untyped tabular input/output exchanged with the outside world

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One spreadsheet cell as delivered by a table source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// A cell is blank when it is empty or holds only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Trimmed textual view of the cell. Numbers are rendered without a
    /// trailing `.0`, so a variable named `1` round-trips as `"1"`.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Number)
    }
}

/// A header row plus data rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: Vec<Cell>) -> Self {
        self.rows.push(row);
        self
    }

    /// Position of a column, matching header names after trimming.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.trim() == name)
    }

    /// Cell at `(row, column)`; short rows read as empty.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Named sheets, in the order they were read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workbook {
    pub sheets: IndexMap<String, Table>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: impl Into<String>, table: Table) -> Self {
        self.sheets.insert(name.into(), table);
        self
    }

    pub fn sheet(&self, name: &str) -> Option<&Table> {
        self.sheets.get(name)
    }
}

/// The three input tables the pipeline understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Variables,
    Objective,
    Constraints,
}

impl TableKind {
    pub fn sheet_name(&self) -> &'static str {
        match self {
            TableKind::Variables => "Variables",
            TableKind::Objective => "Objective",
            TableKind::Constraints => "Constraints",
        }
    }

    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            TableKind::Variables => &["Variable", "LowerBound", "UpperBound", "Category"],
            TableKind::Objective => &["Variable", "Coefficient"],
            TableKind::Constraints => &["Constraint", "Variable", "Coefficient", "RHS"],
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_as_text_given_integral_number_should_drop_fraction() {
        assert_eq!(Cell::Number(1.0).as_text(), "1");
        assert_eq!(Cell::Number(2.5).as_text(), "2.5");
        assert_eq!(Cell::from("  x ").as_text(), "x");
    }

    #[test]
    fn test_cell_given_short_row_should_read_empty() {
        let table = Table::new(["A", "B"]).with_row(vec![Cell::from("a")]);
        assert_eq!(table.cell(0, 1), &Cell::Empty);
        assert_eq!(table.cell(5, 0), &Cell::Empty);
    }

    #[test]
    fn test_column_index_given_padded_header_should_match() {
        let table = Table::new([" Variable ", "Coefficient"]);
        assert_eq!(table.column_index("Variable"), Some(0));
        assert_eq!(table.column_index("RHS"), None);
    }

    #[test]
    fn test_cell_deserialize_given_json_values_should_map_variants() {
        let cells: Vec<Cell> = serde_json::from_str(r#"[1.5, "x", null]"#).unwrap();
        assert_eq!(cells, vec![Cell::Number(1.5), Cell::from("x"), Cell::Empty]);
    }
}
