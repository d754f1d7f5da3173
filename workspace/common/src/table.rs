//! Column model for ranked tables.
//!
//! Rows expose their cells by key; a column picks one key and optionally
//! runs the cell through a formatter before display.

use crate::format::{PLACEHOLDER, format_integer};

/// A single cell as exposed by a row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl CellValue {
    /// Display form without any column formatter applied.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Integer(v) => v.to_string(),
            CellValue::Number(v) => v.to_string(),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(v) => Some(*v),
            CellValue::Number(v) if v.is_finite() => Some(v.round() as i64),
            _ => None,
        }
    }
}

/// Row types that can be rendered by a ranked table.
pub trait TableRow {
    fn cell(&self, key: &str) -> Option<CellValue>;
}

pub type CellFormatter = fn(Option<&CellValue>) -> String;

/// Formatter for count columns: thousands-grouped integer.
pub fn integer_cell(value: Option<&CellValue>) -> String {
    format_integer(value.and_then(CellValue::as_integer))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    pub render: Option<CellFormatter>,
}

impl TableColumn {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: None,
        }
    }

    pub fn with_render(mut self, render: CellFormatter) -> Self {
        self.render = Some(render);
        self
    }

    pub fn render_cell<R: TableRow>(&self, row: &R) -> String {
        let value = row.cell(&self.key);
        match self.render {
            Some(render) => render(value.as_ref()),
            None => value
                .map(|v| v.display())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

/// Columns for the top-classes table.
pub fn class_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("name", "Class"),
        TableColumn::new("count", "Sessions").with_render(integer_cell),
    ]
}

/// Columns for the top-equipment table.
pub fn equipment_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("name", "Equipment"),
        TableColumn::new("count", "Uses").with_render(integer_cell),
    ]
}
