use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::CoreError;

/// A single named column of raw cell values.
///
/// Cells keep their literal string form from the CSV file; numeric or
/// temporal interpretation happens in the operation that needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

/// The in-memory table produced by parsing a CSV file.
///
/// Invariants, enforced at construction:
/// - column names are unique,
/// - every column has the same number of values.
///
/// A dataset is never partially mutated — a new load replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularDataset {
    columns: Vec<Column>,
}

impl TabularDataset {
    /// Build a dataset from a header and row-major records, as read from a
    /// CSV file. Fails with `Parse` if a row's width doesn't match the
    /// header or a column name repeats.
    pub fn from_rows(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for name in &headers {
            if !seen.insert(name.as_str()) {
                return Err(CoreError::Parse(format!(
                    "duplicate column name '{name}' in header"
                )));
            }
        }

        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column {
                name,
                values: Vec::with_capacity(rows.len()),
            })
            .collect();

        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != columns.len() {
                return Err(CoreError::Parse(format!(
                    "row {} has {} fields, expected {}",
                    row_index,
                    row.len(),
                    columns.len()
                )));
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
        }

        Ok(Self { columns })
    }

    /// Header names in file order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Raw cell at (row, column) position, `None` if out of range.
    #[must_use]
    pub fn value_at(&self, row: usize, column: usize) -> Option<&str> {
        self.columns
            .get(column)
            .and_then(|c| c.values.get(row))
            .map(String::as_str)
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterate rows in file order, each as a vector of raw cells.
    /// Used by table display and by CSV serialization.
    pub fn rows<'a>(&'a self) -> impl Iterator<Item = Vec<&'a str>> + 'a {
        (0..self.row_count())
            .map(move |row| self.columns.iter().map(move |c| c.values[row].as_str()).collect())
    }
}
