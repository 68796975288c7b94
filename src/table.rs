//! Generic row/column table
//!
//! The extractors produce typed records; downstream consumers (combined
//! loading, filtering, CSV output) treat everything as an opaque [`Table`].
//! Records cross that boundary through the [`Tabular`] trait.

use std::path::Path;

use serde::Serialize;

use crate::Error;
use crate::model::Scalar;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Text rendering used for CSV output and keyword matching. Null renders
    /// as the empty string.
    pub fn render(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Bool(v) => v.to_string(),
            Cell::Int(v) => v.to_string(),
            Cell::Float(v) => v.to_string(),
            Cell::Text(v) => v.clone(),
        }
    }

    /// A list-valued cell, rendered as a JSON array string so the value
    /// survives a round trip through delimited output.
    pub fn json_list(values: &[String]) -> Cell {
        // Vec<String> to JSON cannot fail
        Cell::Text(serde_json::to_string(values).unwrap_or_else(|_| "[]".into()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map_or(Cell::Null, Cell::Text)
    }
}

impl From<Option<i32>> for Cell {
    fn from(value: Option<i32>) -> Self {
        value.map_or(Cell::Null, |v| Cell::Int(i64::from(v)))
    }
}

impl From<Option<bool>> for Cell {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Cell::Null, Cell::Bool)
    }
}

impl From<Option<Scalar>> for Cell {
    fn from(value: Option<Scalar>) -> Self {
        match value {
            None => Cell::Null,
            Some(Scalar::Int(v)) => Cell::Int(v),
            Some(Scalar::Float(v)) => Cell::Float(v),
            Some(Scalar::Text(v)) => Cell::Text(v),
        }
    }
}

/// A record type with a fixed flat column layout.
pub trait Tabular {
    /// Output column names, in order. The single source of truth for the
    /// extractor schemas.
    const COLUMNS: &'static [&'static str];

    /// The record as one row, aligned with [`Self::COLUMNS`].
    fn row(&self) -> Vec<Cell>;
}

/// A flat table: named columns and rows of cells, every row as wide as the
/// column list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Flatten typed records into a table with their fixed column order.
    pub fn from_records<T: Tabular>(records: &[T]) -> Self {
        Table {
            columns: T::COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            rows: records.iter().map(Tabular::row).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Push a row; it must match the current column count.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), Error> {
        if row.len() != self.columns.len() {
            return Err(Error::InvalidData(format!(
                "row width {} does not match {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a constant-valued column to every row.
    pub fn add_column(&mut self, name: &str, value: Cell) {
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(value.clone());
        }
    }

    /// Append another table's rows, aligning by column name.
    ///
    /// Columns unknown to either side are created and null-filled, so a
    /// concatenation over heterogeneous inputs yields the column union.
    pub fn append(&mut self, other: Table) {
        for column in &other.columns {
            if self.column_index(column).is_none() {
                self.columns.push(column.clone());
                for row in &mut self.rows {
                    row.push(Cell::Null);
                }
            }
        }
        let mapping: Vec<usize> = other
            .columns
            .iter()
            .map(|c| self.column_index(c).unwrap_or(usize::MAX))
            .collect();
        for row in other.rows {
            let mut aligned = vec![Cell::Null; self.columns.len()];
            for (cell, &target) in row.into_iter().zip(&mapping) {
                if target != usize::MAX {
                    aligned[target] = cell;
                }
            }
            self.rows.push(aligned);
        }
    }

    /// Keep only the rows where any cell's text rendering contains `keyword`.
    pub fn filter_any(&self, keyword: &str) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| row.iter().any(|cell| cell.render().contains(keyword)))
                .cloned()
                .collect(),
        }
    }

    /// Write the table as delimited text, header row first.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(Cell::render))?;
        }
        writer.flush()?;
        Ok(())
    }
}
