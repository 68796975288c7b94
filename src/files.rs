//! File discovery and multi-format combined loading
//!
//! These collaborators treat tables as opaque row/column structures: no
//! schema-aware processing happens here. A file that cannot be read, or has
//! a format this crate does not load, is skipped with a diagnostic rather
//! than failing the whole batch.

use std::path::{Path, PathBuf};

use log::warn;
use serde_json::Value;

use crate::Error;
use crate::table::{Cell, Table};

/// Find files under `root` with the given extension (`"csv"` and `".csv"`
/// are both accepted), recursing into subdirectories when asked to.
pub fn find_files<P: AsRef<Path>>(
    root: P,
    extension: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>, Error> {
    let extension = extension.trim_start_matches('.');
    let pattern = if recursive {
        format!("{}/**/*.{}", root.as_ref().display(), extension)
    } else {
        format!("{}/*.{}", root.as_ref().display(), extension)
    };
    let paths = glob::glob(&pattern)
        .map_err(|e| Error::InvalidData(format!("bad glob pattern '{pattern}': {e}")))?;
    let mut files: Vec<PathBuf> = paths
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Read every path and concatenate the results into one table, aligning
/// columns by name (the union; missing cells are null).
///
/// Delimited text (`.csv`) and GeoJSON (`.geojson`/`.json`) are supported;
/// anything else is skipped with a warning, as is any file that fails to
/// read. With `tag_source`, each row gets a `FilePath` column naming the
/// file it came from.
pub fn read_combined(paths: &[PathBuf], tag_source: bool) -> Table {
    let mut combined = Table::default();
    for path in paths {
        let loaded = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => read_csv_table(path),
            Some("geojson" | "json") => read_geojson_table(path),
            _ => {
                warn!("Unsupported file format: {}", path.display());
                continue;
            }
        };
        match loaded {
            Ok(mut table) => {
                if tag_source {
                    table.add_column("FilePath", Cell::Text(path.display().to_string()));
                }
                combined.append(table);
            }
            Err(e) => warn!("Error reading {}: {}", path.display(), e),
        }
    }
    combined
}

/// Load one delimited-text file. Cells are inferred per value: integer,
/// float, or text; empty fields are null.
pub fn read_csv_table<P: AsRef<Path>>(path: P) -> Result<Table, Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record?;
        let row = record.iter().map(infer_cell).collect();
        // widths can only mismatch on a ragged file, which csv already rejects
        table.push_row(row)?;
    }
    Ok(table)
}

/// Load one GeoJSON `FeatureCollection`. Property keys become columns (union
/// over all features, first-seen order) plus a `geometry` column holding the
/// JSON-serialized geometry.
pub fn read_geojson_table<P: AsRef<Path>>(path: P) -> Result<Table, Error> {
    let text = std::fs::read_to_string(path)?;
    let geojson: geojson::GeoJson = text.parse()?;
    let collection = match geojson {
        geojson::GeoJson::FeatureCollection(fc) => fc,
        _ => {
            return Err(Error::InvalidData(
                "expected a GeoJSON FeatureCollection".to_string(),
            ));
        }
    };

    let mut columns: Vec<String> = Vec::new();
    for feature in &collection.features {
        if let Some(properties) = &feature.properties {
            for key in properties.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns.push("geometry".to_string());

    let mut table = Table::new(columns);
    for feature in &collection.features {
        let mut row: Vec<Cell> = table.columns[..table.columns.len() - 1]
            .iter()
            .map(|column| {
                feature
                    .properties
                    .as_ref()
                    .and_then(|p| p.get(column))
                    .map_or(Cell::Null, json_cell)
            })
            .collect();
        row.push(match &feature.geometry {
            Some(geometry) => Cell::Text(serde_json::to_string(geometry)?),
            None => Cell::Null,
        });
        table.push_row(row)?;
    }
    Ok(table)
}

fn infer_cell(field: &str) -> Cell {
    if field.is_empty() {
        Cell::Null
    } else if let Ok(v) = field.parse::<i64>() {
        Cell::Int(v)
    } else if let Ok(v) = field.parse::<f64>() {
        Cell::Float(v)
    } else {
        Cell::Text(field.to_string())
    }
}

fn json_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Null,
        Value::Bool(v) => Cell::Bool(*v),
        Value::Number(n) => n
            .as_i64()
            .map(Cell::Int)
            .unwrap_or_else(|| Cell::Float(n.as_f64().unwrap_or(f64::NAN))),
        Value::String(s) => Cell::Text(s.clone()),
        // nested structures keep their JSON rendering
        other => Cell::Text(other.to_string()),
    }
}
