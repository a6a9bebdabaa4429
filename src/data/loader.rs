use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use thiserror::Error;

use super::model::{CellValue, Column, Table};

/// The one failure kind the entry point distinguishes: the caller reports it
/// and halts without writing any output.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a semicolon-delimited bank-marketing CSV into a [`Table`].
///
/// Input layout: field separator `;`, quote character `"`, first row is the
/// header. After loading, a column literally named `y` is renamed to `class`
/// and its `yes`/`no` labels are mapped to `1`/`0`.
pub fn load_csv(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(LoadError::InputNotFound(path.to_path_buf()).into());
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .quote(b'"')
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if headers.is_empty() {
        bail!("CSV has no header row");
    }

    let mut columns: Vec<Column> = headers
        .iter()
        .map(|h| Column::new(h.clone(), Vec::new()))
        .collect();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        for (col, field) in columns.iter_mut().zip(record.iter()) {
            col.values.push(guess_cell_type(field));
        }
    }

    let mut table = Table { columns };
    table.rename_column("y", "class");
    map_class_labels(&mut table);
    Ok(table)
}

// ---------------------------------------------------------------------------
// Cell typing and label mapping
// ---------------------------------------------------------------------------

/// Infer a cell's type from its text form: empty → null, then integer,
/// then float, else string.
fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Int(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::Str(s.to_string())
}

/// Map `yes`/`no` labels in the `class` column to `1`/`0`. Any other value
/// becomes null and propagates to the output as an empty cell.
fn map_class_labels(table: &mut Table) {
    let Some(col) = table.column_mut("class") else {
        return;
    };
    for value in &mut col.values {
        *value = match value {
            CellValue::Str(s) if s.as_str() == "yes" => CellValue::Int(1),
            CellValue::Str(s) if s.as_str() == "no" => CellValue::Int(0),
            _ => CellValue::Null,
        };
    }
}
