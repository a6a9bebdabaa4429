use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, Column, Table};

/// The exact output contract: 63 columns, in this order, regardless of
/// input. Never derived from data.
pub const TARGET_COLUMNS: [&str; 63] = [
    "age",
    "job=housemaid",
    "job=services",
    "job=admin.",
    "job=blue-collar",
    "job=technician",
    "job=retired",
    "job=management",
    "job=unemployed",
    "job=self-employed",
    "job=unknown",
    "job=entrepreneur",
    "job=student",
    "marital=married",
    "marital=single",
    "marital=divorced",
    "marital=unknown",
    "education=basic.4y",
    "education=high.school",
    "education=basic.6y",
    "education=basic.9y",
    "education=professional.course",
    "education=unknown",
    "education=university.degree",
    "education=illiterate",
    "default=0",
    "default=unknown",
    "default=1",
    "housing=0",
    "housing=1",
    "housing=unknown",
    "loan=0",
    "loan=1",
    "loan=unknown",
    "contact=cellular",
    "month=may",
    "month=jun",
    "month=jul",
    "month=aug",
    "month=oct",
    "month=nov",
    "month=dec",
    "month=mar",
    "month=apr",
    "month=sep",
    "day_of_week=mon",
    "day_of_week=tue",
    "day_of_week=wed",
    "day_of_week=thu",
    "day_of_week=fri",
    "duration",
    "campaign",
    "pdays",
    "previous",
    "poutcome=nonexistent",
    "poutcome=failure",
    "poutcome=success",
    "emp.var.rate",
    "cons.price.idx",
    "cons.conf.idx",
    "euribor3m",
    "nr.employed",
    "class",
];

// ---------------------------------------------------------------------------
// Diagnostics and strict reindex
// ---------------------------------------------------------------------------

/// Target columns absent from the table, in target order. Informational:
/// [`reindex`] synthesizes these as all-zero columns.
pub fn missing_columns(table: &Table) -> Vec<&'static str> {
    TARGET_COLUMNS
        .iter()
        .copied()
        .filter(|c| !table.has_column(c))
        .collect()
}

/// Build the output table: exactly [`TARGET_COLUMNS`], in order. Absent
/// columns are filled with integer 0 for every row; input columns outside
/// the target schema are dropped.
pub fn reindex(table: &Table) -> Table {
    let n_rows = table.n_rows();
    let columns = TARGET_COLUMNS
        .iter()
        .map(|&name| match table.column(name) {
            Some(col) => Column::new(name, col.values.clone()),
            None => Column::new(name, vec![CellValue::Int(0); n_rows]),
        })
        .collect();
    Table { columns }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Write the table as a comma-delimited CSV with a header row and no index
/// column.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating output CSV {}", path.display()))?;

    writer
        .write_record(table.column_names())
        .context("writing CSV header")?;

    for row in 0..table.n_rows() {
        let record = table.columns.iter().map(|c| c.values[row].to_string());
        writer
            .write_record(record)
            .with_context(|| format!("writing CSV row {row}"))?;
    }
    writer.flush().context("flushing output CSV")?;
    Ok(())
}

/// Comma-joined header of the table's columns, for literal verification
/// against the expected schema string.
pub fn header_string(table: &Table) -> String {
    table.column_names().collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_col(name: &str, values: &[i64]) -> Column {
        Column::new(name, values.iter().map(|&v| CellValue::Int(v)).collect())
    }

    #[test]
    fn missing_columns_preserve_target_order() {
        let mut table = Table::default();
        table.push_column(int_col("job=admin.", &[1]));
        table.push_column(int_col("age", &[0]));

        let missing = missing_columns(&table);
        assert_eq!(missing.len(), 61);
        assert_eq!(missing[0], "job=housemaid");
        assert_eq!(*missing.last().unwrap(), "class");
        assert!(!missing.contains(&"age"));
        assert!(!missing.contains(&"job=admin."));
    }

    #[test]
    fn reindex_emits_exact_target_sequence() {
        let mut table = Table::default();
        table.push_column(int_col("age", &[1, 2]));
        let out = reindex(&table);

        assert_eq!(
            out.column_names().collect::<Vec<_>>(),
            TARGET_COLUMNS.to_vec()
        );
        assert_eq!(out.n_cols(), 63);
    }

    #[test]
    fn reindex_zero_fills_missing_and_drops_extras() {
        let mut table = Table::default();
        table.push_column(int_col("job=admin.", &[1, 0]));
        table.push_column(int_col("not_a_target", &[9, 9]));

        let out = reindex(&table);
        assert!(!out.has_column("not_a_target"));
        assert_eq!(
            out.column("job=admin.").unwrap().values,
            vec![CellValue::Int(1), CellValue::Int(0)]
        );
        // Every absent target column is synthesized as all-zero.
        assert_eq!(
            out.column("poutcome=success").unwrap().values,
            vec![CellValue::Int(0), CellValue::Int(0)]
        );
    }

    #[test]
    fn reindex_of_empty_table_yields_zero_rows() {
        let out = reindex(&Table::default());
        assert_eq!(out.n_cols(), 63);
        assert_eq!(out.n_rows(), 0);
    }

    #[test]
    fn writes_comma_delimited_csv_without_index() {
        let mut table = Table::default();
        table.push_column(int_col("a", &[1, 0]));
        table.push_column(Column::new(
            "b",
            vec![CellValue::Float(0.5), CellValue::Null],
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&table, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "a,b\n1,0.5\n0,\n");
    }

    #[test]
    fn header_string_joins_with_commas() {
        let out = reindex(&Table::default());
        let header = header_string(&out);
        assert!(header.starts_with("age,job=housemaid,"));
        assert!(header.ends_with(",nr.employed,class"));
        assert_eq!(header.matches(',').count(), 62);
    }
}
