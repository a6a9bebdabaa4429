use super::model::{CellValue, Table};

/// The 10 numerical feature columns scaled to [0, 1].
pub const NUMERIC_COLUMNS: [&str; 10] = [
    "age",
    "duration",
    "campaign",
    "pdays",
    "previous",
    "emp.var.rate",
    "cons.price.idx",
    "cons.conf.idx",
    "euribor3m",
    "nr.employed",
];

/// Min-max scale every configured numeric column present in the table,
/// in place. Columns in [`NUMERIC_COLUMNS`] but absent from the table are
/// silently skipped; column names and presence are unchanged.
///
/// Per column: with `max != min`, each numeric value `v` becomes
/// `(v - min) / (max - min)` and nulls stay null. A zero-variance column
/// (`max == min`) is set to `0.0` in every row rather than dividing by zero.
pub fn min_max_scale(table: &mut Table) {
    for name in NUMERIC_COLUMNS {
        let Some(col) = table.column_mut(name) else {
            continue;
        };

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in &col.values {
            if let Some(v) = value.as_f64() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min > max {
            // No numeric values at all; nothing to scale.
            continue;
        }

        if max != min {
            let range = max - min;
            for value in &mut col.values {
                if let Some(v) = value.as_f64() {
                    *value = CellValue::Float((v - min) / range);
                }
            }
        } else {
            for value in &mut col.values {
                *value = CellValue::Float(0.0);
            }
        }
    }
}
