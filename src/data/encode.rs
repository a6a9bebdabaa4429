use std::collections::BTreeSet;

use super::model::{CellValue, Column, Table};

/// The 10 categorical feature columns expanded via one-hot encoding.
///
/// Precondition: no entry is a prefix of another entry followed by `_`
/// (e.g. no `job` alongside `job_extra`). [`canonicalize_names`] takes the
/// first matching prefix and relies on names matching at most one entry.
pub const CATEGORICAL_COLUMNS: [&str; 10] = [
    "job",
    "marital",
    "education",
    "default",
    "housing",
    "loan",
    "contact",
    "month",
    "day_of_week",
    "poutcome",
];

/// Literal substitutions turning yes/no indicator names into the numeric
/// form the output schema uses (`=unknown` variants pass through).
const BINARY_RENAMES: [(&str, &str); 6] = [
    ("default=no", "default=0"),
    ("default=yes", "default=1"),
    ("housing=no", "housing=0"),
    ("housing=yes", "housing=1"),
    ("loan=no", "loan=0"),
    ("loan=yes", "loan=1"),
];

// ---------------------------------------------------------------------------
// One-hot expansion
// ---------------------------------------------------------------------------

/// Expand every configured categorical column present in the table: one
/// indicator column `"<column>_<v>"` per distinct observed value `v`,
/// holding integer 1/0, appended after the existing columns; the original
/// column is removed. Null cells contribute no distinct value and read 0 in
/// every indicator. Configured columns absent from the table are silently
/// skipped.
pub fn one_hot(table: &mut Table) {
    for name in CATEGORICAL_COLUMNS {
        let Some(original) = table.remove_column(name) else {
            continue;
        };

        let distinct: BTreeSet<String> = original
            .values
            .iter()
            .filter(|v| !v.is_null())
            .map(|v| v.to_string())
            .collect();

        for value in distinct {
            let indicator = original
                .values
                .iter()
                .map(|cell| {
                    let hit = !cell.is_null() && cell.to_string() == value;
                    CellValue::Int(hit as i64)
                })
                .collect();
            table.push_column(Column::new(format!("{name}_{value}"), indicator));
        }
    }
}

// ---------------------------------------------------------------------------
// Name canonicalization
// ---------------------------------------------------------------------------

/// Rewrite indicator names into the output schema's `field=value` form:
/// the first matching `"<cat>_"` prefix becomes `"<cat>="`, then the
/// yes/no → 1/0 substitutions for the three binary fields are applied.
pub fn canonicalize_names(table: &mut Table) {
    for col in &mut table.columns {
        col.name = canonical_name(&col.name);
    }
}

fn canonical_name(name: &str) -> String {
    let mut out = name.to_string();

    for prefix in CATEGORICAL_COLUMNS {
        let underscored = format!("{prefix}_");
        if out.starts_with(&underscored) {
            out = out.replacen(&underscored, &format!("{prefix}="), 1);
            break;
        }
    }

    for (from, to) in BINARY_RENAMES {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn str_col(name: &str, values: &[&str]) -> Column {
        Column::new(
            name,
            values.iter().map(|v| CellValue::Str(v.to_string())).collect(),
        )
    }

    #[test]
    fn expands_distinct_values_into_indicators() {
        let mut table = Table::default();
        table.push_column(str_col("job", &["admin.", "services", "admin."]));
        one_hot(&mut table);

        assert!(!table.has_column("job"));
        assert_eq!(
            table.column("job_admin.").unwrap().values,
            vec![CellValue::Int(1), CellValue::Int(0), CellValue::Int(1)]
        );
        assert_eq!(
            table.column("job_services").unwrap().values,
            vec![CellValue::Int(0), CellValue::Int(1), CellValue::Int(0)]
        );
    }

    #[test]
    fn null_cells_read_zero_in_every_indicator() {
        let mut table = Table::default();
        table.push_column(Column::new(
            "poutcome",
            vec![
                CellValue::Str("failure".into()),
                CellValue::Null,
                CellValue::Str("success".into()),
            ],
        ));
        one_hot(&mut table);

        // No indicator column for the null itself.
        assert_eq!(table.n_cols(), 2);
        assert_eq!(
            table.column("poutcome_failure").unwrap().values[1],
            CellValue::Int(0)
        );
        assert_eq!(
            table.column("poutcome_success").unwrap().values[1],
            CellValue::Int(0)
        );
    }

    #[test]
    fn unconfigured_columns_survive_expansion() {
        let mut table = Table::default();
        table.push_column(str_col("job", &["retired"]));
        table.push_column(Column::new("age", vec![CellValue::Int(61)]));
        one_hot(&mut table);

        assert!(table.has_column("age"));
        assert!(table.has_column("job_retired"));
    }

    #[test]
    fn prefix_rename_produces_field_value_form() {
        assert_eq!(canonical_name("job_admin."), "job=admin.");
        assert_eq!(canonical_name("day_of_week_mon"), "day_of_week=mon");
        assert_eq!(canonical_name("month_may"), "month=may");
        // Non-categorical names pass through untouched.
        assert_eq!(canonical_name("age"), "age");
        assert_eq!(canonical_name("emp.var.rate"), "emp.var.rate");
    }

    #[test]
    fn binary_fields_rename_to_numeric_form() {
        assert_eq!(canonical_name("default_no"), "default=0");
        assert_eq!(canonical_name("default_yes"), "default=1");
        assert_eq!(canonical_name("housing_no"), "housing=0");
        assert_eq!(canonical_name("housing_yes"), "housing=1");
        assert_eq!(canonical_name("loan_no"), "loan=0");
        assert_eq!(canonical_name("loan_yes"), "loan=1");
        // The unknown variant keeps its textual form.
        assert_eq!(canonical_name("housing_unknown"), "housing=unknown");
    }

    #[test]
    fn one_hot_then_canonicalize_yields_target_names() {
        let mut table = Table::default();
        table.push_column(str_col("housing", &["yes", "no", "unknown"]));
        one_hot(&mut table);
        canonicalize_names(&mut table);

        let mut names: Vec<_> = table.column_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(names, vec!["housing=0", "housing=1", "housing=unknown"]);
        assert_eq!(
            table.column("housing=1").unwrap().values,
            vec![CellValue::Int(1), CellValue::Int(0), CellValue::Int(0)]
        );
    }
}
