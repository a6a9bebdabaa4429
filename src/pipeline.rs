//! Pipeline orchestration: load → normalize → encode → enforce schema.

use std::path::Path;

use anyhow::Result;

use crate::data::{encode, loader, normalize, schema};

/// Run the full transformation: read the semicolon-delimited input, scale
/// the numeric columns, one-hot encode the categorical columns, reindex
/// onto the fixed 63-column target schema and write the result as a comma
/// CSV. Returns the output header string so the caller can verify the
/// schema contract by literal comparison.
pub fn run(input: &Path, output: &Path) -> Result<String> {
    log::info!("Reading data from: {}", input.display());
    let mut table = loader::load_csv(input)?;
    log::info!("Loaded {} rows, {} columns", table.n_rows(), table.n_cols());

    log::info!("Normalizing numerical columns...");
    normalize::min_max_scale(&mut table);

    log::info!("One-hot encoding categorical columns...");
    encode::one_hot(&mut table);
    encode::canonicalize_names(&mut table);

    let missing = schema::missing_columns(&table);
    if missing.is_empty() {
        log::info!("All target columns are present in the input data");
    } else {
        log::warn!(
            "{} target columns are missing and will be filled with 0s:",
            missing.len()
        );
        for name in &missing {
            log::warn!("  [MISSING] {name}");
        }
    }

    let out = schema::reindex(&table);
    schema::write_csv(&out, output)?;
    log::info!("Saved transformed data to {}", output.display());

    Ok(schema::header_string(&out))
}
