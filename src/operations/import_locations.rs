//! Bulk location creation from a CSV file

use crate::api::InventoryApi;
use crate::io;
use crate::operations::create_location;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::info;

/// Execute the import-locations command
///
/// Rows are processed in file order, one remote call per record; a
/// failure aborts the remaining batch. Each row re-fetches the location
/// snapshot, so a row may reference a parent created earlier in the
/// same file.
///
/// # Errors
///
/// Returns an error if the CSV file cannot be read or any row fails to
/// create.
pub fn execute(api: &dyn InventoryApi, csv_path: &Path, dry_run: bool) -> Result<()> {
    let rows = io::read_location_rows(csv_path)?;
    info!(
        "Importing {} location(s) from {}",
        rows.len(),
        csv_path.display()
    );

    for row in &rows {
        create_location::create_one(
            api,
            &row.name,
            &row.description,
            row.parent.as_deref(),
            dry_run,
        )
        .with_context(|| format!("Failed to import location '{}'", row.name))?;
    }

    Ok(())
}
