//! Export all items to a CSV file

use crate::api::InventoryApi;
use crate::io::{self, ItemRow};
use crate::resolve::LocationResolver;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Execute the export-items command
///
/// Items and locations are snapshotted once; one resolver instance
/// builds every `locationPath`, so shared ancestors are walked only
/// once. Items without a location get an empty path.
///
/// # Errors
///
/// Returns an error if the snapshots cannot be fetched, a location path
/// cannot be built, or the CSV file cannot be written.
pub fn execute(api: &dyn InventoryApi, csv_path: &Path, dry_run: bool) -> Result<()> {
    let items = api.items()?;
    let locations = api.locations()?;
    let mut resolver = LocationResolver::new(&locations);

    let mut rows = Vec::with_capacity(items.len());
    for item in &items {
        let location_path = match item.location.as_ref() {
            Some(location) => resolver.build_path(&location.id)?,
            None => String::new(),
        };
        let tags = item
            .tags
            .iter()
            .map(|tag| tag.name.as_str())
            .collect::<Vec<_>>()
            .join(",");

        rows.push(ItemRow {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            location_path,
            tags,
        });
    }

    if dry_run {
        info!(
            "Dry run: would write {} item(s) to {}",
            rows.len(),
            csv_path.display()
        );
        return Ok(());
    }

    io::write_item_rows(csv_path, &rows)?;
    info!("Exported {} item(s) to {}", rows.len(), csv_path.display());
    Ok(())
}
