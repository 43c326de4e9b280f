//! Bulk item updates from a CSV file

use crate::api::{InventoryApi, ItemUpdate, TagCreate};
use crate::io;
use crate::resolve::LocationResolver;
use anyhow::{Context as _, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Execute the update-items command
///
/// Locations and tags are snapshotted once per invocation. Rows are
/// processed in file order; a resolution or API failure aborts the
/// remaining batch, while rows missing an id are warned about and
/// skipped. Tag names without a matching tag are created on demand,
/// once per name.
///
/// # Errors
///
/// Returns an error if the CSV file cannot be read, a `locationPath`
/// cannot be resolved, or any remote call fails.
pub fn execute(api: &dyn InventoryApi, csv_path: &Path, dry_run: bool) -> Result<()> {
    let rows = io::read_item_rows(csv_path)?;
    info!(
        "Updating {} item(s) from {}",
        rows.len(),
        csv_path.display()
    );

    let locations = api.locations()?;
    let resolver = LocationResolver::new(&locations);
    let mut tags_by_name: HashMap<String, String> = api
        .tags()?
        .into_iter()
        .map(|tag| (tag.name, tag.id))
        .collect();

    let mut updated = 0_usize;
    let mut skipped = 0_usize;

    for (index, row) in rows.iter().enumerate() {
        // +2: header row plus 1-based numbering
        let line = index + 2;
        let id = row.id.trim();
        if id.is_empty() {
            warn!("Row {}: missing item id, skipping '{}'", line, row.name);
            skipped += 1;
            continue;
        }

        let location_id = if row.location_path.trim().is_empty() {
            None
        } else {
            Some(
                resolver
                    .resolve_path(&row.location_path)
                    .with_context(|| format!("Row {line}: item '{}'", row.name))?,
            )
        };

        let mut tag_ids = Vec::new();
        for tag_name in row.tag_names() {
            if let Some(tag_id) = tags_by_name.get(&tag_name) {
                tag_ids.push(tag_id.clone());
            } else if dry_run {
                info!("Dry run: would create tag '{}'", tag_name);
            } else {
                let tag = api.create_tag(&TagCreate {
                    name: tag_name.clone(),
                })?;
                info!("Created tag '{}'", tag_name);
                tag_ids.push(tag.id.clone());
                tags_by_name.insert(tag_name, tag.id);
            }
        }

        if dry_run {
            info!("Dry run: would update item '{}' ({})", row.name, id);
            continue;
        }

        api.update_item(
            id,
            &ItemUpdate {
                name: row.name.clone(),
                description: row.description.clone(),
                quantity: row.quantity,
                location_id,
                tag_ids,
            },
        )
        .with_context(|| format!("Row {line}: failed to update item '{}'", row.name))?;
        updated += 1;
    }

    info!("Updated {} item(s), skipped {}", updated, skipped);
    Ok(())
}
