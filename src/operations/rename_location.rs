//! Rename a location identified by its path

use crate::api::{InventoryApi, LocationUpdate};
use crate::error::HomeboxError;
use crate::resolve::LocationResolver;
use anyhow::Result;
use tracing::info;

/// Execute the rename-location command
///
/// The path is resolved against a fresh snapshot; description and parent
/// are carried over unchanged.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the update call
/// fails.
pub fn execute(api: &dyn InventoryApi, path: &str, new_name: &str, dry_run: bool) -> Result<()> {
    let locations = api.locations()?;
    let resolver = LocationResolver::new(&locations);

    let id = resolver.resolve_path(path)?;
    let current = resolver
        .get(&id)
        .ok_or_else(|| HomeboxError::decode(format!("unknown location id '{id}'")))?;

    if dry_run {
        info!("Dry run: would rename location '{}' to '{}'", path, new_name);
        return Ok(());
    }

    api.update_location(
        &id,
        &LocationUpdate {
            name: new_name.to_owned(),
            description: current.description.clone(),
            parent_id: current.parent_id.clone(),
        },
    )?;
    info!("Renamed location '{}' to '{}'", path, new_name);
    Ok(())
}
