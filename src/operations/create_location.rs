//! Create a single location, optionally under a parent

use crate::api::{InventoryApi, Location, LocationCreate};
use crate::error::HomeboxError;
use crate::resolve::LocationResolver;
use anyhow::Result;
use tracing::info;

/// Execute the create-location command
///
/// # Errors
///
/// Returns an error if the location list cannot be fetched, the named
/// parent does not exist, or the create call fails.
pub fn execute(
    api: &dyn InventoryApi,
    name: &str,
    description: &str,
    parent: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    create_one(api, name, description, parent, dry_run)?;
    Ok(())
}

/// Create one location unless an identical one already exists
///
/// Fetches a fresh location snapshot, so batch callers see locations
/// created by earlier rows. Returns `None` when the location already
/// existed or the call was suppressed by dry-run.
///
/// Dry-run logs the intended create before resolving the parent: in a
/// batch preview the parent may itself be a suppressed earlier row, so
/// it cannot be required to exist yet.
pub(crate) fn create_one(
    api: &dyn InventoryApi,
    name: &str,
    description: &str,
    parent: Option<&str>,
    dry_run: bool,
) -> Result<Option<Location>> {
    let locations = api.locations()?;
    let resolver = LocationResolver::new(&locations);

    if resolver.find_child(name, parent)?.is_some() {
        info!(
            "Location '{}' (parent: '{}') already exists. Skipping.",
            name,
            parent.unwrap_or("-")
        );
        return Ok(None);
    }

    if dry_run {
        info!(
            "Dry run: would create location '{}' under parent '{}'",
            name,
            parent.unwrap_or("-")
        );
        return Ok(None);
    }

    let parent_id = match parent {
        Some(parent_name) => {
            let parent_loc = resolver.find_by_name(parent_name)?.ok_or_else(|| {
                HomeboxError::path_not_found(parent_name, format!("{parent_name}/{name}"))
            })?;
            Some(parent_loc.id.clone())
        }
        None => None,
    };

    let created = api.create_location(&LocationCreate {
        name: name.to_owned(),
        description: description.to_owned(),
        parent_id,
    })?;
    info!(
        "Created location '{}' under parent '{}'",
        name,
        parent.unwrap_or("-")
    );
    Ok(Some(created))
}
