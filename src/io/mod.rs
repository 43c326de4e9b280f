//! CSV reading and writing
//!
//! Row shapes for the import/export files. Headers are bound by serde
//! field names; `locationPath` keeps its on-disk spelling via a rename.

use crate::error::HomeboxError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row of a location import file (`name,description,parent`)
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRow {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Parent location name; empty cell means a root location
    #[serde(default)]
    pub parent: Option<String>,
}

/// One row of an item export/update file
/// (`id,name,description,quantity,locationPath,tags`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRow {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: i64,
    /// Slash-delimited location hierarchy, root to leaf
    #[serde(rename = "locationPath", default)]
    pub location_path: String,
    /// Comma-separated tag names
    #[serde(default)]
    pub tags: String,
}

impl ItemRow {
    /// Split the `tags` cell into trimmed, non-empty tag names
    #[must_use]
    pub fn tag_names(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Read location rows from a CSV file with a header row
///
/// # Errors
///
/// Returns `HomeboxError::Csv` if the file cannot be opened or a row
/// does not match the expected shape.
pub fn read_location_rows(path: &Path) -> Result<Vec<LocationRow>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| HomeboxError::csv(format!("failed to open '{}': {e}", path.display())))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: LocationRow = record
            .map_err(|e| HomeboxError::csv(format!("in '{}': {e}", path.display())))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read item rows from a CSV file with a header row
///
/// # Errors
///
/// Returns `HomeboxError::Csv` if the file cannot be opened or a row
/// does not match the expected shape.
pub fn read_item_rows(path: &Path) -> Result<Vec<ItemRow>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| HomeboxError::csv(format!("failed to open '{}': {e}", path.display())))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: ItemRow = record
            .map_err(|e| HomeboxError::csv(format!("in '{}': {e}", path.display())))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Write item rows to a CSV file, header row included
///
/// # Errors
///
/// Returns `HomeboxError::Csv` if the file cannot be created or a row
/// cannot be serialized.
pub fn write_item_rows(path: &Path, rows: &[ItemRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| HomeboxError::csv(format!("failed to create '{}': {e}", path.display())))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| HomeboxError::csv(format!("writing '{}': {e}", path.display())))?;
    }
    writer
        .flush()
        .map_err(|e| HomeboxError::csv(format!("writing '{}': {e}", path.display())))?;
    Ok(())
}
