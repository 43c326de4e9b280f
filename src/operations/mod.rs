//! Subcommand implementations
//!
//! One module per subcommand. Each operation takes the API seam, its own
//! arguments, and the dry-run flag; batch operations run sequentially and
//! abort on the first failure.

pub mod create_location;
pub mod export_items;
pub mod import_locations;
pub mod rename_location;
pub mod update_items;
