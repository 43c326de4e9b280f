//! Inventory API abstraction
//!
//! This module provides a unified trait for all remote inventory calls,
//! allowing for easy testing with mock implementations.

use anyhow::Result;

pub mod mock;
pub mod real;
pub mod types;

pub use mock::MockApi;
pub use real::HomeboxClient;
pub use types::{
    Connection, Item, ItemUpdate, Location, LocationCreate, LocationRef, LocationUpdate, Tag,
    TagCreate,
};

/// Unified trait for inventory API operations
///
/// This trait abstracts the authenticated REST calls the subcommands
/// depend on. It wraps only the verbs the CLI actually issues.
///
/// # Implementations
/// - `HomeboxClient`: production implementation over a blocking HTTP client
/// - `MockApi`: test implementation using in-memory storage
pub trait InventoryApi {
    /// Fetch all locations (`GET /locations`)
    fn locations(&self) -> Result<Vec<Location>>;

    /// Create a location (`POST /locations`)
    fn create_location(&self, req: &LocationCreate) -> Result<Location>;

    /// Update a location (`PUT /locations/{id}`)
    fn update_location(&self, id: &str, req: &LocationUpdate) -> Result<Location>;

    /// Fetch all tags (`GET /tags`)
    fn tags(&self) -> Result<Vec<Tag>>;

    /// Create a tag (`POST /tags`)
    fn create_tag(&self, req: &TagCreate) -> Result<Tag>;

    /// Fetch all items (`GET /items`)
    fn items(&self) -> Result<Vec<Item>>;

    /// Update an item (`PUT /items/{id}`)
    fn update_item(&self, id: &str, req: &ItemUpdate) -> Result<Item>;
}
