//! Mock API implementation for testing

use crate::api::types::{
    Item, ItemUpdate, Location, LocationCreate, LocationRef, LocationUpdate, Tag, TagCreate,
};
use crate::api::InventoryApi;
use crate::error::HomeboxError;
use anyhow::{anyhow, Result};
use std::sync::{Arc, RwLock};

/// In-memory implementation of `InventoryApi` for testing
///
/// `MockApi` holds locations, tags, and items behind a lock and records
/// every mutating call it receives, so tests can assert both on the
/// resulting state and on which writes were (or were not) issued.
///
/// # Example
/// ```
/// use homebox_cli::api::{InventoryApi, MockApi};
///
/// let api = MockApi::new()
///     .with_location("1", "Garage", None)
///     .with_location("2", "Shelf", Some("1"));
///
/// assert_eq!(api.locations().unwrap().len(), 2);
/// assert!(api.mutations().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct MockApi {
    state: Arc<RwLock<MockApiState>>,
}

#[derive(Default)]
struct MockApiState {
    locations: Vec<Location>,
    tags: Vec<Tag>,
    items: Vec<Item>,
    mutations: Vec<String>,
    next_id: u64,
}

impl MockApiState {
    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

impl MockApi {
    /// Create a new empty `MockApi`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location (builder pattern)
    #[must_use]
    pub fn with_location(self, id: &str, name: &str, parent_id: Option<&str>) -> Self {
        {
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            state.locations.push(Location {
                id: id.to_owned(),
                name: name.to_owned(),
                description: String::new(),
                parent_id: parent_id.map(str::to_owned),
            });
        }
        self
    }

    /// Add a tag (builder pattern)
    #[must_use]
    pub fn with_tag(self, id: &str, name: &str) -> Self {
        {
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            state.tags.push(Tag {
                id: id.to_owned(),
                name: name.to_owned(),
            });
        }
        self
    }

    /// Add an item (builder pattern)
    #[must_use]
    pub fn with_item(self, id: &str, name: &str, quantity: i64, location_id: Option<&str>) -> Self {
        {
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            let location = location_id.and_then(|lid| {
                state
                    .locations
                    .iter()
                    .find(|l| l.id == lid)
                    .map(|l| LocationRef {
                        id: l.id.clone(),
                        name: l.name.clone(),
                    })
            });
            state.items.push(Item {
                id: id.to_owned(),
                name: name.to_owned(),
                description: String::new(),
                quantity,
                location,
                tags: Vec::new(),
            });
        }
        self
    }

    /// All mutating calls received so far, in order, as `verb:subject` strings
    #[must_use]
    pub fn mutations(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .mutations
            .clone()
    }

    /// Look up a location by name, if present
    #[must_use]
    pub fn location_named(&self, name: &str) -> Option<Location> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .locations
            .iter()
            .find(|l| l.name == name)
            .cloned()
    }

    /// Look up a tag by name, if present
    #[must_use]
    pub fn tag_named(&self, name: &str) -> Option<Tag> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .tags
            .iter()
            .find(|t| t.name == name)
            .cloned()
    }

    /// Fetch a stored item by id, if present
    #[must_use]
    pub fn item(&self, id: &str) -> Option<Item> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .items
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }
}

impl InventoryApi for MockApi {
    fn locations(&self) -> Result<Vec<Location>> {
        let state = self
            .state
            .read()
            .map_err(|e| anyhow!("mock lock poisoned: {e}"))?;
        Ok(state.locations.clone())
    }

    fn create_location(&self, req: &LocationCreate) -> Result<Location> {
        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow!("mock lock poisoned: {e}"))?;
        state.mutations.push(format!("create_location:{}", req.name));
        let id = state.fresh_id("loc");
        let location = Location {
            id,
            name: req.name.clone(),
            description: req.description.clone(),
            parent_id: req.parent_id.clone(),
        };
        state.locations.push(location.clone());
        Ok(location)
    }

    fn update_location(&self, id: &str, req: &LocationUpdate) -> Result<Location> {
        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow!("mock lock poisoned: {e}"))?;
        state
            .mutations
            .push(format!("update_location:{id}:{}", req.name));
        let location = state
            .locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| HomeboxError::api(404, format!("location '{id}' not found")))?;
        location.name = req.name.clone();
        location.description = req.description.clone();
        location.parent_id = req.parent_id.clone();
        Ok(location.clone())
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        let state = self
            .state
            .read()
            .map_err(|e| anyhow!("mock lock poisoned: {e}"))?;
        Ok(state.tags.clone())
    }

    fn create_tag(&self, req: &TagCreate) -> Result<Tag> {
        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow!("mock lock poisoned: {e}"))?;
        state.mutations.push(format!("create_tag:{}", req.name));
        let id = state.fresh_id("tag");
        let tag = Tag {
            id,
            name: req.name.clone(),
        };
        state.tags.push(tag.clone());
        Ok(tag)
    }

    fn items(&self) -> Result<Vec<Item>> {
        let state = self
            .state
            .read()
            .map_err(|e| anyhow!("mock lock poisoned: {e}"))?;
        Ok(state.items.clone())
    }

    fn update_item(&self, id: &str, req: &ItemUpdate) -> Result<Item> {
        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow!("mock lock poisoned: {e}"))?;
        state.mutations.push(format!("update_item:{id}"));

        let location = req.location_id.as_ref().and_then(|lid| {
            state
                .locations
                .iter()
                .find(|l| &l.id == lid)
                .map(|l| LocationRef {
                    id: l.id.clone(),
                    name: l.name.clone(),
                })
        });
        let tags: Vec<Tag> = req
            .tag_ids
            .iter()
            .filter_map(|tid| state.tags.iter().find(|t| &t.id == tid).cloned())
            .collect();

        let item = state
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| HomeboxError::api(404, format!("item '{id}' not found")))?;
        item.name = req.name.clone();
        item.description = req.description.clone();
        item.quantity = req.quantity;
        item.location = location;
        item.tags = tags;
        Ok(item.clone())
    }
}
