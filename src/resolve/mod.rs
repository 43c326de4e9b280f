//! Location path resolution
//!
//! Locations arrive from the API as a flat list of records with optional
//! parent references, forming a forest. This module builds a lookup
//! structure over one such snapshot and answers two queries: resolving a
//! slash-delimited path like `"Garage/Shelf/BinA"` to a location id, and
//! building the full root-to-leaf path string for a given id.
//!
//! Duplicate sibling names make resolution ambiguous; rather than picking
//! an arbitrary match, resolution fails with `HomeboxError::PathAmbiguous`.

use crate::api::types::Location;
use crate::error::HomeboxError;
use anyhow::Result;
use std::collections::{HashMap, HashSet};

/// Separator between segments of a location path
pub const PATH_SEPARATOR: char = '/';

/// Lookup structure over one snapshot of location records
///
/// Built once per command invocation. `build_path` results are memoized
/// for the lifetime of the resolver, so exporting many items that share
/// ancestors walks each ancestor chain only once.
pub struct LocationResolver<'src> {
    all: &'src [Location],
    by_id: HashMap<&'src str, &'src Location>,
    path_cache: HashMap<String, String>,
}

impl<'src> LocationResolver<'src> {
    /// Build a resolver over a snapshot of location records
    #[must_use]
    pub fn new(all: &'src [Location]) -> Self {
        let by_id = all.iter().map(|loc| (loc.id.as_str(), loc)).collect();
        Self {
            all,
            by_id,
            path_cache: HashMap::new(),
        }
    }

    /// Get a location record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'src Location> {
        self.by_id.get(id).copied()
    }

    /// Resolve a slash-delimited path to the leaf location's id
    ///
    /// Segments are walked left to right; after the first segment, a
    /// record only matches if its parent is the previously resolved
    /// segment. The first segment matches by name alone, so a path may
    /// start at any depth the way the names make unambiguous.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A segment has no matching record under the expected parent
    ///   (`HomeboxError::PathNotFound`)
    /// - A segment matches more than one record (`HomeboxError::PathAmbiguous`)
    pub fn resolve_path(&self, path: &str) -> Result<String> {
        let mut parent_id: Option<&str> = None;
        let mut resolved: Option<&Location> = None;

        for segment in path.split(PATH_SEPARATOR) {
            let segment = segment.trim();
            let mut matches = self.all.iter().filter(|loc| {
                loc.name == segment
                    && (resolved.is_none() || loc.parent_id.as_deref() == parent_id)
            });

            let first = matches
                .next()
                .ok_or_else(|| HomeboxError::path_not_found(segment, path))?;
            if matches.next().is_some() {
                return Err(HomeboxError::path_ambiguous(segment, path).into());
            }

            parent_id = Some(first.id.as_str());
            resolved = Some(first);
        }

        resolved
            .map(|loc| loc.id.clone())
            .ok_or_else(|| HomeboxError::path_not_found("", path).into())
    }

    /// Find a location by name directly under the named parent
    ///
    /// A `parent` of `None` matches only root locations. The parent is
    /// matched by name, the way import CSV rows reference it.
    ///
    /// # Errors
    ///
    /// Returns `HomeboxError::PathAmbiguous` if more than one sibling
    /// carries the name.
    pub fn find_child(&self, name: &str, parent: Option<&str>) -> Result<Option<&'src Location>> {
        let mut matches = self.all.iter().filter(|loc| {
            loc.name == name
                && match parent {
                    None => loc.parent_id.is_none(),
                    Some(parent_name) => loc
                        .parent_id
                        .as_deref()
                        .and_then(|pid| self.get(pid))
                        .is_some_and(|p| p.name == parent_name),
                }
        });

        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            let path = match parent {
                Some(p) => format!("{p}{PATH_SEPARATOR}{name}"),
                None => name.to_owned(),
            };
            return Err(HomeboxError::path_ambiguous(name, path).into());
        }
        Ok(first)
    }

    /// Find a location by name anywhere in the forest
    ///
    /// # Errors
    ///
    /// Returns `HomeboxError::PathAmbiguous` if the name occurs more
    /// than once.
    pub fn find_by_name(&self, name: &str) -> Result<Option<&'src Location>> {
        let mut matches = self.all.iter().filter(|loc| loc.name == name);
        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            return Err(HomeboxError::path_ambiguous(name, name).into());
        }
        Ok(first)
    }

    /// Build the full root-to-leaf path string for a location id
    ///
    /// Walks parent links upward until a root (or an already-memoized
    /// ancestor) is reached, then joins names with `/`. A root location's
    /// path is exactly its own name.
    ///
    /// # Errors
    ///
    /// Returns `HomeboxError::Decode` if the id is unknown, a parent
    /// reference dangles, or the parent chain contains a cycle.
    pub fn build_path(&mut self, id: &str) -> Result<String> {
        if let Some(path) = self.path_cache.get(id) {
            return Ok(path.clone());
        }

        // Walk upward, collecting the uncached part of the chain
        let mut chain: Vec<(String, String)> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut prefix = String::new();
        let mut cursor = id;

        loop {
            if let Some(path) = self.path_cache.get(cursor) {
                prefix = path.clone();
                break;
            }
            if !seen.insert(cursor) {
                return Err(HomeboxError::decode(format!(
                    "parent cycle detected at location '{cursor}'"
                ))
                .into());
            }
            let loc = self.get(cursor).ok_or_else(|| {
                HomeboxError::decode(format!("unknown location id '{cursor}'"))
            })?;
            chain.push((loc.id.clone(), loc.name.clone()));
            match loc.parent_id.as_deref() {
                Some(parent) => cursor = parent,
                None => break,
            }
        }

        // Unwind root-to-leaf, memoizing every intermediate path
        let mut path = prefix;
        for (loc_id, name) in chain.into_iter().rev() {
            if path.is_empty() {
                path = name;
            } else {
                path = format!("{path}{PATH_SEPARATOR}{name}");
            }
            self.path_cache.insert(loc_id, path.clone());
        }
        Ok(path)
    }
}
