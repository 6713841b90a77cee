//! Registry of named image grids.
//!
//! One registry is created when the page's UI is initialised and lives as
//! long as the page. Grids are created lazily on first request and are never
//! removed. The registry refuses to grow past its configured limit; this is a
//! guard against runaway grid creation, not an eviction policy.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::grid::ImageGrid;
use gallery_dom::{Console, DomFacade};

/// Owns every [`ImageGrid`] of a page, keyed by name.
#[derive(Debug)]
pub struct ImageGridRegistry {
    grids: HashMap<String, ImageGrid>,
    config: GridConfig,
    console: Console,
}

impl Default for ImageGridRegistry {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl ImageGridRegistry {
    pub fn new(config: GridConfig) -> Self {
        Self {
            grids: HashMap::new(),
            console: Console::new(config.log_enabled),
            config,
        }
    }

    /// Return the grid registered under `name`, creating it from `dom` on
    /// first use.
    ///
    /// An existing grid is returned unchanged; its elements are not
    /// re-resolved even if the page changed since it was created.
    ///
    /// # Errors
    /// - [`GridError::EmptyName`] for an empty name.
    /// - [`GridError::CapacityExceeded`] if the registry is already full.
    /// - [`GridError::ElementNotFound`] if the page lacks a required element.
    ///
    /// Nothing is registered when an error is returned.
    pub fn instance<D>(&mut self, name: &str, dom: &D) -> Result<&mut ImageGrid>
    where
        D: DomFacade + ?Sized,
    {
        if name.is_empty() {
            return Err(GridError::EmptyName);
        }
        let count = self.grids.len();
        match self.grids.entry(name.to_owned()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                if count >= self.config.capacity_limit {
                    let error = GridError::CapacityExceeded {
                        name: name.to_owned(),
                        limit: self.config.capacity_limit,
                    };
                    self.console.error(error.to_string());
                    return Err(error);
                }
                let grid = ImageGrid::resolve(name, dom, &self.config, self.console)
                    .inspect_err(|error| self.console.error(error.to_string()))?;
                self.console.log(format!("ImageGrid {name} created."));
                Ok(entry.insert(grid))
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ImageGrid> {
        self.grids.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ImageGrid> {
        self.grids.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.grids.contains_key(name)
    }

    /// Registered grid names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.grids.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub const fn limit(&self) -> usize {
        self.config.capacity_limit
    }

    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    pub const fn console(&self) -> Console {
        self.console
    }
}
