//! Image grid widgets: a thumbnail grid that enlarges one selected image and
//! hides the rest, with a way back to the grid.
//!
//! Grids are obtained by name from an [`ImageGridRegistry`] and drive page
//! elements through the [`gallery_dom::DomFacade`] trait.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]

pub mod config;
pub mod error;
pub mod grid;
pub mod key;
pub mod registry;

pub use config::{DEFAULT_CAPACITY_LIMIT, DEFAULT_HIDDEN_CLASS, GridConfig};
pub use error::{GridError, Result};
pub use grid::{ImageGrid, ViewState};
pub use key::ElementKey;
pub use registry::ImageGridRegistry;
