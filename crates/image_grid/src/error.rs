//! Error types for image grids.

use crate::key::ElementKey;
use gallery_dom::DomError;
use thiserror::Error;

/// Image grid error type.
#[derive(Error, Debug)]
pub enum GridError {
    /// Creating another grid would exceed the registry's limit
    #[error("Can't create ImageGrid {name} because it would exceed IMAGE_GRID_LIMIT={limit}.")]
    CapacityExceeded { name: String, limit: usize },

    /// A required element is missing from the page
    #[error("ImageGrid {grid} is missing element #{key}")]
    ElementNotFound { grid: String, key: ElementKey },

    /// Grid names must be non-empty
    #[error("ImageGrid name must not be empty")]
    EmptyName,

    /// The document rejected an operation
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Result type alias for image grid operations.
pub type Result<T> = core::result::Result<T, GridError>;
