//! Configuration settings for image grid registries.
//!
//! Configuration can be loaded from environment variables or constructed
//! programmatically.

use gallery_dom::is_valid_class_token;
use std::env;

/// Maximum number of named grids a registry will create.
pub const DEFAULT_CAPACITY_LIMIT: usize = 25;
/// Class toggled on the detail container while an image is open.
pub const DEFAULT_HIDDEN_CLASS: &str = "no-display";

/// Runtime configuration for an [`ImageGridRegistry`](crate::ImageGridRegistry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Hard cap on distinct grids; creating one more is an error
    pub capacity_limit: usize,
    /// Whether the diagnostic console emits anything
    pub log_enabled: bool,
    /// CSS class flipped on the detail container by open/close
    pub hidden_class: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            capacity_limit: DEFAULT_CAPACITY_LIMIT,
            log_enabled: false,
            hidden_class: DEFAULT_HIDDEN_CLASS.to_owned(),
        }
    }
}

impl GridConfig {
    /// Construct a new `GridConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `capacity_limit` - Maximum number of grids (minimum 1)
    /// * `log_enabled` - Whether console output is emitted
    /// * `hidden_class` - Class toggled on the detail container; an empty or
    ///   whitespace-bearing value falls back to [`DEFAULT_HIDDEN_CLASS`]
    #[inline]
    #[must_use]
    pub fn new(capacity_limit: usize, log_enabled: bool, hidden_class: &str) -> Self {
        Self {
            capacity_limit: capacity_limit.max(1),
            log_enabled,
            hidden_class: hidden_class_or_default(Some(hidden_class)),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `IMAGE_GRID_LIMIT`: Maximum number of grids (default: 25)
    /// - `IMAGE_GRID_LOG`: Set to "1" to enable console output (default: disabled)
    /// - `IMAGE_GRID_HIDDEN_CLASS`: Class toggled on the detail container (default: `no-display`)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, applying the same rules as
    /// [`GridConfig::from_env`].
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity_limit = lookup("IMAGE_GRID_LIMIT")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_CAPACITY_LIMIT);
        let log_enabled = lookup("IMAGE_GRID_LOG").as_deref() == Some("1");
        let hidden_class =
            hidden_class_or_default(lookup("IMAGE_GRID_HIDDEN_CLASS").as_deref().map(str::trim));
        Self {
            capacity_limit,
            log_enabled,
            hidden_class,
        }
    }
}

/// A single class token, or the default when `value` is missing or not a valid token.
fn hidden_class_or_default(value: Option<&str>) -> String {
    value
        .filter(|val| is_valid_class_token(val))
        .unwrap_or(DEFAULT_HIDDEN_CLASS)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = GridConfig::default();
        assert_eq!(config.capacity_limit, 25);
        assert!(!config.log_enabled);
        assert_eq!(config.hidden_class, "no-display");
        assert_eq!(GridConfig::from_lookup(lookup_from(&[])), config);
    }

    #[test]
    fn reads_overrides() {
        let config = GridConfig::from_lookup(lookup_from(&[
            ("IMAGE_GRID_LIMIT", "3"),
            ("IMAGE_GRID_LOG", "1"),
            ("IMAGE_GRID_HIDDEN_CLASS", "is-hidden"),
        ]));
        assert_eq!(config, GridConfig::new(3, true, "is-hidden"));
    }

    #[test]
    fn rejects_bad_values() {
        let config = GridConfig::from_lookup(lookup_from(&[
            ("IMAGE_GRID_LIMIT", "0"),
            ("IMAGE_GRID_LOG", "yes"),
            ("IMAGE_GRID_HIDDEN_CLASS", "  "),
        ]));
        assert_eq!(config, GridConfig::default());
        assert_eq!(GridConfig::new(0, false, "x").capacity_limit, 1);
    }

    #[test]
    fn hidden_class_must_be_one_token() {
        assert_eq!(GridConfig::new(5, false, "is open").hidden_class, "no-display");
        assert_eq!(GridConfig::new(5, false, "").hidden_class, "no-display");
        assert_eq!(GridConfig::new(5, false, "is-open").hidden_class, "is-open");

        let config = GridConfig::from_lookup(lookup_from(&[("IMAGE_GRID_HIDDEN_CLASS", "is\topen")]));
        assert_eq!(config.hidden_class, "no-display");
        let padded = GridConfig::from_lookup(lookup_from(&[("IMAGE_GRID_HIDDEN_CLASS", " shut ")]));
        assert_eq!(padded.hidden_class, "shut");
    }
}
