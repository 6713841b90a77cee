//! Element keys derived from a grid's name.

use core::fmt;

/// The page element an image grid expects, identified by grid name.
///
/// `Display` renders the element id used in the markup.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKey {
    /// Thumbnail container, `ig-{name}`.
    Grid(String),
    /// Detail container holding the full-size images, `ig-target-{name}`.
    Target(String),
    /// Caption paired with the image at `index`, `{name}-caption-{index}`.
    Caption { name: String, index: usize },
}

impl ElementKey {
    #[inline]
    pub fn grid(name: &str) -> Self {
        Self::Grid(name.to_owned())
    }

    #[inline]
    pub fn target(name: &str) -> Self {
        Self::Target(name.to_owned())
    }

    #[inline]
    pub fn caption(name: &str, index: usize) -> Self {
        Self::Caption {
            name: name.to_owned(),
            index,
        }
    }

    /// The element id this key resolves to.
    #[inline]
    pub fn element_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(name) => write!(formatter, "ig-{name}"),
            Self::Target(name) => write!(formatter, "ig-target-{name}"),
            Self::Caption { name, index } => write!(formatter, "{name}-caption-{index}"),
        }
    }
}
