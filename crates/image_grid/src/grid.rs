//! A single image grid widget and its view transitions.
//!
//! A grid is bound to three kinds of page elements: the thumbnail container,
//! the detail container, and one caption per image found beneath the detail
//! container. All of them are resolved once, when the grid is created.
//!
//! Transitions:
//! - `Grid --open_image(id)--> Detail(index of id)` (`Detail(None)` when nothing matches)
//! - `Detail(_) --open_image(id)--> Detail(index of id)`
//! - `Detail(_) --close_image()--> Grid`

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::key::ElementKey;
use gallery_dom::{Console, DomFacade, NodeKey};
use std::collections::HashSet;

/// Which half of the widget is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Thumbnail container visible, detail container hidden.
    #[default]
    Grid,
    /// Detail container visible. Holds the index of the open image, or
    /// `None` when the requested id matched no captured image.
    Detail(Option<usize>),
}

#[derive(Debug, Clone, Copy)]
struct GridImage {
    element: NodeKey,
    caption: NodeKey,
}

/// One named gallery widget bound to a region of the page.
#[derive(Debug)]
pub struct ImageGrid {
    name: String,
    grid_element: NodeKey,
    target_element: NodeKey,
    images: Vec<GridImage>,
    view: ViewState,
    hidden_class: String,
    console: Console,
}

impl ImageGrid {
    /// Resolve every element the grid needs.
    ///
    /// # Errors
    /// [`GridError::ElementNotFound`] for the first missing container or caption.
    pub(crate) fn resolve<D>(name: &str, dom: &D, config: &GridConfig, console: Console) -> Result<Self>
    where
        D: DomFacade + ?Sized,
    {
        let lookup = |key: ElementKey| -> Result<NodeKey> {
            dom.get_by_id(&key.element_id())
                .ok_or_else(|| GridError::ElementNotFound {
                    grid: name.to_owned(),
                    key,
                })
        };
        let grid_element = lookup(ElementKey::grid(name))?;
        let target_element = lookup(ElementKey::target(name))?;
        let images = dom
            .img_elements(target_element)?
            .into_iter()
            .enumerate()
            .map(|(index, element)| -> Result<GridImage> {
                let caption = lookup(ElementKey::caption(name, index))?;
                Ok(GridImage { element, caption })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut seen = HashSet::new();
        for image in &images {
            if let Some(id) = dom.element_id(image.element) {
                if !seen.insert(id.clone()) {
                    console.warn(format!("ImageGrid {name} has more than one image with id {id}."));
                }
            }
        }

        Ok(Self {
            name: name.to_owned(),
            grid_element,
            target_element,
            images,
            view: ViewState::Grid,
            hidden_class: config.hidden_class.clone(),
            console,
        })
    }

    /// Hide the grid and show the image whose element id is `image_id`,
    /// together with its caption. Every other image and caption is hidden.
    ///
    /// An id that matches nothing still hides the grid and all images and
    /// leaves the grid in `Detail(None)`. If several images share the id,
    /// all of them are shown and the last one becomes the open index.
    ///
    /// The hidden class is toggled on the detail container only when coming
    /// from grid view; reopening while in detail view leaves it alone.
    ///
    /// # Errors
    /// Fails only if a captured element is no longer part of the document.
    pub fn open_image<D>(&mut self, dom: &mut D, image_id: &str) -> Result<ViewState>
    where
        D: DomFacade + ?Sized,
    {
        dom.hide(self.grid_element)?;
        let mut open_index = None;
        let mut matched = 0_usize;
        for (index, image) in self.images.iter().enumerate() {
            if dom.element_id(image.element).as_deref() == Some(image_id) {
                dom.show(image.element)?;
                dom.show(image.caption)?;
                open_index = Some(index);
                matched += 1;
            } else {
                dom.hide(image.element)?;
                dom.hide(image.caption)?;
            }
        }
        match matched {
            0 => self.console.warn(format!(
                "ImageGrid {} has no image with id {image_id}.",
                self.name
            )),
            1 => {}
            _ => self.console.warn(format!(
                "ImageGrid {} opened {matched} images with id {image_id}.",
                self.name
            )),
        }
        if self.view == ViewState::Grid {
            dom.toggle_class(self.target_element, &self.hidden_class)?;
        }
        dom.show(self.target_element)?;
        self.view = ViewState::Detail(open_index);
        log::debug!("ImageGrid {} -> {:?}", self.name, self.view);
        Ok(self.view)
    }

    /// Hide every image and caption and the detail container, then show the grid.
    ///
    /// The hidden class is toggled back only when leaving detail view, so a
    /// close while already in grid view changes nothing.
    ///
    /// # Errors
    /// Fails only if a captured element is no longer part of the document.
    pub fn close_image<D>(&mut self, dom: &mut D) -> Result<()>
    where
        D: DomFacade + ?Sized,
    {
        for image in &self.images {
            dom.hide(image.caption)?;
            dom.hide(image.element)?;
        }
        dom.hide(self.target_element)?;
        if matches!(self.view, ViewState::Detail(_)) {
            dom.toggle_class(self.target_element, &self.hidden_class)?;
        }
        dom.show(self.grid_element)?;
        self.view = ViewState::Grid;
        log::debug!("ImageGrid {} -> {:?}", self.name, self.view);
        Ok(())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn view(&self) -> ViewState {
        self.view
    }

    /// Index of the open image; only ever set in detail view.
    #[inline]
    pub const fn open_index(&self) -> Option<usize> {
        match self.view {
            ViewState::Grid => None,
            ViewState::Detail(index) => index,
        }
    }

    #[inline]
    pub const fn grid_element(&self) -> NodeKey {
        self.grid_element
    }

    #[inline]
    pub const fn target_element(&self) -> NodeKey {
        self.target_element
    }

    /// Number of images captured at creation.
    #[inline]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Captured image elements, in document order.
    pub fn images(&self) -> Vec<NodeKey> {
        self.images.iter().map(|image| image.element).collect()
    }

    /// Caption element paired with the image at `index`.
    pub fn caption(&self, index: usize) -> Option<NodeKey> {
        self.images.get(index).map(|image| image.caption)
    }
}
