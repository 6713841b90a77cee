//! DOM utility facade consumed by widget controllers.
//!
//! The trait keeps controllers independent of how the page is held in
//! memory. [`Document`] is the provided implementation.

use crate::error::DomError;
use crate::selector::CompoundSelector;
use crate::style;
use crate::tree::{Document, NodeKey};

/// Inline `display` value written by [`DomFacade::show`].
pub const SHOWN_DISPLAY: &str = "block";
/// Inline `display` value written by [`DomFacade::hide`].
pub const HIDDEN_DISPLAY: &str = "none";

/// Element lookup, visibility and class helpers over a rendered document.
pub trait DomFacade {
    /// Resolve an element by its unique `id`.
    fn get_by_id(&self, id: &str) -> Option<NodeKey>;

    /// All descendant elements of `element` with the given tag, in document order.
    ///
    /// # Errors
    /// Fails if `element` is not a live node.
    fn elements_by_tag(&self, element: NodeKey, tag: &str) -> Result<Vec<NodeKey>, DomError>;

    /// All `<img>` descendants of `element`, in document order.
    ///
    /// # Errors
    /// Fails if `element` is not a live node.
    fn img_elements(&self, element: NodeKey) -> Result<Vec<NodeKey>, DomError> {
        self.elements_by_tag(element, "img")
    }

    /// All descendant elements of `element` carrying `class`, in document order.
    ///
    /// # Errors
    /// Fails if `element` is not a live node.
    fn get_by_class(&self, element: NodeKey, class: &str) -> Result<Vec<NodeKey>, DomError>;

    /// All descendant elements of `element` matching a simple compound selector.
    ///
    /// # Errors
    /// Fails if `element` is not a live node or the selector is unsupported.
    fn select_all(&self, element: NodeKey, selector: &str) -> Result<Vec<NodeKey>, DomError>;

    /// The current `id` attribute of an element.
    fn element_id(&self, element: NodeKey) -> Option<String>;

    /// Make an element non-rendered (`display: none`).
    ///
    /// # Errors
    /// Fails if `element` is not a live element.
    fn hide(&mut self, element: NodeKey) -> Result<(), DomError>;

    /// Make an element rendered (`display: block`).
    ///
    /// # Errors
    /// Fails if `element` is not a live element.
    fn show(&mut self, element: NodeKey) -> Result<(), DomError>;

    /// Whether the element's inline `display` is anything other than `none`.
    ///
    /// # Errors
    /// Fails if `element` is not a live element.
    fn is_displayed(&self, element: NodeKey) -> Result<bool, DomError>;

    /// Invert the presence of `token` in the element's class list.
    /// Returns whether the class is present afterwards.
    ///
    /// # Errors
    /// Fails if `element` is not a live element, or with
    /// [`DomError::InvalidClassToken`] if `token` is empty or contains whitespace.
    fn toggle_class(&mut self, element: NodeKey, token: &str) -> Result<bool, DomError>;

    /// Add `token` to the class list if missing.
    ///
    /// # Errors
    /// Fails if `element` is not a live element, or with
    /// [`DomError::InvalidClassToken`] if `token` is empty or contains whitespace.
    fn add_class(&mut self, element: NodeKey, token: &str) -> Result<(), DomError>;

    /// Remove `token` from the class list if present.
    ///
    /// # Errors
    /// Fails if `element` is not a live element, or with
    /// [`DomError::InvalidClassToken`] if `token` is empty or contains whitespace.
    fn remove_class(&mut self, element: NodeKey, token: &str) -> Result<(), DomError>;

    /// Whether the class list contains `token`.
    ///
    /// # Errors
    /// Fails if `element` is not a live element.
    fn has_class(&self, element: NodeKey, token: &str) -> Result<bool, DomError>;

    /// Set the inline opacity, clamped to `[0, 1]`.
    ///
    /// # Errors
    /// Fails if `element` is not a live element.
    fn set_opacity(&mut self, element: NodeKey, opacity: f32) -> Result<(), DomError>;

    /// Replace the element's children with parsed HTML.
    ///
    /// # Errors
    /// Fails if `element` is not a live element or the markup cannot be read.
    fn set_inner_html(&mut self, element: NodeKey, html: &str) -> Result<(), DomError>;
}

/// Whether `token` can live in a class list: non-empty, no ASCII whitespace.
#[must_use]
pub fn is_valid_class_token(token: &str) -> bool {
    !token.is_empty() && !token.bytes().any(|byte| byte.is_ascii_whitespace())
}

fn checked_token(token: &str) -> Result<&str, DomError> {
    if is_valid_class_token(token) {
        Ok(token)
    } else {
        Err(DomError::InvalidClassToken(token.to_owned()))
    }
}

fn class_tokens(class_attr: &str) -> impl Iterator<Item = &str> {
    class_attr.split_ascii_whitespace()
}

impl Document {
    fn class_attr(&self, element: NodeKey) -> Result<String, DomError> {
        Ok(self.element(element)?.attr("class").unwrap_or_default().to_owned())
    }

    fn write_classes(&mut self, element: NodeKey, tokens: &[&str]) -> Result<(), DomError> {
        self.set_attribute(element, "class", &tokens.join(" "))
    }

    fn set_style_property(&mut self, element: NodeKey, property: &str, value: &str) -> Result<(), DomError> {
        let current = self.element(element)?.attr("style").unwrap_or_default();
        let updated = style::set_property(current, property, value);
        self.set_attribute(element, "style", &updated)
    }

    fn filter_descendants<F>(&self, element: NodeKey, mut predicate: F) -> Result<Vec<NodeKey>, DomError>
    where
        F: FnMut(&crate::tree::DomNode) -> bool,
    {
        self.node(element)?;
        Ok(self
            .descendants(element)
            .into_iter()
            .filter(|key| self.element(*key).is_ok_and(&mut predicate))
            .collect())
    }
}

impl DomFacade for Document {
    fn get_by_id(&self, id: &str) -> Option<NodeKey> {
        self.element_by_id(id)
    }

    fn elements_by_tag(&self, element: NodeKey, tag: &str) -> Result<Vec<NodeKey>, DomError> {
        let needle = tag.to_ascii_lowercase();
        self.filter_descendants(element, |node| {
            matches!(&node.kind, crate::tree::NodeKind::Element { tag: found } if *found == needle)
        })
    }

    fn get_by_class(&self, element: NodeKey, class: &str) -> Result<Vec<NodeKey>, DomError> {
        self.filter_descendants(element, |node| {
            class_tokens(node.attr("class").unwrap_or_default()).any(|token| token == class)
        })
    }

    fn select_all(&self, element: NodeKey, selector: &str) -> Result<Vec<NodeKey>, DomError> {
        let compound = CompoundSelector::parse(selector)?;
        self.filter_descendants(element, |node| compound.matches(node))
    }

    fn element_id(&self, element: NodeKey) -> Option<String> {
        self.attribute(element, "id").map(str::to_owned)
    }

    fn hide(&mut self, element: NodeKey) -> Result<(), DomError> {
        self.set_style_property(element, "display", HIDDEN_DISPLAY)
    }

    fn show(&mut self, element: NodeKey) -> Result<(), DomError> {
        self.set_style_property(element, "display", SHOWN_DISPLAY)
    }

    fn is_displayed(&self, element: NodeKey) -> Result<bool, DomError> {
        let inline = self.element(element)?.attr("style").unwrap_or_default();
        Ok(style::property_value(inline, "display").as_deref() != Some(HIDDEN_DISPLAY))
    }

    fn toggle_class(&mut self, element: NodeKey, token: &str) -> Result<bool, DomError> {
        let token = checked_token(token)?;
        let current = self.class_attr(element)?;
        let present = class_tokens(&current).any(|existing| existing == token);
        let mut tokens: Vec<&str> = class_tokens(&current).filter(|existing| *existing != token).collect();
        if !present {
            tokens.push(token);
        }
        self.write_classes(element, &tokens)?;
        Ok(!present)
    }

    fn add_class(&mut self, element: NodeKey, token: &str) -> Result<(), DomError> {
        let token = checked_token(token)?;
        let current = self.class_attr(element)?;
        let mut tokens: Vec<&str> = class_tokens(&current).collect();
        if !tokens.contains(&token) {
            tokens.push(token);
            self.write_classes(element, &tokens)?;
        }
        Ok(())
    }

    fn remove_class(&mut self, element: NodeKey, token: &str) -> Result<(), DomError> {
        let token = checked_token(token)?;
        let current = self.class_attr(element)?;
        let tokens: Vec<&str> = class_tokens(&current).filter(|existing| *existing != token).collect();
        self.write_classes(element, &tokens)
    }

    fn has_class(&self, element: NodeKey, token: &str) -> Result<bool, DomError> {
        let current = self.class_attr(element)?;
        Ok(class_tokens(&current).any(|existing| existing == token))
    }

    fn set_opacity(&mut self, element: NodeKey, opacity: f32) -> Result<(), DomError> {
        let clamped = if opacity.is_nan() { 1.0 } else { opacity.clamp(0.0, 1.0) };
        self.set_style_property(element, "opacity", &clamped.to_string())
    }

    fn set_inner_html(&mut self, element: NodeKey, html: &str) -> Result<(), DomError> {
        self.replace_children(element, html)
    }
}
