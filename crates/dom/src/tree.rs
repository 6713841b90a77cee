//! Arena-backed document tree with an id index.
//!
//! Nodes live in an `indextree` arena owned by the [`Document`]. Callers hold
//! [`NodeKey`] handles, which stay valid until the node is removed. The id
//! index follows `getElementById` semantics: the first element in document
//! order carrying a given `id` wins.

use crate::error::DomError;
use crate::parser;
use indextree::{Arena, NodeId};
use smallvec::SmallVec;
use std::collections::HashMap;

/// A stable handle to a node inside one [`Document`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeKey(NodeId);

impl NodeKey {
    #[inline]
    pub(crate) const fn id(self) -> NodeId {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    Document,
    Element {
        tag: String,
    },
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}

/// Node payload stored in the arena.
#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub kind: NodeKind,
    /// Attributes in source order. Names are lowercase.
    pub attrs: SmallVec<[(String, String); 4]>,
}

impl DomNode {
    fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            attrs: SmallVec::new(),
        }
    }

    /// Look up an attribute value by (lowercase) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        let name_lc = name.to_ascii_lowercase();
        if let Some(slot) = self.attrs.iter_mut().find(|(attr_name, _)| *attr_name == name_lc) {
            value.clone_into(&mut slot.1);
        } else {
            self.attrs.push((name_lc, value.to_owned()));
        }
    }

    fn remove_attr(&mut self, name: &str) -> bool {
        let name_lc = name.to_ascii_lowercase();
        let before = self.attrs.len();
        self.attrs.retain(|(attr_name, _)| *attr_name != name_lc);
        before != self.attrs.len()
    }
}

/// An in-memory rendered document.
pub struct Document {
    pub(crate) arena: Arena<DomNode>,
    root: NodeId,
    id_index: HashMap<String, NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the root node.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(DomNode::default());
        Self {
            arena,
            root,
            id_index: HashMap::new(),
        }
    }

    /// Parse a complete HTML document.
    ///
    /// # Errors
    /// Returns [`DomError::Parse`] if the parser fails to read the input.
    pub fn parse(html: &str) -> Result<Self, DomError> {
        let mut document = Self::new();
        let root = document.root();
        parser::parse_document_into(&mut document, root, html)?;
        document.reindex();
        log::debug!(
            "parsed document with {} nodes and {} ids",
            document.arena.len(),
            document.id_index.len()
        );
        Ok(document)
    }

    /// The document root node.
    #[inline]
    pub const fn root(&self) -> NodeKey {
        NodeKey(self.root)
    }

    /// Create a detached element. The tag is stored lowercase.
    pub fn create_element(&mut self, tag: &str) -> NodeKey {
        NodeKey(self.arena.new_node(DomNode::element(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeKey {
        NodeKey(self.arena.new_node(DomNode {
            kind: NodeKind::Text {
                text: text.to_owned(),
            },
            attrs: SmallVec::new(),
        }))
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: &str) -> NodeKey {
        NodeKey(self.arena.new_node(DomNode {
            kind: NodeKind::Comment {
                text: text.to_owned(),
            },
            attrs: SmallVec::new(),
        }))
    }

    /// Append `child` as the last child of `parent` and refresh the id index.
    ///
    /// # Errors
    /// Fails if either key is unknown or the append would corrupt the tree.
    pub fn append_child(&mut self, parent: NodeKey, child: NodeKey) -> Result<(), DomError> {
        self.attach(parent, child)?;
        self.reindex();
        Ok(())
    }

    /// Append without refreshing the id index; used while bulk-building.
    pub(crate) fn attach(&mut self, parent: NodeKey, child: NodeKey) -> Result<(), DomError> {
        self.node(parent)?;
        self.node(child)?;
        parent.0.checked_append(child.0, &mut self.arena)?;
        Ok(())
    }

    /// Set an attribute on an element. Setting `id` updates the id index.
    ///
    /// # Errors
    /// Fails if `node` is not a live element.
    pub fn set_attribute(&mut self, node: NodeKey, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(node)?.set_attr(name, value);
        if name.eq_ignore_ascii_case("id") {
            self.reindex();
        }
        Ok(())
    }

    /// Remove an attribute from an element, returning whether it was present.
    ///
    /// # Errors
    /// Fails if `node` is not a live element.
    pub fn remove_attribute(&mut self, node: NodeKey, name: &str) -> Result<bool, DomError> {
        let removed = self.element_mut(node)?.remove_attr(name);
        if removed && name.eq_ignore_ascii_case("id") {
            self.reindex();
        }
        Ok(removed)
    }

    /// Read an attribute from an element. Non-elements have no attributes.
    pub fn attribute(&self, node: NodeKey, name: &str) -> Option<&str> {
        let name_lc = name.to_ascii_lowercase();
        self.element(node).ok()?.attr(&name_lc)
    }

    /// Lowercase tag name of an element.
    pub fn tag_name(&self, node: NodeKey) -> Option<&str> {
        match &self.node(node).ok()?.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            NodeKind::Document | NodeKind::Text { .. } | NodeKind::Comment { .. } => None,
        }
    }

    /// Direct children in order.
    pub fn children(&self, node: NodeKey) -> Vec<NodeKey> {
        if self.node(node).is_err() {
            return Vec::new();
        }
        node.0.children(&self.arena).map(NodeKey).collect()
    }

    /// All descendants of `node` in document order, excluding `node` itself.
    pub fn descendants(&self, node: NodeKey) -> Vec<NodeKey> {
        if self.node(node).is_err() {
            return Vec::new();
        }
        node.0.descendants(&self.arena).skip(1).map(NodeKey).collect()
    }

    /// Parent of a node, if attached.
    pub fn parent(&self, node: NodeKey) -> Option<NodeKey> {
        self.node(node).ok()?;
        self.arena.get(node.0)?.parent().map(NodeKey)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, node: NodeKey) -> String {
        let mut out = String::new();
        if self.node(node).is_err() {
            return out;
        }
        for id in node.0.descendants(&self.arena) {
            if let Some(NodeKind::Text { text }) = self.arena.get(id).map(|entry| &entry.get().kind) {
                out.push_str(text);
            }
        }
        out
    }

    /// The first connected element carrying `id`, per `getElementById`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeKey> {
        self.id_index.get(id).copied().map(NodeKey)
    }

    /// Replace all children of `node` with the body content of `html`.
    ///
    /// # Errors
    /// Fails if `node` is not a live element or the fragment cannot be parsed.
    pub fn replace_children(&mut self, node: NodeKey, html: &str) -> Result<(), DomError> {
        self.element(node)?;
        let old_children: Vec<NodeId> = node.0.children(&self.arena).collect();
        for child in old_children {
            child.remove_subtree(&mut self.arena);
        }
        parser::parse_fragment_into(self, node, html)?;
        self.reindex();
        Ok(())
    }

    /// Resolve a live node of any kind.
    pub(crate) fn node(&self, key: NodeKey) -> Result<&DomNode, DomError> {
        // Freed arena slots are reused, so a stale key must be caught by its stamp.
        let entry = self.arena.get(key.0).ok_or(DomError::UnknownNode(key))?;
        if key.0.is_removed(&self.arena) {
            return Err(DomError::UnknownNode(key));
        }
        Ok(entry.get())
    }

    /// Resolve a live element.
    pub(crate) fn element(&self, key: NodeKey) -> Result<&DomNode, DomError> {
        let node = self.node(key)?;
        if matches!(node.kind, NodeKind::Element { .. }) {
            Ok(node)
        } else {
            Err(DomError::NotAnElement(key))
        }
    }

    /// Resolve a live element mutably.
    pub(crate) fn element_mut(&mut self, key: NodeKey) -> Result<&mut DomNode, DomError> {
        self.element(key)?;
        self.arena
            .get_mut(key.0)
            .map(indextree::Node::get_mut)
            .ok_or(DomError::UnknownNode(key))
    }

    /// Rebuild the id index from the connected tree.
    fn reindex(&mut self) {
        self.id_index.clear();
        for id in self.root.descendants(&self.arena) {
            let Some(entry) = self.arena.get(id) else {
                continue;
            };
            let node = entry.get();
            if !matches!(node.kind, NodeKind::Element { .. }) {
                continue;
            }
            if let Some(value) = node.attr("id").filter(|value| !value.is_empty()) {
                self.id_index.entry(value.to_owned()).or_insert(id);
            }
        }
    }
}
