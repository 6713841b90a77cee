use core::fmt;

use crate::tree::{Document, DomNode, NodeKind};
use indextree::NodeId;

use serde_json::{Map, Value, json};

// -----------------------
// Module-scope helpers
// -----------------------

fn flush_text(children: &mut Vec<Value>, text_buf: &mut String) {
    if !text_buf.trim().is_empty() {
        children.push(json!({ "type": "text", "text": text_buf.clone() }));
    }
    text_buf.clear();
}

fn coalesce_children(document: &Document, id: NodeId) -> Vec<Value> {
    let mut children: Vec<Value> = Vec::new();
    let mut text_buf = String::new();
    for child in id.children(&document.arena) {
        let Some(entry) = document.arena.get(child) else {
            continue;
        };
        if let NodeKind::Text { text } = &entry.get().kind {
            text_buf.push_str(text);
            continue;
        }
        flush_text(&mut children, &mut text_buf);
        children.push(node_to_json(document, child, entry.get()));
    }
    flush_text(&mut children, &mut text_buf);
    children
}

fn node_to_json(document: &Document, id: NodeId, node: &DomNode) -> Value {
    let DomNode { kind, attrs } = node;
    match kind {
        NodeKind::Document => {
            json!({ "type": "document", "children": coalesce_children(document, id) })
        }
        NodeKind::Element { tag } => {
            // Sort attributes by name for determinism
            let mut pairs: Vec<(String, String)> = attrs.iter().cloned().collect();
            pairs.sort_by(|left, right| left.0.cmp(&right.0));
            let mut attrs_obj = Map::new();
            for (name, value) in pairs {
                attrs_obj.insert(name, Value::String(value));
            }
            json!({
                "type": "element",
                "tag": tag,
                "attrs": Value::Object(attrs_obj),
                "children": coalesce_children(document, id),
            })
        }
        NodeKind::Text { text } => json!({ "type": "text", "text": text }),
        NodeKind::Comment { text } => json!({ "type": "comment", "text": text }),
    }
}

impl Document {
    /// Deterministic JSON snapshot of the whole tree.
    pub fn to_json(&self) -> Value {
        let root = self.root().id();
        self.arena
            .get(root)
            .map_or(Value::Null, |entry| node_to_json(self, root, entry.get()))
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Document")?;
        let pretty = serde_json::to_string_pretty(&self.to_json()).map_err(|_| fmt::Error)?;
        write!(formatter, "{pretty}")
    }
}
