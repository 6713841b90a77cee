//! HTML5 parsing using html5ever.
//!
//! The source is parsed into an `RcDom` and then converted into the
//! document arena. Doctypes and processing instructions are dropped, as are
//! whitespace-only text nodes.

use crate::error::DomError;
use crate::tree::{Document, NodeKey};
use html5ever::tendril::TendrilSink as _;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

fn parse_rcdom(html: &str) -> Result<RcDom, DomError> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;
    Ok(dom)
}

/// Parse a full document and append its content under `parent`.
pub(crate) fn parse_document_into(
    document: &mut Document,
    parent: NodeKey,
    html: &str,
) -> Result<(), DomError> {
    let dom = parse_rcdom(html)?;
    convert_node(document, &dom.document, parent)
}

/// Parse `html` as body content and append the resulting nodes under `parent`.
pub(crate) fn parse_fragment_into(
    document: &mut Document,
    parent: NodeKey,
    html: &str,
) -> Result<(), DomError> {
    let dom = parse_rcdom(html)?;
    let Some(body) = find_element(&dom.document, "body") else {
        return Ok(());
    };
    for child in body.children.borrow().iter() {
        convert_node(document, child, parent)?;
    }
    Ok(())
}

/// Depth-first search for the first element with the given local name.
fn find_element(handle: &Handle, local: &str) -> Option<Handle> {
    if let RcNodeData::Element { name, .. } = &handle.data {
        if &*name.local == local {
            return Some(Handle::clone(handle));
        }
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, local))
}

/// Convert an html5ever node (and its subtree) into the arena under `parent`.
fn convert_node(document: &mut Document, rc_node: &Handle, parent: NodeKey) -> Result<(), DomError> {
    match &rc_node.data {
        RcNodeData::Document => {
            for child in rc_node.children.borrow().iter() {
                convert_node(document, child, parent)?;
            }
        }

        RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => {}

        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if !text.trim().is_empty() {
                let node = document.create_text(&text);
                document.attach(parent, node)?;
            }
        }

        RcNodeData::Comment { contents } => {
            let node = document.create_comment(contents);
            document.attach(parent, node)?;
        }

        RcNodeData::Element { name, attrs, .. } => {
            let node = document.create_element(&name.local);
            for attr in attrs.borrow().iter() {
                document
                    .element_mut(node)?
                    .attrs
                    .push(((*attr.name.local).to_ascii_lowercase(), attr.value.to_string()));
            }
            document.attach(parent, node)?;
            for child in rc_node.children.borrow().iter() {
                convert_node(document, child, node)?;
            }
        }
    }
    Ok(())
}
