//! Error types for document access.

use crate::tree::NodeKey;
use thiserror::Error;

/// Failures raised while building or querying a [`Document`](crate::Document).
#[derive(Error, Debug)]
pub enum DomError {
    /// The HTML source could not be read by the parser.
    #[error("failed to parse document: {0}")]
    Parse(#[from] std::io::Error),

    /// The key does not refer to a live node of this document.
    #[error("node {0:?} is not part of the document")]
    UnknownNode(NodeKey),

    /// The key refers to a document, text or comment node where an element was required.
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeKey),

    /// Appending would produce an invalid tree (cycle, self-append or removed node).
    #[error("invalid tree operation: {0}")]
    Hierarchy(#[from] indextree::NodeError),

    /// A class token was empty or contained ASCII whitespace.
    #[error("invalid class token `{0}`")]
    InvalidClassToken(String),

    /// The selector uses syntax beyond simple compound selectors.
    #[error("unsupported selector `{0}`")]
    UnsupportedSelector(String),
}
