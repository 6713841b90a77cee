//! In-memory document tree and the DOM utility facade used by gallery widgets.
//!
//! Pages are parsed with html5ever into an arena-backed [`Document`]. Widget
//! controllers only talk to the page through [`DomFacade`], so any other
//! document backend can stand in for it.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

pub mod console;
pub mod error;
pub mod facade;
mod parser;
mod printing;
pub mod selector;
pub mod style;
pub mod tree;

pub use console::{CONSOLE_TARGET, Console};
pub use error::DomError;
pub use facade::{DomFacade, HIDDEN_DISPLAY, SHOWN_DISPLAY, is_valid_class_token};
pub use selector::CompoundSelector;
pub use tree::{Document, DomNode, NodeKey, NodeKind};
