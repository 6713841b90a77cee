//! Simple compound selectors: an optional tag (or `*`) followed by any
//! number of `#id` and `.class` parts. Combinators, attribute selectors and
//! pseudo-classes are rejected.

use crate::error::DomError;
use crate::tree::DomNode;
use crate::tree::NodeKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

#[derive(Clone, Copy)]
enum Part {
    Tag,
    Id,
    Class,
}

impl CompoundSelector {
    /// Parse a selector such as `img.thumb#photo-1`.
    ///
    /// # Errors
    /// Returns [`DomError::UnsupportedSelector`] for empty input or any syntax
    /// outside the compound form.
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let unsupported = || DomError::UnsupportedSelector(input.to_owned());
        let source = input.trim();
        if source.is_empty() {
            return Err(unsupported());
        }
        let mut selector = Self::default();
        let mut part = Part::Tag;
        let mut buffer = String::new();
        let mut chars = source.chars().peekable();
        if chars.peek() == Some(&'*') {
            chars.next();
            if chars.peek().is_none() {
                return Ok(selector);
            }
            part = Part::Id;
            match chars.next() {
                Some('#') => {}
                Some('.') => part = Part::Class,
                _ => return Err(unsupported()),
            }
        }
        for character in chars {
            match character {
                '#' | '.' => {
                    selector.push(part, &buffer).ok_or_else(unsupported)?;
                    buffer.clear();
                    part = if character == '#' { Part::Id } else { Part::Class };
                }
                _ if is_ident_char(character) => buffer.push(character),
                _ => return Err(unsupported()),
            }
        }
        selector.push(part, &buffer).ok_or_else(unsupported)?;
        Ok(selector)
    }

    /// Record a finished part. A leading empty tag is allowed (`.thumb`).
    fn push(&mut self, part: Part, text: &str) -> Option<()> {
        match part {
            Part::Tag if text.is_empty() => Some(()),
            Part::Tag => {
                self.tag = Some(text.to_ascii_lowercase());
                Some(())
            }
            Part::Id if text.is_empty() || self.id.is_some() => None,
            Part::Id => {
                self.id = Some(text.to_owned());
                Some(())
            }
            Part::Class if text.is_empty() => None,
            Part::Class => {
                self.classes.push(text.to_owned());
                Some(())
            }
        }
    }

    /// Whether an element node satisfies every part of the selector.
    pub fn matches(&self, node: &DomNode) -> bool {
        let NodeKind::Element { tag } = &node.kind else {
            return false;
        };
        if self.tag.as_ref().is_some_and(|want| want != tag) {
            return false;
        }
        if self.id.as_deref().is_some_and(|want| node.attr("id") != Some(want)) {
            return false;
        }
        let class_attr = node.attr("class").unwrap_or_default();
        self.classes
            .iter()
            .all(|want| class_attr.split_ascii_whitespace().any(|token| token == want))
    }
}

const fn is_ident_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || matches!(character, '-' | '_') || !character.is_ascii()
}
