//! Inline `style="..."` attribute processing.
//!
//! A small, resilient parser: split on `;`, split each item on the first
//! `:`, trim ASCII whitespace, lowercase the property and skip anything
//! malformed. No `!important` handling and no tokenization.

/// A single CSS declaration parsed from a style attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase.
    pub property: String,
    /// Raw value trimmed of surrounding ASCII whitespace. May contain spaces.
    pub value: String,
}

/// Parse the value of a `style` attribute into a list of declarations.
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<Declaration> = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim_matches(is_ascii_whitespace);
        if item.is_empty() {
            continue;
        }
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            continue;
        };
        let property_text = raw_prop.trim_matches(is_ascii_whitespace);
        let value_text = raw_value.trim_matches(is_ascii_whitespace);
        if property_text.is_empty() || value_text.is_empty() {
            continue;
        }
        out.push(Declaration {
            property: property_text.to_ascii_lowercase(),
            value: value_text.to_owned(),
        });
    }
    out
}

/// The effective value of `property`; the last declaration wins.
pub fn property_value(input: &str, property: &str) -> Option<String> {
    let property_lc = property.to_ascii_lowercase();
    parse_style_attribute(input)
        .into_iter()
        .rev()
        .find(|decl| decl.property == property_lc)
        .map(|decl| decl.value)
}

/// Return a new attribute value with `property` set to `value`.
///
/// Earlier declarations of the same property are collapsed into one, kept at
/// the position of the first occurrence. Other declarations keep their order.
pub fn set_property(input: &str, property: &str, value: &str) -> String {
    let property_lc = property.to_ascii_lowercase();
    let mut declarations = parse_style_attribute(input);
    let mut replaced = false;
    declarations.retain_mut(|decl| {
        if decl.property != property_lc {
            return true;
        }
        if replaced {
            return false;
        }
        value.clone_into(&mut decl.value);
        replaced = true;
        true
    });
    if !replaced {
        declarations.push(Declaration {
            property: property_lc,
            value: value.to_owned(),
        });
    }
    serialize(&declarations)
}

/// Serialize declarations back into `prop: value; prop: value` form.
pub fn serialize(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|decl| format!("{}: {}", decl.property, decl.value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}
