//! Replacement initializer synthesis.

use crate::style::StyleSheet;

/// The shape of the tag a CSS literal was attached to.
///
/// Any other shape (multi-argument calls, computed member access) is never
/// rewritten; callers skip those declarations before reaching this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagShape {
    /// A property-style tag such as `styled.button`: the element name is
    /// passed to `styled()` as a quoted string.
    Element(String),
    /// A call-shaped tag such as `styled(Link)`: holds the verbatim source
    /// text of the single argument, copied into the rewrite unmodified.
    Wrapped(String),
}

/// Builds the replacement initializer for a successfully parsed literal.
///
/// The style object is the whole sheet rendered as pretty JSON. When `base`
/// has no declarations the object argument is dropped entirely, even if the
/// literal contained selector blocks, matching the tool this replaces.
pub fn synthesize(sheet: &StyleSheet, tag: &TagShape) -> String {
    let first = match tag {
        TagShape::Element(name) => format!("'{name}'"),
        TagShape::Wrapped(argument) => argument.clone(),
    };

    if sheet.base_is_empty() {
        format!("styled({first})")
    } else {
        format!("styled({first}, {})", sheet.to_json_pretty())
    }
}
