//! Line-oriented parser for styled-components CSS literals.

use crate::classify::{classify_line, LineKind};
use crate::error::{ParseError, ParseErrorKind};
use crate::names::{camel_case, selector_key};
use crate::style::{StyleEntry, StyleSheet};

/// Parses the raw text of a tagged-template CSS literal into a [`StyleSheet`].
///
/// Lines are processed strictly top-to-bottom against a stack of node ids.
/// Declarations go to the node on top of the stack; a `selector {` line
/// allocates a nested node and pushes it; `}` pops. Unnested declarations
/// accumulate in the reserved `base` node, while selector blocks opened at
/// the top level become siblings of `base` on the root, so an empty `base`
/// means the literal had no unnested declarations at all.
///
/// The first line that violates the grammar aborts the whole literal; there
/// is no partial result. A `}` with no open selector block is rejected as
/// [`ParseErrorKind::UnbalancedClose`] rather than silently ignored.
pub fn parse(literal: &str) -> Result<StyleSheet, ParseError> {
    let mut sheet = StyleSheet::new();
    let mut stack = vec![sheet.base()];

    for (index, line) in literal.lines().enumerate() {
        let trimmed = line.trim();
        let line_number = index as u32 + 1;
        let kind = classify_line(trimmed)
            .map_err(|kind| ParseError::new(kind, line_number, trimmed))?;

        match kind {
            LineKind::Declaration { property, value } => {
                let top = stack[stack.len() - 1];
                sheet
                    .node_mut(top)
                    .insert(camel_case(property), StyleEntry::Value(value.to_string()));
            }
            LineKind::OpenBlock { selector } => {
                // Top-level blocks hang off the root, next to `base`; blocks
                // opened inside another block nest in that block.
                let top = stack[stack.len() - 1];
                let parent = if top == sheet.base() {
                    sheet.root()
                } else {
                    top
                };
                let block = sheet.alloc();
                sheet
                    .node_mut(parent)
                    .insert(selector_key(selector).to_string(), StyleEntry::Block(block));
                stack.push(block);
            }
            LineKind::CloseBlock => {
                if stack.len() <= 1 {
                    return Err(ParseError::new(
                        ParseErrorKind::UnbalancedClose,
                        line_number,
                        trimmed,
                    ));
                }
                stack.pop();
            }
            LineKind::Ignored => {}
        }
    }

    Ok(sheet)
}
