//! Per-line classification for the CSS-literal grammar.
//!
//! Classification is purely textual and independent of the nesting stack, so
//! it can be tested on its own. A line is judged by its trailing character,
//! in this priority order: `;` (declaration), `{` (open block), `}` (close
//! block), anything else (ignored).

use crate::error::ParseErrorKind;

/// The classification of one trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `property: value;` — a single CSS declaration. The value is the raw
    /// text before the `;`, untouched.
    Declaration { property: &'a str, value: &'a str },
    /// `selector {` — opens a nested block.
    OpenBlock { selector: &'a str },
    /// `}` (or any line ending in `}`) — closes the innermost open block.
    CloseBlock,
    /// Blank lines, comments, and anything else without a significant suffix.
    Ignored,
}

/// Classifies one line of a CSS literal. Expects `trimmed` to already have
/// surrounding whitespace removed.
///
/// A line whose suffix claims a rule but whose body does not fit that rule's
/// pattern is an error, never a fallthrough: `color red;` fails rather than
/// being ignored.
pub fn classify_line(trimmed: &str) -> Result<LineKind<'_>, ParseErrorKind> {
    if let Some(body) = trimmed.strip_suffix(';') {
        // Greedy property match: a value containing ": " splits at the last
        // occurrence, same as the original `(.+): (.+);` pattern.
        return match body.rfind(": ") {
            Some(at) if at > 0 && at + 2 < body.len() => Ok(LineKind::Declaration {
                property: &body[..at],
                value: &body[at + 2..],
            }),
            _ => Err(ParseErrorKind::MalformedDeclaration),
        };
    }

    if let Some(body) = trimmed.strip_suffix('{') {
        return match body.strip_suffix(' ') {
            Some(selector) if !selector.is_empty() => Ok(LineKind::OpenBlock { selector }),
            _ => Err(ParseErrorKind::MalformedSelector),
        };
    }

    if trimmed.ends_with('}') {
        return Ok(LineKind::CloseBlock);
    }

    Ok(LineKind::Ignored)
}
