//! Parse error types.

use thiserror::Error;

/// An error that aborted parsing of one CSS literal.
///
/// Errors are local to the literal that produced them: the caller leaves the
/// corresponding declaration untouched and moves on.
#[derive(Debug, Clone, Error)]
#[error("line {line}: {kind}: `{text}`")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The 1-based line number within the literal.
    pub line: u32,
    /// The offending line, trimmed.
    pub text: String,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: ParseErrorKind, line: u32, text: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
        }
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A line ending in `;` did not fit `property: value;`.
    #[error("malformed declaration, expected `property: value;`")]
    MalformedDeclaration,

    /// A line ending in `{` did not fit `selector {`.
    #[error("malformed selector, expected `selector {{`")]
    MalformedSelector,

    /// A closing brace with no open block to close.
    #[error("unbalanced closing brace")]
    UnbalancedClose,
}
