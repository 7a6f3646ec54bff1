//! CSS-literal parsing and replacement synthesis for styled2panda.
//!
//! This crate converts the text of a styled-components tagged-template CSS
//! literal into a nested style object and decides the `styled(...)` call that
//! replaces the original initializer. It handles:
//! - Kebab-case property names and the pseudo-selector condition table
//! - A restricted line-oriented CSS grammar (one declaration per line)
//! - Selector nesting via an arena-backed style sheet
//! - Rendering the replacement initializer text
//!
//! # Example
//!
//! ```
//! use styled_rewrite::{parse, synthesize, TagShape};
//!
//! let sheet = parse("color: red;\n&:hover {\n  color: blue;\n}\n").unwrap();
//! let replacement = synthesize(&sheet, &TagShape::Element("button".into()));
//! assert!(replacement.starts_with("styled('button', {"));
//! ```
//!
//! Failures are per-literal: a line that does not fit the grammar aborts that
//! literal with a [`ParseError`] and the caller leaves the declaration alone.

mod classify;
mod error;
mod names;
mod parser;
mod style;
mod synthesize;

pub use classify::{classify_line, LineKind};
pub use error::{ParseError, ParseErrorKind};
pub use names::{camel_case, selector_key};
pub use parser::parse;
pub use style::{NodeId, StyleEntry, StyleNode, StyleSheet};
pub use synthesize::{synthesize, TagShape};
