//! # pbg
//!
//! A compact evaluator for the Prefix Boolean Grammar (PBG): a parenthesized,
//! comma-separated, prefix-operator expression language whose leaves are
//! typed literals (booleans, numbers, dates, quoted strings) and **keys**
//! (named free variables resolved at evaluation time against a
//! caller-supplied [`Dictionary`]).
//!
//! Three operations make up the public surface:
//!
//! - [`parse`] — turn a byte slice into an [`Expression`] tree.
//! - [`Expression::evaluate`] — resolve keys through a [`Dictionary`] and
//!   reduce the tree to a single `bool`.
//! - [`Expression::render`] — walk the tree back to its canonical textual
//!   form.
//!
//! # Design
//!
//! This crate has **no knowledge of where the dictionary's values come
//! from** — file, database, in-memory map — and does no I/O itself. It
//! provides only the parse/evaluate/render core.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use pbg::{parse, Literal};
//!
//! let expr = parse(b"(=, [name], 'alice')").unwrap();
//!
//! let mut dict = HashMap::new();
//! dict.insert(b"name".to_vec(), Literal::Str(b"alice".to_vec()));
//!
//! assert_eq!(expr.evaluate(&mut dict).unwrap(), true);
//! assert_eq!(expr.render(), b"(=,[name],'alice')");
//! ```

pub mod arena;
pub mod debug;
pub mod error;
pub mod eval;
pub mod expression;
pub mod lexer;
pub mod literal;
pub mod node;
pub mod parser;
pub mod render;
pub mod span;

pub use error::{EvalError, ParseError};
pub use eval::Dictionary;
pub use expression::Expression;
pub use literal::{Date, Literal};
pub use node::{ChildRef, Node, Op};
pub use span::Span;

/// Parses a complete PBG expression from its textual form.
///
/// This is the crate's main entry point; see [`parser::parse`] for the
/// two-phase algorithm.
pub fn parse(src: &[u8]) -> Result<Expression, ParseError> {
    parser::parse(src)
}
