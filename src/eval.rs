//! Dictionary resolution and the boolean tree walk (component E).
//!
//! A C-style implementation might resolve keys into a swapped-in arena of
//! values before walking the tree. This crate gets the same effect without
//! mutating `Expression` at all: [`Expression::evaluate`] resolves every key
//! eagerly into a local `Vec<Literal>`, then passes `&[Node]` and
//! `&[Literal]` into the recursive walker as two borrowed parameters.
//! Nothing is ever mutated in place, which is also why evaluating the same
//! `&Expression` concurrently from multiple threads is sound without any
//! `Sync`/`Mutex` machinery.

use std::collections::HashMap;

use crate::error::EvalError;
use crate::expression::Expression;
use crate::literal::Literal;
use crate::node::{ChildRef, Node};

/// Resolves key names to literal values.
///
/// A dictionary is conceptually a pure function `key -> Literal`, but the
/// trait takes `&mut self` so implementations may use interior lookups
/// (caches, lazy loads) without needing their own interior mutability.
/// Returning [`Literal::Unknown`] signals "no value for this key", which is
/// not itself an error — only dereferencing it through a non-`EXST`
/// operator is.
pub trait Dictionary {
    fn resolve(&mut self, key: &[u8]) -> Literal;
}

/// A `HashMap` is the simplest possible dictionary: present keys resolve to
/// a clone of their value, anything else resolves to `Unknown`.
impl Dictionary for HashMap<Vec<u8>, Literal> {
    fn resolve(&mut self, key: &[u8]) -> Literal {
        self.get(key).cloned().unwrap_or(Literal::Unknown)
    }
}

impl Expression {
    /// Resolves every key against `dict` and reduces the tree to a single
    /// boolean.
    ///
    /// Every key occurrence is resolved eagerly, in stored (textual)
    /// order, before the walk begins — this happens even for keys the walk
    /// will short-circuit past. Short-circuiting applies only to the
    /// recursive boolean walk, never to key resolution.
    pub fn evaluate<D: Dictionary>(&self, dict: &mut D) -> Result<bool, EvalError> {
        let resolved: Vec<Literal> = self.keys.iter().map(|k| dict.resolve(k)).collect();
        eval_bool(self, self.root, &resolved)
    }
}

/// A literal value a [`ChildRef`] resolves to, without recursively
/// evaluating it as a boolean and without rejecting `Unknown` — used by
/// `EQ`/`NEQ` (an unresolved key is just another kind to compare
/// structurally) and `EXST` (which tests for `Unknown` directly). None of
/// these recurse into operator subexpressions.
fn literal_of<'a>(
    expr: &'a Expression,
    r: ChildRef,
    resolved: &'a [Literal],
) -> Result<&'a Literal, EvalError> {
    match r {
        ChildRef::Dynamic(i) => Ok(&resolved[i]),
        ChildRef::Static(i) => match expr.static_node(i) {
            Node::Literal(lit) => Ok(lit),
            _ => Err(EvalError::NotLiteral),
        },
    }
}

/// Like [`literal_of`], but rejects `Unknown` — used by the numeric
/// comparisons (`LT`/`LTE`/`GT`/`GTE`), which need an actual value to
/// compare rather than a kind to match structurally.
fn known_literal_of<'a>(
    expr: &'a Expression,
    r: ChildRef,
    resolved: &'a [Literal],
) -> Result<&'a Literal, EvalError> {
    match literal_of(expr, r, resolved)? {
        Literal::Unknown => Err(EvalError::UnknownKey),
        lit => Ok(lit),
    }
}

fn literal_to_bool(lit: &Literal) -> Result<bool, EvalError> {
    match lit {
        Literal::True => Ok(true),
        Literal::False => Ok(false),
        Literal::Unknown => Err(EvalError::UnknownKey),
        _ => Err(EvalError::NotBoolean),
    }
}

fn literal_to_number(lit: &Literal) -> Result<f64, EvalError> {
    match lit {
        Literal::Number(n) => Ok(*n),
        _ => Err(EvalError::NotNumeric),
    }
}

/// `EQ`'s structural comparison permits `Unknown` operands: an unresolved
/// key compared against anything else is simply a kind mismatch, which is
/// `false`, not an error — only a non-`EXST` operator that needs a key's
/// *truth value* or *numeric value* treats `Unknown` as an error.
fn eval_eq(expr: &Expression, children: &[ChildRef], resolved: &[Literal]) -> Result<bool, EvalError> {
    let first = literal_of(expr, children[0], resolved)?;
    for c in &children[1..] {
        let lit = literal_of(expr, *c, resolved)?;
        if lit != first {
            return Ok(false);
        }
    }
    Ok(true)
}

fn eval_cmp(
    expr: &Expression,
    a: ChildRef,
    b: ChildRef,
    resolved: &[Literal],
    op: fn(f64, f64) -> bool,
) -> Result<bool, EvalError> {
    let la = known_literal_of(expr, a, resolved)?;
    let lb = known_literal_of(expr, b, resolved)?;
    Ok(op(literal_to_number(la)?, literal_to_number(lb)?))
}

/// The recursive boolean walk. `AND`/`OR` short-circuit in stored order;
/// every other operator implements its own typed comparison or structural
/// equality rule.
fn eval_bool(expr: &Expression, r: ChildRef, resolved: &[Literal]) -> Result<bool, EvalError> {
    match r {
        ChildRef::Dynamic(i) => literal_to_bool(&resolved[i]),
        ChildRef::Static(i) => match expr.static_node(i) {
            Node::Literal(lit) => literal_to_bool(lit),
            Node::Not(c) => Ok(!eval_bool(expr, *c, resolved)?),
            Node::And(children) => {
                for c in children {
                    if !eval_bool(expr, *c, resolved)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Node::Or(children) => {
                for c in children {
                    if eval_bool(expr, *c, resolved)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Node::Eq(children) => eval_eq(expr, children, resolved),
            Node::Neq(a, b) => Ok(!eval_eq(expr, &[*a, *b], resolved)?),
            Node::Lt(a, b) => eval_cmp(expr, *a, *b, resolved, |x, y| x < y),
            Node::Lte(a, b) => eval_cmp(expr, *a, *b, resolved, |x, y| x <= y),
            Node::Gt(a, b) => eval_cmp(expr, *a, *b, resolved, |x, y| x > y),
            Node::Gte(a, b) => eval_cmp(expr, *a, *b, resolved, |x, y| x >= y),
            Node::Exst(c) => Ok(literal_of(expr, *c, resolved)?.is_known()),
        },
    }
}
