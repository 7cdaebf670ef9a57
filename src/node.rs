//! Tree node shapes.
//!
//! Rather than a `{kind tag, untyped payload, arity}` triple with child
//! references encoded as signed integers (negative = dynamic arena,
//! non-negative = static arena), this crate uses a tagged-union
//! representation: [`Node`] is an enum whose variants carry their children
//! directly, and [`ChildRef`] is an explicit two-case enum instead of a
//! sign bit.

use crate::literal::Literal;

/// A reference to a child node, disambiguating which arena it lives in.
///
/// `Static` indexes [`crate::expression::Expression`]'s static arena
/// (literals and operators fixed at parse time); `Dynamic` indexes its key
/// table (resolved to a [`Literal`] only during [`crate::eval`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRef {
    Static(usize),
    Dynamic(usize),
}

/// One of the ten prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Not,
    And,
    Or,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Exst,
}

impl Op {
    /// The exact byte token the parser and renderer use for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Not => "!",
            Op::And => "&",
            Op::Or => "|",
            Op::Eq => "=",
            Op::Neq => "!=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Exst => "?",
        }
    }

    /// Returns `true` if `n` children satisfies this operator's arity
    /// contract. Checked at parse time, not deferred to evaluation.
    pub fn arity_ok(self, n: usize) -> bool {
        match self {
            Op::Not | Op::Exst => n == 1,
            Op::Neq | Op::Lt | Op::Lte | Op::Gt | Op::Gte => n == 2,
            Op::And | Op::Or => n >= 1,
            Op::Eq => n >= 2,
        }
    }

    /// A human-readable description of the arity contract, for error messages.
    pub fn arity_description(self) -> &'static str {
        match self {
            Op::Not | Op::Exst => "exactly 1 child",
            Op::Neq | Op::Lt | Op::Lte | Op::Gt | Op::Gte => "exactly 2 children",
            Op::And | Op::Or => "at least 1 child",
            Op::Eq => "at least 2 children",
        }
    }
}

/// A node in the static arena: either a non-key literal, or an operator
/// carrying its children.
///
/// `And`/`Or`/`Eq` take a `Vec<ChildRef>` because their arity is variable;
/// every other operator has a fixed shape enforced by the type itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Literal),
    Not(ChildRef),
    And(Vec<ChildRef>),
    Or(Vec<ChildRef>),
    Eq(Vec<ChildRef>),
    Neq(ChildRef, ChildRef),
    Lt(ChildRef, ChildRef),
    Lte(ChildRef, ChildRef),
    Gt(ChildRef, ChildRef),
    Gte(ChildRef, ChildRef),
    Exst(ChildRef),
}
