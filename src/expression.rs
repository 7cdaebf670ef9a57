//! The parsed tree and its two arenas.
//!
//! [`Expression`] owns the static arena (literals and operators fixed at
//! parse time) and the key table (the dynamic arena, holding key names
//! until evaluation resolves them). There is no explicit `destroy()`:
//! dropping an `Expression` drops its `Arena<Node>` and `Vec<Vec<u8>>`,
//! which in turn drop every payload they own. That is the entire teardown
//! story.

use crate::arena::Arena;
use crate::node::{ChildRef, Node};

/// A parsed PBG expression: a static arena, a key table, and the root
/// reference into them.
///
/// Parse, evaluate, and render never mutate an `Expression` in place — each
/// evaluation builds its own `resolved: Vec<Literal>` alongside the
/// immutable tree rather than swapping it into shared state, so a parsed
/// `Expression` may be evaluated any number of times, including
/// concurrently from multiple threads.
#[derive(Debug, Clone)]
pub struct Expression {
    pub(crate) statics: Arena<Node>,
    pub(crate) keys: Vec<Vec<u8>>,
    pub(crate) root: ChildRef,
}

impl Expression {
    pub(crate) fn new(statics: Arena<Node>, keys: Vec<Vec<u8>>, root: ChildRef) -> Self {
        Self { statics, keys, root }
    }

    /// The reference to the expression's top-level node.
    pub fn root(&self) -> ChildRef {
        self.root
    }

    /// The node at a static index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for the static arena. Every
    /// `ChildRef::Static` reachable from [`Expression::root`] was produced
    /// by this same expression's parser, so this never panics on a value
    /// obtained by walking the tree.
    pub fn static_node(&self, index: usize) -> &Node {
        self.statics.get(index)
    }

    /// The key name at a dynamic index, without its surrounding `[` `]`.
    pub fn key_name(&self, index: usize) -> &[u8] {
        &self.keys[index]
    }

    /// The number of distinct key *occurrences* in the parsed tree.
    ///
    /// This counts occurrences, not unique names: `(&,[x],[x])` has 2, not
    /// 1 — one slot per textual key occurrence — so evaluating this
    /// expression calls the dictionary twice for `x`, once per occurrence.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}
