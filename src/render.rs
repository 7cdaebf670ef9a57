//! Canonical textual rendering (component R).
//!
//! Numbers render via `f64`'s native `Display`, which already produces the
//! shortest decimal string that round-trips to the same bits — a fixed
//! two-fractional-digit format would lose precision and is not used here.

use crate::literal::Literal;
use crate::node::{ChildRef, Node};
use crate::Expression;

impl Expression {
    /// Renders the expression back to its canonical textual form.
    ///
    /// `parse(expr.render())` reconstructs a tree isomorphic to `expr`,
    /// modulo number formatting: any `f64` value round-trips through its
    /// shortest decimal representation bit-for-bit.
    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.render_ref(self.root, &mut out);
        out
    }

    fn render_ref(&self, r: ChildRef, out: &mut Vec<u8>) {
        match r {
            ChildRef::Dynamic(i) => {
                out.push(b'[');
                out.extend_from_slice(self.key_name(i));
                out.push(b']');
            }
            ChildRef::Static(i) => match self.static_node(i) {
                Node::Literal(lit) => render_literal(lit, out),
                Node::Not(c) => self.render_op("!", &[*c], out),
                Node::And(cs) => self.render_op("&", cs, out),
                Node::Or(cs) => self.render_op("|", cs, out),
                Node::Eq(cs) => self.render_op("=", cs, out),
                Node::Neq(a, b) => self.render_op("!=", &[*a, *b], out),
                Node::Lt(a, b) => self.render_op("<", &[*a, *b], out),
                Node::Lte(a, b) => self.render_op("<=", &[*a, *b], out),
                Node::Gt(a, b) => self.render_op(">", &[*a, *b], out),
                Node::Gte(a, b) => self.render_op(">=", &[*a, *b], out),
                Node::Exst(c) => self.render_op("?", &[*c], out),
            },
        }
    }

    fn render_op(&self, symbol: &str, children: &[ChildRef], out: &mut Vec<u8>) {
        out.push(b'(');
        out.extend_from_slice(symbol.as_bytes());
        for c in children {
            out.push(b',');
            self.render_ref(*c, out);
        }
        out.push(b')');
    }
}

fn render_literal(lit: &Literal, out: &mut Vec<u8>) {
    match lit {
        Literal::True => out.extend_from_slice(b"TRUE"),
        Literal::False => out.extend_from_slice(b"FALSE"),
        Literal::Number(n) => out.extend_from_slice(format!("{}", n).as_bytes()),
        Literal::Str(bytes) => {
            out.push(b'\'');
            out.extend_from_slice(bytes);
            out.push(b'\'');
        }
        Literal::Date(d) => {
            out.extend_from_slice(format!("{:04}-{:02}-{:02}", d.year, d.month, d.day).as_bytes())
        }
        Literal::Unknown => out.extend_from_slice(b"UNKNOWN"),
    }
}
