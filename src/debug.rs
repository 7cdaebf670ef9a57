//! Indented tree dump, a secondary diagnostic interface.
//!
//! Not required for round-tripping; exists purely for a human to look at a
//! parsed tree's shape.

use std::io::{self, Write};

use crate::literal::Literal;
use crate::node::{ChildRef, Node};
use crate::Expression;

impl Expression {
    /// Writes an indented, human-readable dump of the tree to `w`.
    pub fn debug_dump<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.dump_ref(self.root, 0, w)
    }

    fn dump_ref<W: Write>(&self, r: ChildRef, depth: usize, w: &mut W) -> io::Result<()> {
        let indent = "  ".repeat(depth);
        match r {
            ChildRef::Dynamic(i) => {
                writeln!(w, "{}KEY {}", indent, String::from_utf8_lossy(self.key_name(i)))
            }
            ChildRef::Static(i) => match self.static_node(i) {
                Node::Literal(lit) => writeln!(w, "{}{}", indent, describe_literal(lit)),
                Node::Not(c) => self.dump_op("NOT", &[*c], depth, w),
                Node::And(cs) => self.dump_op("AND", cs, depth, w),
                Node::Or(cs) => self.dump_op("OR", cs, depth, w),
                Node::Eq(cs) => self.dump_op("EQ", cs, depth, w),
                Node::Neq(a, b) => self.dump_op("NEQ", &[*a, *b], depth, w),
                Node::Lt(a, b) => self.dump_op("LT", &[*a, *b], depth, w),
                Node::Lte(a, b) => self.dump_op("LTE", &[*a, *b], depth, w),
                Node::Gt(a, b) => self.dump_op("GT", &[*a, *b], depth, w),
                Node::Gte(a, b) => self.dump_op("GTE", &[*a, *b], depth, w),
                Node::Exst(c) => self.dump_op("EXST", &[*c], depth, w),
            },
        }
    }

    fn dump_op<W: Write>(
        &self,
        name: &str,
        children: &[ChildRef],
        depth: usize,
        w: &mut W,
    ) -> io::Result<()> {
        writeln!(w, "{}{}", "  ".repeat(depth), name)?;
        for c in children {
            self.dump_ref(*c, depth + 1, w)?;
        }
        Ok(())
    }
}

fn describe_literal(lit: &Literal) -> String {
    match lit {
        Literal::True => "TRUE".to_string(),
        Literal::False => "FALSE".to_string(),
        Literal::Number(n) => format!("NUMBER {}", n),
        Literal::Str(bytes) => format!("STRING '{}'", String::from_utf8_lossy(bytes)),
        Literal::Date(d) => format!("DATE {:04}-{:02}-{:02}", d.year, d.month, d.day),
        Literal::Unknown => "UNKNOWN".to_string(),
    }
}
