use std::fmt::{Display, Formatter, Result};
use super::{BinaryOp, Node, UnaryOp};

/// Binding power of a negation, between multiplication and exponentiation.
const NEGATE_PRECEDENCE: u8 = 3;

/// Binding power of leaves and call-style operations, which never need parentheses.
const ATOM_PRECEDENCE: u8 = u8::MAX;

impl Node {
    fn precedence(&self) -> u8 {
        if let Some(op) = self.binary_op() {
            op.precedence()
        } else if self.unary_op() == Some(UnaryOp::Negate) {
            NEGATE_PRECEDENCE
        } else {
            ATOM_PRECEDENCE
        }
    }
}

/// Writes `child`, wrapped in parentheses if it binds less tightly than its parent requires.
fn write_operand(f: &mut Formatter<'_>, child: &Node, min_precedence: u8) -> Result {
    if child.precedence() < min_precedence {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}

/// Formats a tree in infix notation. Binary operators are written between their operands with
/// as few parentheses as the usual precedence rules allow (`^` is right-associative); `negate` is
/// written as a prefix `-`; every other operation is written like a function call.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Node::Number(value) => write!(f, "{}", value),
            Node::Variable(name) => f.write_str(name),
            Node::Operation { name, children } => {
                if let Some(op) = self.binary_op() {
                    let (lhs, rhs) = (children.get(0), children.get(1));
                    if let (Ok(lhs), Ok(rhs)) = (lhs, rhs) {
                        let precedence = op.precedence();
                        let (lhs_min, rhs_min) = if op == BinaryOp::Pow {
                            (precedence + 1, precedence)
                        } else {
                            (precedence, precedence + 1)
                        };
                        write_operand(f, lhs, lhs_min)?;
                        write!(f, " {} ", op)?;
                        return write_operand(f, rhs, rhs_min);
                    }
                }

                if self.unary_op() == Some(UnaryOp::Negate) {
                    if let Some(operand) = children.first() {
                        f.write_str("-")?;
                        return write_operand(f, operand, NEGATE_PRECEDENCE);
                    }
                }

                write!(f, "{}(", name)?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            },
        }
    }
}
