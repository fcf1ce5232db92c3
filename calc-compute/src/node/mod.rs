//! Expression trees.
//!
//! A [`Node`] is one of three shapes: a number, a reference to a variable, or a named operation
//! with ordered children. Trees are produced by a front end (a parser, or the constructors here)
//! and are never modified after construction; the simplifier builds new trees instead. A node can
//! therefore be shared between the variable store and another tree without either observing
//! changes made through the other.
//!
//! The arity of an operation is the number of its children. The evaluator understands the binary
//! operators in [`BinaryOp`] and the unary operators in [`UnaryOp`]. Any other name, such as the
//! `toDouble(...)`, `simplify(...)` and `plot(...)` request nodes, is only meaningful to the
//! [request dispatcher](crate::request).

mod fmt;
mod op;

pub use op::{BinaryOp, UnaryOp};

use calc_collections::List;

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal.
    Number(f64),

    /// A reference to a variable, resolved through the variable store when evaluated.
    Variable(String),

    /// A named operation applied to its children, in order.
    Operation {
        /// The name of the operation, such as `+` or `sin`.
        name: String,

        /// The operands of the operation.
        children: List<Node>,
    },
}

impl Node {
    /// Creates a number node.
    pub fn number(value: f64) -> Self {
        Node::Number(value)
    }

    /// Creates a variable node.
    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable(name.into())
    }

    /// Creates an operation node with the given children.
    pub fn operation(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Node::Operation {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Creates a binary operation node.
    pub fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Self {
        Node::operation(op.name(), [lhs, rhs])
    }

    /// Creates a unary operation node.
    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        Node::operation(op.name(), [operand])
    }

    /// Returns the name of a variable or operation node.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Number(_) => None,
            Node::Variable(name) | Node::Operation { name, .. } => Some(name),
        }
    }

    /// Returns the value of a number node.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Node::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the children of an operation node.
    pub fn children(&self) -> Option<&List<Node>> {
        match self {
            Node::Operation { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Returns the binary operator of this node, if it is a two-child operation with a binary
    /// operator name.
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            Node::Operation { name, children } if children.len() == 2 => BinaryOp::from_name(name),
            _ => None,
        }
    }

    /// Returns the unary operator of this node, if it is a one-child operation with a unary
    /// operator name.
    pub fn unary_op(&self) -> Option<UnaryOp> {
        match self {
            Node::Operation { name, children } if children.len() == 1 => UnaryOp::from_name(name),
            _ => None,
        }
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn operation_children_in_order() {
        let node = Node::binary(BinaryOp::Sub, Node::variable("x"), 3.0.into());
        let children = node.children().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children.get(0), Ok(&Node::Variable("x".to_string())));
        assert_eq!(children.get(1), Ok(&Node::Number(3.0)));
        assert_eq!(node.name(), Some("-"));
        assert_eq!(node.binary_op(), Some(BinaryOp::Sub));
    }

    #[test]
    fn operators_depend_on_arity() {
        let request = Node::operation("-", [1.0.into(), 2.0.into(), 3.0.into()]);
        assert_eq!(request.binary_op(), None);

        let sine = Node::unary(UnaryOp::Sin, Node::variable("t"));
        assert_eq!(sine.unary_op(), Some(UnaryOp::Sin));
        assert_eq!(sine.binary_op(), None);
    }

    #[test]
    fn leaves() {
        assert_eq!(Node::number(2.0).as_number(), Some(2.0));
        assert_eq!(Node::number(2.0).name(), None);
        assert_eq!(Node::variable("y").name(), Some("y"));
        assert_eq!(Node::variable("y").children(), None);
    }
}
