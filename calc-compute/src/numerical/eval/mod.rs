//! The [`Eval`] trait and its implementation for [`Node`].

mod binary;
mod unary;

use calc_collections::List;
use calc_error::Error;
use crate::node::Node;
use super::{ctxt::Ctxt, error::UnknownOperation};

/// Any type that can be numerically evaluated.
pub trait Eval {
    /// Evaluates the expression to a number, resolving variables through the given context.
    fn eval(&self, ctxt: &Ctxt<'_>) -> Result<f64, Error>;
}

impl Eval for Node {
    fn eval(&self, ctxt: &Ctxt<'_>) -> Result<f64, Error> {
        eval_node(self, ctxt, 0)
    }
}

/// Evaluates `node`, which sits `depth` levels (nodes plus variable hops) below the root of the
/// evaluation.
pub(crate) fn eval_node(node: &Node, ctxt: &Ctxt<'_>, depth: usize) -> Result<f64, Error> {
    ctxt.check_depth(depth)?;

    match node {
        Node::Number(value) => Ok(*value),
        Node::Variable(name) => {
            let bound = ctxt.lookup(name)?;
            eval_node(bound, ctxt, depth + 1)
        },
        Node::Operation { name, children } => match children.len() {
            1 => unary::eval_unary(name, children, ctxt, depth),
            2 => binary::eval_binary(name, children, ctxt, depth),
            arity => Err(unknown_operation(name, arity, &[])),
        },
    }
}

/// Evaluates the child at `index` of an operation.
fn eval_child(
    children: &List<Node>,
    index: usize,
    ctxt: &Ctxt<'_>,
    depth: usize,
) -> Result<f64, Error> {
    eval_node(children.get(index)?, ctxt, depth + 1)
}

/// Builds an [`UnknownOperation`] error, suggesting the known names close to `name`.
fn unknown_operation(name: &str, arity: usize, known: &[&str]) -> Error {
    Error::unspanned(UnknownOperation {
        name: name.to_string(),
        arity,
        suggestions: super::ctxt::similar_names(name, known.iter().copied()),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{
        env::Vars,
        node::{BinaryOp, UnaryOp},
        numerical::error::{MaxDepthExceeded, UndefinedVariable, UnknownOperation},
        opts::{BinaryFallback, Options},
    };
    use super::*;

    fn eval_with(vars: &Vars, opts: &Options, node: &Node) -> Result<f64, Error> {
        node.eval(&Ctxt::new(vars, opts))
    }

    fn eval(node: &Node) -> Result<f64, Error> {
        eval_with(&Vars::new(), &Options::default(), node)
    }

    #[test]
    fn literal() {
        assert_eq!(eval(&Node::number(4.5)).unwrap(), 4.5);
    }

    #[test]
    fn arithmetic() {
        let node = Node::binary(
            BinaryOp::Sub,
            Node::binary(BinaryOp::Mul, 3.0.into(), 4.0.into()),
            Node::binary(BinaryOp::Div, 1.0.into(), 4.0.into()),
        );
        assert_eq!(eval(&node).unwrap(), 11.75);
    }

    #[test]
    fn division_by_zero_is_infinite() {
        let node = Node::binary(BinaryOp::Div, 1.0.into(), 0.0.into());
        assert_eq!(eval(&node).unwrap(), f64::INFINITY);
    }

    #[test]
    fn variables_are_resolved_transitively() {
        let mut vars = Vars::new();
        vars.put("a".to_string(), Node::variable("b"));
        vars.put("b".to_string(), Node::binary(BinaryOp::Add, Node::variable("c"), 1.0.into()));
        vars.put("c".to_string(), Node::number(2.0));

        let node = Node::binary(BinaryOp::Mul, Node::variable("a"), Node::variable("a"));
        assert_eq!(eval_with(&vars, &Options::default(), &node).unwrap(), 9.0);
    }

    #[test]
    fn undefined_variable() {
        let err = eval(&Node::variable("nope")).unwrap_err();
        assert_eq!(err.downcast_ref::<UndefinedVariable>(), Some(&UndefinedVariable {
            name: "nope".to_string(),
            suggestions: vec![],
        }));
    }

    #[test]
    fn unary_operators() {
        assert_eq!(eval(&Node::unary(UnaryOp::Negate, 2.0.into())).unwrap(), -2.0);
        assert_eq!(eval(&Node::unary(UnaryOp::Cos, 0.0.into())).unwrap(), 1.0);
        assert_eq!(eval(&Node::unary(UnaryOp::Sin, 0.0.into())).unwrap(), 0.0);
    }

    #[test]
    fn unknown_unary_operator() {
        let err = eval(&Node::operation("son", [1.0.into()])).unwrap_err();
        assert_eq!(err.downcast_ref::<UnknownOperation>(), Some(&UnknownOperation {
            name: "son".to_string(),
            arity: 1,
            suggestions: vec!["sin".to_string()],
        }));
    }

    #[test]
    fn unknown_binary_operator_falls_back_to_power() {
        let node = Node::operation("%", [2.0.into(), 3.0.into()]);
        assert_eq!(eval(&node).unwrap(), 8.0);

        let opts = Options::default().with_binary_fallback(BinaryFallback::Reject);
        let err = eval_with(&Vars::new(), &opts, &node).unwrap_err();
        assert!(err.is::<UnknownOperation>());
    }

    #[test]
    fn other_arities_are_unknown() {
        let err = eval(&Node::operation("plot", [1.0.into(), 2.0.into(), 3.0.into()])).unwrap_err();
        assert_eq!(err.downcast_ref::<UnknownOperation>().map(|kind| kind.arity), Some(3));

        let err = eval(&Node::operation("pi", [])).unwrap_err();
        assert!(err.is::<UnknownOperation>());
    }

    #[test]
    fn self_reference_hits_depth_limit() {
        let mut vars = Vars::new();
        vars.put("x".to_string(), Node::binary(BinaryOp::Add, Node::variable("x"), 1.0.into()));
        let opts = Options::default().with_max_depth(64);

        let err = eval_with(&vars, &opts, &Node::variable("x")).unwrap_err();
        assert_eq!(err.downcast_ref::<MaxDepthExceeded>(), Some(&MaxDepthExceeded { max_depth: 64 }));
    }
}
