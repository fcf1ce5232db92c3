use std::fmt;
use crate::node::{BinaryOp, Node};

/// A sink for the steps taken by an algorithm.
///
/// The unit type `()` discards every step, so callers that only want the result pay nothing for
/// recording. `Vec<S>` keeps every step in order.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// A rewrite applied by the simplifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The variable was replaced by the simplified tree bound to it.
    Substitute {
        /// The name of the variable.
        name: String,

        /// The tree it was replaced with.
        with: Node,
    },

    /// A binary operation on two numbers was replaced by its result.
    Fold {
        /// The operator.
        op: BinaryOp,

        /// The left operand.
        lhs: f64,

        /// The right operand.
        rhs: f64,

        /// The computed number.
        result: f64,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Substitute { name, with } => write!(f, "substitute {} = {}", name, with),
            Step::Fold { op, lhs, rhs, result } => {
                write!(f, "fold {} {} {} = {}", lhs, op, rhs, result)
            },
        }
    }
}
