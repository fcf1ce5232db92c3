use calc_collections::List;
use calc_error::Error;
use crate::{node::{BinaryOp, Node}, opts::BinaryFallback};
use super::{eval_child, unknown_operation, Ctxt};

/// Evaluates a two-child operation.
///
/// Both operands are evaluated first, left to right. A name that is not a binary operator is
/// handled according to [`Options::binary_fallback`](crate::opts::Options::binary_fallback).
pub(super) fn eval_binary(
    name: &str,
    children: &List<Node>,
    ctxt: &Ctxt<'_>,
    depth: usize,
) -> Result<f64, Error> {
    let op = match BinaryOp::from_name(name) {
        Some(op) => op,
        None => match ctxt.opts().binary_fallback {
            BinaryFallback::Power => {
                tracing::trace!(name, "unknown binary operation evaluated as `^`");
                BinaryOp::Pow
            },
            BinaryFallback::Reject => {
                let known = BinaryOp::ALL.map(BinaryOp::name);
                return Err(unknown_operation(name, 2, &known));
            },
        },
    };

    let lhs = eval_child(children, 0, ctxt, depth)?;
    let rhs = eval_child(children, 1, ctxt, depth)?;
    Ok(op.apply(lhs, rhs))
}
