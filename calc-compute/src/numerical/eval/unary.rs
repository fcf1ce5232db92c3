use calc_collections::List;
use calc_error::Error;
use crate::node::{Node, UnaryOp};
use super::{eval_child, unknown_operation, Ctxt};

/// Evaluates a one-child operation.
pub(super) fn eval_unary(
    name: &str,
    children: &List<Node>,
    ctxt: &Ctxt<'_>,
    depth: usize,
) -> Result<f64, Error> {
    let Some(op) = UnaryOp::from_name(name) else {
        let known = UnaryOp::ALL.map(UnaryOp::name);
        return Err(unknown_operation(name, 1, &known));
    };

    let operand = eval_child(children, 0, ctxt, depth)?;
    Ok(op.apply(operand))
}
