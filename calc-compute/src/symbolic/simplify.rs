use calc_collections::List;
use calc_error::Error;
use crate::{node::Node, numerical::ctxt::Ctxt};
use super::step::{Step, StepCollector};

/// Simplifies the tree against the variables of the context.
///
/// Fails only if the configured maximum depth is exceeded, which happens when a bound variable
/// refers back to itself.
pub fn simplify(node: &Node, ctxt: &Ctxt<'_>) -> Result<Node, Error> {
    simplify_with(node, ctxt, &mut ())
}

/// Simplifies the tree, returning the simplified tree along with the steps taken.
pub fn simplify_with_steps(node: &Node, ctxt: &Ctxt<'_>) -> Result<(Node, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(node, ctxt, &mut steps)?;
    Ok((simplified, steps))
}

/// Simplifies the tree, reporting every step to the given collector.
pub fn simplify_with(
    node: &Node,
    ctxt: &Ctxt<'_>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Node, Error> {
    simplify_node(node, ctxt, step_collector, 0)
}

fn simplify_node(
    node: &Node,
    ctxt: &Ctxt<'_>,
    step_collector: &mut dyn StepCollector<Step>,
    depth: usize,
) -> Result<Node, Error> {
    ctxt.check_depth(depth)?;

    match node {
        Node::Number(_) => Ok(node.clone()),
        Node::Variable(name) => match ctxt.vars().get(name) {
            Ok(bound) => {
                let with = simplify_node(bound, ctxt, step_collector, depth + 1)?;
                tracing::trace!(%name, %with, "substituted variable");
                step_collector.push(Step::Substitute { name: name.clone(), with: with.clone() });
                Ok(with)
            },
            Err(_) => Ok(node.clone()),
        },
        Node::Operation { name, children } => {
            let children = children
                .iter()
                .map(|child| simplify_node(child, ctxt, step_collector, depth + 1))
                .collect::<Result<List<_>, _>>()?;
            let rebuilt = Node::Operation { name: name.clone(), children };

            Ok(fold(&rebuilt, step_collector).unwrap_or(rebuilt))
        },
    }
}

/// Folds a foldable binary operation whose operands are both numbers.
fn fold(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let op = node.binary_op().filter(|op| op.folds())?;
    let children = node.children()?;
    let lhs = children.first()?.as_number()?;
    let rhs = children.last()?.as_number()?;

    let result = op.apply(lhs, rhs);
    tracing::trace!(%op, lhs, rhs, result, "folded constant operation");
    step_collector.push(Step::Fold { op, lhs, rhs, result });
    Some(Node::Number(result))
}
