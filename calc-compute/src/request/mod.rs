//! Dispatching of request nodes.
//!
//! A front end hands the calculator a tree whose root names what to do with the rest of it:
//!
//! | Request                          | Result                                                   |
//! | -------------------------------- | -------------------------------------------------------- |
//! | `toDouble(expr)`                 | `expr` evaluated to a number                             |
//! | `simplify(expr)`                 | `expr` simplified against the bound variables            |
//! | `plot(expr, var, min, max, step)`| `1`, after drawing `expr` sampled over `var` to the sink |
//!
//! The result of `plot` carries no meaning; the samples go to the environment's drawing sink.

pub mod error;

use calc_collections::List;
use calc_error::Error;
use crate::{
    env::Environment,
    node::Node,
    numerical::eval::Eval,
    plot::{DrawingSink, Sweep},
    symbolic::simplify,
};
use error::MalformedRequest;

/// Returns the children of `node` if it is an operation named `name` with exactly `arity`
/// children. Any other node is rejected with [`MalformedRequest`].
fn expect_request<'a>(node: &'a Node, name: &str, arity: usize) -> Result<&'a List<Node>, Error> {
    match node {
        Node::Operation { name: found, children } if found == name && children.len() == arity => {
            Ok(children)
        },
        _ => Err(Error::unspanned(MalformedRequest {
            expected: Some((name.to_string(), arity)),
            found: node.to_string(),
        })),
    }
}

/// A parsed request, borrowing its operands from the request node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request<'a> {
    /// `toDouble(expr)`
    ToDouble(&'a Node),

    /// `simplify(expr)`
    Simplify(&'a Node),

    /// `plot(expr, var, min, max, step)`
    Plot(Sweep<'a>),
}

impl<'a> Request<'a> {
    /// Parses a request node.
    pub fn parse(node: &'a Node) -> Result<Self, Error> {
        let request = match node.name() {
            Some("toDouble") => Request::ToDouble(expect_request(node, "toDouble", 1)?.get(0)?),
            Some("simplify") => Request::Simplify(expect_request(node, "simplify", 1)?.get(0)?),
            Some("plot") => Request::Plot(Sweep::from_args(expect_request(node, "plot", 5)?)?),
            _ => return Err(Error::unspanned(MalformedRequest {
                expected: None,
                found: node.to_string(),
            })),
        };
        Ok(request)
    }

    /// Returns the name of the request.
    pub fn name(&self) -> &'static str {
        match self {
            Request::ToDouble(_) => "toDouble",
            Request::Simplify(_) => "simplify",
            Request::Plot(_) => "plot",
        }
    }

    /// Runs the request in the given environment.
    pub fn run<D: DrawingSink>(&self, env: &mut Environment<D>) -> Result<Node, Error> {
        match self {
            Request::ToDouble(expr) => expr.eval(&env.ctxt()).map(Node::Number),
            Request::Simplify(expr) => simplify(expr, &env.ctxt()),
            Request::Plot(sweep) => {
                sweep.plot(env)?;
                Ok(Node::Number(1.0))
            },
        }
    }
}

/// Parses and runs a request node.
pub fn dispatch<D: DrawingSink>(env: &mut Environment<D>, node: &Node) -> Result<Node, Error> {
    let request = Request::parse(node)?;
    let _span = tracing::debug_span!("request", name = request.name()).entered();
    request.run(env)
}

/// Runs a `toDouble(expr)` request, returning a number node.
pub fn handle_to_double<D>(env: &Environment<D>, node: &Node) -> Result<Node, Error> {
    let expr = expect_request(node, "toDouble", 1)?.get(0)?;
    expr.eval(&env.ctxt()).map(Node::Number)
}

/// Runs a `simplify(expr)` request, returning the simplified tree.
pub fn handle_simplify<D>(env: &Environment<D>, node: &Node) -> Result<Node, Error> {
    let expr = expect_request(node, "simplify", 1)?.get(0)?;
    simplify(expr, &env.ctxt())
}

/// Runs a `plot(expr, var, min, max, step)` request, returning the number `1`.
pub fn handle_plot<D: DrawingSink>(env: &mut Environment<D>, node: &Node) -> Result<Node, Error> {
    Sweep::from_args(expect_request(node, "plot", 5)?)?.plot(env)?;
    Ok(Node::Number(1.0))
}
