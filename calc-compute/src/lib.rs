//! Evaluation, simplification and plot sampling of calculator expression trees.
//!
//! Trees are built by a front end (see [`node::Node`]) and run against an [`env::Environment`],
//! which holds the variables of a session, its options, and the sink that plots are drawn to. A
//! request tree names what to do with its operands, and [`request::dispatch`] runs it:
//!
//! ```
//! use calc_compute::{env::Environment, node::{BinaryOp, Node}, request::dispatch};
//!
//! let mut env = Environment::new();
//! env.assign("x", Node::number(4.0));
//!
//! // toDouble(3 + x)
//! let request = Node::operation("toDouble", [
//!     Node::binary(BinaryOp::Add, 3.0.into(), Node::variable("x")),
//! ]);
//! assert_eq!(dispatch(&mut env, &request).unwrap(), Node::number(7.0));
//! ```
//!
//! The [`numerical`], [`symbolic`] and [`plot`] modules can also be used directly.

pub mod env;
pub mod node;
pub mod numerical;
pub mod opts;
pub mod plot;
pub mod request;
pub mod symbolic;

pub use calc_collections::{ArrayMap, List};
pub use calc_error::Error;
