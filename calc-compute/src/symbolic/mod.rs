//! Symbolic simplification of expression trees.
//!
//! [`simplify()`] rebuilds a tree bottom-up and returns a new one; the input tree is never
//! modified. Two rewrites are applied:
//!
//! - A variable bound in the store is replaced by the simplified form of the tree it is bound to.
//!   Unbound variables are left in place, which is what makes partial simplification possible.
//! - An operation `+`, `-` or `*` whose two simplified children are both numbers is replaced by
//!   the number it computes. Every other operation, including `/` and `^`, keeps its name and is
//!   rebuilt from its simplified children.
//!
//! ```
//! use calc_compute::{env::Vars, node::{BinaryOp, Node}, numerical::ctxt::Ctxt, opts::Options};
//! use calc_compute::symbolic::simplify;
//!
//! let mut vars = Vars::new();
//! vars.put("y".to_string(), Node::binary(BinaryOp::Add, 1.0.into(), 2.0.into()));
//! let opts = Options::default();
//!
//! // `x * y` becomes `x * 3`
//! let tree = Node::binary(BinaryOp::Mul, Node::variable("x"), Node::variable("y"));
//! let simplified = simplify(&tree, &Ctxt::new(&vars, &opts)).unwrap();
//! assert_eq!(simplified.to_string(), "x * 3");
//! ```
//!
//! Use [`simplify_with_steps()`] to also get the list of rewrites that were applied, in the order
//! they were applied.

pub mod simplify;
pub mod step;

pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step::{Step, StepCollector};
