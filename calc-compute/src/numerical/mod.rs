//! Numerical evaluation of expression trees.
//!
//! The [`Eval`](eval::Eval) trait reduces a tree to an `f64`, resolving variables through the
//! variable store held by a [`Ctxt`](ctxt::Ctxt).

pub mod ctxt;
pub mod error;
pub mod eval;
