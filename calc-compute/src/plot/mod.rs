//! Sampling an expression over a range of one variable, and drawing the result.
//!
//! A [`Sweep`] is built from the five operands of a `plot(expr, var, min, max, step)` request. It
//! validates its operands, then evaluates `expr` once per sample with `var` temporarily bound to
//! the sample's `x` coordinate. The binding is held by a [`ScopedBinding`](crate::env::ScopedBinding),
//! so the variable store is left as it was found whether the sweep succeeds or fails partway.
//!
//! Samples are taken at `x = min + offset`, where `offset` starts at zero and is advanced by
//! adding `step` to it, for as long as `offset <= max - min`. Because the offset accumulates
//! rounding error, whether a sample lands exactly on `max` depends on the values involved:
//! sweeping `0` to `1` by `0.1` takes 11 samples (the last at `0.9999999999999999`), while
//! sweeping `0` to `0.3` by `0.1` takes only 3.

pub mod error;
mod sink;
mod sweep;

pub use sink::{DrawingSink, ScatterPlot};
pub use sweep::{Samples, Sweep};
