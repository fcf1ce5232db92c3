//! Errors raised when a sweep's operands are invalid.

use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::{ErrorKind, EXPR};

/// The variable to sweep is not a bare variable.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("cannot sweep over `{}`", self.found),
    labels = ["expected a variable name here"],
    help = format!("the second operand of {} must be a variable name", "plot".fg(EXPR)),
)]
pub struct InvalidSweepVariable {
    /// The operand that was given instead.
    pub found: String,
}

/// The variable to sweep is already bound.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("cannot sweep over `{}`, which is already defined", self.name),
    labels = ["this variable"],
    help = "sweep over a variable that is not defined, or remove its definition first",
)]
pub struct VariableAlreadyBound {
    /// The name of the variable.
    pub name: String,
}

/// The range to sweep is empty or not finite.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid range from {} to {}", self.min, self.max),
    labels = ["the lower bound", "the upper bound"],
    help = if self.min > self.max {
        "the lower bound must not be greater than the upper bound"
    } else {
        "both bounds must be finite numbers"
    },
)]
pub struct InvalidRange {
    /// The evaluated lower bound.
    pub min: f64,

    /// The evaluated upper bound.
    pub max: f64,
}

/// The step is zero or negative.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("step must be greater than zero, but it is {}", self.step),
    labels = ["this step"],
)]
pub struct NonPositiveStep {
    /// The evaluated step.
    pub step: f64,
}

/// The step is too small to advance the sweep.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("step {} is too small to advance the sweep past offset {}", self.step, self.offset),
    labels = ["this step"],
    help = "use a larger step, or a narrower range",
)]
pub struct StepTooSmall {
    /// The evaluated step.
    pub step: f64,

    /// The offset from the lower bound that the step could not move past.
    pub offset: f64,
}
