//! Options that control evaluation, simplification and plotting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the evaluator does with a two-child operation whose name is not a known binary operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryFallback {
    /// Treat the operation as exponentiation, so `a <anything> b` evaluates to `a ^ b`. This
    /// keeps compatibility with front ends that rely on the permissive behavior.
    #[default]
    Power,

    /// Fail with an [`UnknownOperation`](crate::numerical::error::UnknownOperation) error.
    Reject,
}

/// The labels handed to the drawing sink along with the sampled coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotLabels {
    /// The title of the plot.
    ///
    /// The default value is the empty string.
    pub title: String,

    /// The label of the horizontal axis.
    ///
    /// The default value is `"x-axis"`.
    pub x_axis: String,

    /// The label of the vertical axis.
    ///
    /// The default value is `"y-axis"`.
    pub y_axis: String,
}

impl Default for PlotLabels {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_axis: "x-axis".to_string(),
            y_axis: "y-axis".to_string(),
        }
    }
}

/// Options for a calculator session.
///
/// The defaults reproduce the plain behavior of the calculator: no depth limit, permissive binary
/// operators, and the standard plot labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// The maximum depth, in nested nodes plus variable hops, that evaluation and simplification
    /// may reach before failing with [`MaxDepthExceeded`](crate::numerical::error::MaxDepthExceeded).
    ///
    /// Variables bound to expressions that refer back to themselves recurse forever; setting a
    /// limit turns that into an error. The default value is [`None`] (no limit).
    pub max_depth: Option<usize>,

    /// How to evaluate two-child operations with unknown names.
    ///
    /// The default value is [`BinaryFallback::Power`].
    pub binary_fallback: BinaryFallback,

    /// The labels used when drawing plots.
    pub labels: PlotLabels,
}

impl Options {
    /// Sets the maximum depth.
    ///
    /// Returns the options to allow chaining.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets how unknown two-child operations are evaluated.
    ///
    /// Returns the options to allow chaining.
    pub fn with_binary_fallback(mut self, binary_fallback: BinaryFallback) -> Self {
        self.binary_fallback = binary_fallback;
        self
    }

    /// Sets the plot labels.
    ///
    /// Returns the options to allow chaining.
    pub fn with_labels(mut self, labels: PlotLabels) -> Self {
        self.labels = labels;
        self
    }
}
