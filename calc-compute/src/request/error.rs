use calc_attrs::ErrorKind;
use calc_error::ErrorKind;

/// The request node does not have the expected name or number of operands.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = match &self.expected {
        Some((name, arity)) => format!("expected `{}` with {} operand(s), found `{}`", name, arity, self.found),
        None => format!("expected a request, found `{}`", self.found),
    },
    labels = ["this request"],
    help = "the supported requests are `toDouble(expr)`, `simplify(expr)` and `plot(expr, var, min, max, step)`",
)]
pub struct MalformedRequest {
    /// The name and number of operands the request should have had, if its name was recognized.
    pub expected: Option<(String, usize)>,

    /// The node that was given.
    pub found: String,
}
