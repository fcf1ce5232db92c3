use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::{ErrorKind, EXPR};

/// Formats a list of suggested names for a help message.
fn suggest(kind: &str, suggestions: &[String]) -> String {
    match suggestions {
        [only] => format!("did you mean the `{}` {}?", only.fg(EXPR), kind),
        _ => format!(
            "did you mean one of these {}s? {}",
            kind,
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// The variable is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = if self.suggestions.is_empty() {
        format!("to define it, type: {} := {}", (&self.name).fg(EXPR), "<expression>".fg(EXPR))
    } else {
        suggest("variable", &self.suggestions)
    },
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// Bound variables with a similar name, if any.
    pub suggestions: Vec<String>,
}

/// The operation is not one the evaluator knows for this number of operands.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("unknown operation `{}` with {} operand(s)", self.name, self.arity),
    labels = ["this operation"],
    help = if self.suggestions.is_empty() {
        "the supported operations are `+`, `-`, `*`, `/`, `^`, `negate`, `sin` and `cos`".to_string()
    } else {
        suggest("operation", &self.suggestions)
    },
)]
pub struct UnknownOperation {
    /// The name of the operation.
    pub name: String,

    /// The number of operands it was applied to.
    pub arity: usize,

    /// Known operations of the same arity with a similar name, if any.
    pub suggestions: Vec<String>,
}

/// Evaluation nested deeper than the configured limit.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("maximum depth of {} exceeded", self.max_depth),
    labels = ["while evaluating this expression"],
    help = "check for a variable that is defined in terms of itself",
)]
pub struct MaxDepthExceeded {
    /// The configured maximum depth.
    pub max_depth: usize,
}
