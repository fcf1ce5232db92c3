//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that carries an error kind through the calculator.
//!
//! The core of the calculator works on trees that carry no source information, so most errors are
//! created without spans. A front end that does know where a tree came from can attach spans with
//! [`Error::with_spans`] before building a report.

#[cfg(test)]
extern crate self as calc_error;

use ariadne::{Color, Report};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as [`Any`], so that it can be downcast to the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing this error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from. Empty if the error was
    /// raised on a tree with no source information.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error with no spans.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Replaces the spans of this error.
    pub fn with_spans(mut self, spans: Vec<Range<usize>>) -> Self {
        self.spans = spans;
        self
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use calc_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("`{}` went wrong", self.what),
        labels = ["here"],
        help = "try something else"
    )]
    struct Oops {
        what: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "never raised")]
    struct Other;

    #[test]
    fn display_uses_message() {
        let err = Error::unspanned(Oops { what: "x".to_string() });
        assert_eq!(err.to_string(), "`x` went wrong");
    }

    #[test]
    fn downcast_to_kind() {
        let err = Error::unspanned(Oops { what: "y".to_string() });
        assert!(err.is::<Oops>());
        assert!(!err.is::<Other>());
        assert_eq!(err.downcast_ref::<Oops>(), Some(&Oops { what: "y".to_string() }));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::unspanned(Oops { what: "z".to_string() });
        let mut buf = Vec::new();
        err.build_report("input").write(("input", Source::from("1 + z")), &mut buf).unwrap();
        let text = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(text.contains("`z` went wrong"));
        assert!(text.contains("help: try something else"));
    }

    #[test]
    fn report_without_spans_or_help() {
        let err = Error::unspanned(Other);
        let mut buf = Vec::new();
        err.build_report("input").write(("input", Source::from("1 + z")), &mut buf).unwrap();
        let text = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(text.contains("never raised"));
        assert!(!text.contains("help"));
    }

    #[test]
    fn report_with_spans() {
        let err = Error::unspanned(Oops { what: "z".to_string() }).with_spans(vec![4..5]);
        let mut buf = Vec::new();
        err.build_report("input").write(("input", Source::from("1 + z")), &mut buf).unwrap();
        let text = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(text.contains("here"));
        assert_eq!(text.matches("try something else").count(), 1);
    }
}
