use calc_error::Error;
use levenshtein::levenshtein;
use crate::{env::Vars, node::Node, opts::Options};
use super::error::{MaxDepthExceeded, UndefinedVariable};

/// Returns the candidates within an edit distance of one from `name`.
pub(crate) fn similar_names<'a>(
    name: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|candidate| levenshtein(candidate, name) < 2)
        .map(str::to_string)
        .collect()
}

/// A context to use when evaluating or simplifying a tree: the variables that can be referenced
/// from the tree, and the options of the session.
#[derive(Debug, Clone, Copy)]
pub struct Ctxt<'a> {
    /// The variables in the context.
    vars: &'a Vars,

    /// The options of the session.
    opts: &'a Options,
}

impl<'a> Ctxt<'a> {
    /// Creates a context over the given variables and options.
    pub fn new(vars: &'a Vars, opts: &'a Options) -> Self {
        Self { vars, opts }
    }

    /// Returns the variables in the context.
    pub fn vars(&self) -> &'a Vars {
        self.vars
    }

    /// Returns the options of the context.
    pub fn opts(&self) -> &'a Options {
        self.opts
    }

    /// Returns true if the variable is bound.
    pub fn is_bound(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Returns the tree bound to the variable, or an [`UndefinedVariable`] error.
    pub fn lookup(&self, name: &str) -> Result<&'a Node, Error> {
        self.vars.get(name).map_err(|_| {
            Error::unspanned(UndefinedVariable {
                name: name.to_string(),
                suggestions: similar_names(name, self.vars.keys().map(String::as_str)),
            })
        })
    }

    /// Fails if `depth` is beyond the configured maximum depth.
    pub(crate) fn check_depth(&self, depth: usize) -> Result<(), Error> {
        match self.opts.max_depth {
            Some(max_depth) if depth > max_depth => {
                Err(Error::unspanned(MaxDepthExceeded { max_depth }))
            },
            _ => Ok(()),
        }
    }
}
