//! The state of a calculator session.

use calc_collections::ArrayMap;
use std::ops::Deref;
use super::{node::Node, numerical::ctxt::Ctxt, opts::Options};

/// The variable store: a map from variable names to the trees bound to them.
pub type Vars = ArrayMap<String, Node>;

/// The state of a calculator session: its variables, its drawing sink, and its options.
///
/// An environment is owned by the caller and passed by reference to every operation, so separate
/// sessions never share state. It must not be used by more than one evaluation at a time; the
/// borrow checker enforces this for safe code.
#[derive(Debug, Clone, Default)]
pub struct Environment<D = ()> {
    /// The variables bound in this session.
    vars: Vars,

    /// Where plots are drawn.
    drawer: D,

    /// The options of this session.
    opts: Options,
}

impl Environment<()> {
    /// Creates an environment with no variables, default options, and a drawing sink that
    /// discards plots.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D> Environment<D> {
    /// Creates an environment with no variables and default options that draws plots to the given
    /// sink.
    pub fn with_drawer(drawer: D) -> Self {
        Self::with_opts(drawer, Options::default())
    }

    /// Creates an environment with no variables that draws plots to the given sink.
    pub fn with_opts(drawer: D, opts: Options) -> Self {
        Self { vars: Vars::new(), drawer, opts }
    }

    /// Returns the variables of the session.
    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    /// Returns the variables of the session mutably.
    pub fn vars_mut(&mut self) -> &mut Vars {
        &mut self.vars
    }

    /// Binds a variable, returning the tree it was bound to before.
    pub fn assign(&mut self, name: impl Into<String>, value: Node) -> Option<Node> {
        self.vars.put(name.into(), value)
    }

    /// Returns the drawing sink.
    pub fn drawer(&self) -> &D {
        &self.drawer
    }

    /// Returns the drawing sink mutably.
    pub fn drawer_mut(&mut self) -> &mut D {
        &mut self.drawer
    }

    /// Consumes the environment and returns its drawing sink.
    pub fn into_drawer(self) -> D {
        self.drawer
    }

    /// Returns the options of the session.
    pub fn opts(&self) -> &Options {
        &self.opts
    }

    /// Returns the options of the session mutably.
    pub fn opts_mut(&mut self) -> &mut Options {
        &mut self.opts
    }

    /// Returns a context that evaluates against this session's variables and options.
    pub fn ctxt(&self) -> Ctxt<'_> {
        Ctxt::new(&self.vars, &self.opts)
    }

    /// Borrows every part of the environment at once.
    pub(crate) fn parts_mut(&mut self) -> (&mut Vars, &mut D, &Options) {
        (&mut self.vars, &mut self.drawer, &self.opts)
    }
}

/// A temporary variable binding that is undone when the guard is dropped.
///
/// On drop, the variable is bound back to the tree it had before the guard was created, or
/// removed if it had none. Because this happens in [`Drop`], the binding is undone on every exit
/// path out of the scope holding the guard, including early returns through `?` and unwinding.
///
/// The guard dereferences to the variable store, so evaluation can run against the store while
/// the binding is in place:
///
/// ```
/// use calc_compute::{env::{ScopedBinding, Vars}, node::Node, numerical::{ctxt::Ctxt, eval::Eval}, opts::Options};
///
/// let mut vars = Vars::new();
/// let opts = Options::default();
/// {
///     let scoped = ScopedBinding::bind(&mut vars, "x", Node::number(2.0));
///     let ctxt = Ctxt::new(&scoped, &opts);
///     assert_eq!(Node::variable("x").eval(&ctxt).unwrap(), 2.0);
/// }
/// assert!(!vars.contains_key("x"));
/// ```
#[derive(Debug)]
pub struct ScopedBinding<'a> {
    vars: &'a mut Vars,
    name: String,
    prior: Option<Node>,
}

impl<'a> ScopedBinding<'a> {
    /// Binds `name` to `value` until the returned guard is dropped.
    pub fn bind(vars: &'a mut Vars, name: impl Into<String>, value: Node) -> Self {
        let name = name.into();
        let prior = vars.put(name.clone(), value);
        Self { vars, name, prior }
    }
}

impl Deref for ScopedBinding<'_> {
    type Target = Vars;

    fn deref(&self) -> &Self::Target {
        self.vars
    }
}

impl Drop for ScopedBinding<'_> {
    fn drop(&mut self) {
        let name = std::mem::take(&mut self.name);
        match self.prior.take() {
            Some(prior) => {
                self.vars.put(name, prior);
            },
            None => {
                // the guard put the binding there, so it is still present
                let _ = self.vars.remove(&name);
            },
        }
    }
}
