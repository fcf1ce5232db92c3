use calc_collections::List;
use calc_error::Error;
use crate::{
    env::{Environment, ScopedBinding, Vars},
    node::Node,
    numerical::{ctxt::Ctxt, eval::Eval},
    opts::Options,
};
use super::{
    error::{InvalidRange, InvalidSweepVariable, NonPositiveStep, StepTooSmall, VariableAlreadyBound},
    sink::DrawingSink,
};

/// The coordinates produced by a sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    /// The values the swept variable took, in sweep order.
    pub xs: List<f64>,

    /// The value of the expression at each of `xs`.
    pub ys: List<f64>,
}

impl Samples {
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if no samples were taken.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the samples as `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    fn push(&mut self, x: f64, y: f64) {
        self.xs.add(x);
        self.ys.add(y);
    }
}

/// The operands of a sweep, borrowed from the request that asked for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep<'a> {
    /// The expression to sample.
    pub expr: &'a Node,

    /// The variable to sweep.
    pub var: &'a Node,

    /// The lower bound of the range.
    pub min: &'a Node,

    /// The upper bound of the range.
    pub max: &'a Node,

    /// The distance between two samples.
    pub step: &'a Node,
}

/// The validated, evaluated operands of a sweep.
#[derive(Debug)]
struct Bounds<'a> {
    var: &'a str,
    min: f64,
    max: f64,
    step: f64,
}

/// Returns the offset of the sample after the one at `offset`, failing if adding `step` no longer
/// changes the offset while it is still in range.
fn advance(offset: f64, step: f64, range: f64) -> Result<f64, Error> {
    let next = offset + step;
    if next <= range && next == offset {
        return Err(Error::unspanned(StepTooSmall { step, offset }));
    }
    Ok(next)
}

impl<'a> Sweep<'a> {
    /// Takes the operands of a sweep from the children of a `plot` request, in the order
    /// `expr, var, min, max, step`.
    pub fn from_args(args: &'a List<Node>) -> Result<Self, Error> {
        Ok(Self {
            expr: args.get(0)?,
            var: args.get(1)?,
            min: args.get(2)?,
            max: args.get(3)?,
            step: args.get(4)?,
        })
    }

    /// Checks the operands against the variable store, and evaluates the bounds and step.
    ///
    /// The checks run in a fixed order, and the first failure is returned:
    ///
    /// 1. The variable must be a bare variable that is not bound.
    /// 2. A bound given as a variable must be bound.
    /// 3. The bounds must be finite, with `min <= max`.
    /// 4. The step must be greater than zero. A step given as a variable is checked to be bound
    ///    after it is evaluated.
    fn bounds(&self, ctxt: &Ctxt<'_>) -> Result<Bounds<'a>, Error> {
        let Node::Variable(var) = self.var else {
            return Err(Error::unspanned(InvalidSweepVariable { found: self.var.to_string() }));
        };
        if ctxt.is_bound(var) {
            return Err(Error::unspanned(VariableAlreadyBound { name: var.clone() }));
        }

        for bound in [self.min, self.max] {
            if let Node::Variable(name) = bound {
                ctxt.lookup(name)?;
            }
        }

        let min = self.min.eval(ctxt)?;
        let max = self.max.eval(ctxt)?;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::unspanned(InvalidRange { min, max }));
        }

        let step = self.step.eval(ctxt)?;
        // also rejects NaN
        if !(step > 0.0) {
            return Err(Error::unspanned(NonPositiveStep { step }));
        }
        if let Node::Variable(name) = self.step {
            ctxt.lookup(name)?;
        }

        Ok(Bounds { var: var.as_str(), min, max, step })
    }

    /// Validates the operands and samples the expression over the range.
    ///
    /// The swept variable is bound in `vars` only while each sample is evaluated. If any
    /// evaluation fails, the sweep stops and the error is returned with `vars` unchanged.
    pub fn sample(&self, vars: &mut Vars, opts: &Options) -> Result<Samples, Error> {
        let Bounds { var, min, max, step } = self.bounds(&Ctxt::new(vars, opts))?;
        let _span = tracing::debug_span!("sweep", var, min, max, step).entered();

        let range = max - min;
        let mut samples = Samples::default();
        let mut offset = 0.0;
        while offset <= range {
            let x = min + offset;
            let y = {
                let scoped = ScopedBinding::bind(vars, var, Node::Number(x));
                self.expr.eval(&Ctxt::new(&scoped, opts))?
            };
            tracing::trace!(x, y, "sampled");
            samples.push(x, y);

            offset = advance(offset, step, range)?;
        }

        tracing::debug!(count = samples.len(), "sweep finished");
        Ok(samples)
    }

    /// Samples the expression in the given environment and draws the result to its drawing sink,
    /// using the plot labels from its options.
    ///
    /// Nothing is drawn if sampling fails.
    pub fn plot<D: DrawingSink>(&self, env: &mut Environment<D>) -> Result<Samples, Error> {
        let (vars, drawer, opts) = env.parts_mut();
        let samples = self.sample(vars, opts)?;

        let labels = &opts.labels;
        drawer.draw_scatter_plot(
            &labels.title,
            &labels.x_axis,
            &labels.y_axis,
            &samples.xs,
            &samples.ys,
        );
        Ok(samples)
    }
}
