use std::fmt;

/// The binary operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,

    /// `-`
    Sub,

    /// `*`
    Mul,

    /// `/`
    Div,

    /// `^`
    Pow,
}

impl BinaryOp {
    /// All binary operators.
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
    ];

    /// Returns the operator with the given operation name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Returns the operation name of the operator.
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    /// Applies the operator to the operands with `f64` arithmetic.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }

    /// Returns true if the simplifier folds this operator when both operands are numbers.
    ///
    /// Only `+`, `-` and `*` are folded; `/` and `^` are always left as they are.
    pub fn folds(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul)
    }

    /// The binding power of the operator, used when displaying trees.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 4,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The unary operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Arithmetic negation.
    Negate,

    /// Sine, in radians.
    Sin,

    /// Cosine, in radians.
    Cos,
}

impl UnaryOp {
    /// All unary operators.
    pub const ALL: [UnaryOp; 3] = [UnaryOp::Negate, UnaryOp::Sin, UnaryOp::Cos];

    /// Returns the operator with the given operation name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Returns the operation name of the operator.
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Negate => "negate",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
        }
    }

    /// Applies the operator to the operand.
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            UnaryOp::Negate => -operand,
            UnaryOp::Sin => operand.sin(),
            UnaryOp::Cos => operand.cos(),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::from_name(op.name()), Some(op));
        }
        for op in UnaryOp::ALL {
            assert_eq!(UnaryOp::from_name(op.name()), Some(op));
        }
        assert_eq!(BinaryOp::from_name("%"), None);
        assert_eq!(UnaryOp::from_name("tan"), None);
    }

    #[test]
    fn only_additive_and_multiplicative_ops_fold() {
        let folding = BinaryOp::ALL.into_iter().filter(|op| op.folds()).collect::<Vec<_>>();
        assert_eq!(folding, vec![BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul]);
    }

    #[test]
    fn apply_matches_f64_arithmetic() {
        assert_eq!(BinaryOp::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(BinaryOp::Sub.apply(3.0, 4.0), -1.0);
        assert_eq!(BinaryOp::Mul.apply(3.0, 4.0), 12.0);
        assert_eq!(BinaryOp::Div.apply(3.0, 4.0), 0.75);
        assert_eq!(BinaryOp::Pow.apply(2.0, 10.0), 1024.0);
        assert_eq!(BinaryOp::Div.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(UnaryOp::Negate.apply(2.5), -2.5);
        assert_eq!(UnaryOp::Sin.apply(0.0), 0.0);
        assert_eq!(UnaryOp::Cos.apply(0.0), 1.0);
    }
}
