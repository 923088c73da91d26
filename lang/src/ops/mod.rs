pub mod arithmetic;
pub mod comparisons;
pub mod functions;
pub use arithmetic::*;
pub use comparisons::*;
pub use functions::*;

use crate::EvalError;

/// An operator combining two stack values into one result
pub trait BinaryOperator {
    fn exec(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError>;
}

/// A function consuming a single stack value
pub trait UnaryFunction {
    fn exec(&self, operand: f64) -> Result<f64, EvalError>;
}

/// Every registered operator. Precedence and execution both live here
/// so the converter and the evaluator can never disagree about an alias.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnyOperator {
    Add,
    Sub,
    Mul,
    Div,
    IntDiv,
    Mod,
    Gt,
    Lt,
    Eq,
    Or,
}

impl AnyOperator {
    /// Integer rank; higher binds tighter. Every operator is
    /// left-associative, which the converter encodes by popping on
    /// equal precedence.
    pub fn precedence(&self) -> i32 {
        use AnyOperator::*;
        match self {
            Mul | Div | IntDiv | Mod => 3,
            Add | Sub => 2,
            Gt | Lt | Eq => 1,
            Or => 0,
        }
    }
}

impl BinaryOperator for AnyOperator {
    fn exec(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        use AnyOperator::*;
        match self {
            Add => arithmetic::Add.exec(lhs, rhs),
            Sub => arithmetic::Sub.exec(lhs, rhs),
            Mul => arithmetic::Mul.exec(lhs, rhs),
            Div => arithmetic::Div.exec(lhs, rhs),
            IntDiv => arithmetic::IntDiv.exec(lhs, rhs),
            Mod => arithmetic::Mod.exec(lhs, rhs),
            Gt => comparisons::Gt.exec(lhs, rhs),
            Lt => comparisons::Lt.exec(lhs, rhs),
            Eq => comparisons::Eq.exec(lhs, rhs),
            Or => comparisons::Or.exec(lhs, rhs),
        }
    }
}

/// Every registered function. All are unary except `pow`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnyFunction {
    Sqrt,
    Pow,
    Neg,
    Abs,
    Sin,
    Cos,
    Arccos,
    Tan,
    Cotan,
    Ln,
}

impl AnyFunction {
    pub fn arity(&self) -> usize {
        match self {
            AnyFunction::Pow => 2,
            _ => 1,
        }
    }

    /// Operands in left-to-right order; callers pop `arity()` values
    /// off the stack and reverse them. An operand count that does not
    /// match the arity reports the shortage as an underflow.
    pub fn exec(&self, operands: &[f64]) -> Result<f64, EvalError> {
        use AnyFunction::*;
        match (self, operands) {
            (Sqrt, [x]) => functions::Sqrt.exec(*x),
            (Pow, [base, exponent]) => functions::Pow.exec(*base, *exponent),
            (Neg, [x]) => functions::Neg.exec(*x),
            (Abs, [x]) => functions::Abs.exec(*x),
            (Sin, [x]) => functions::Sin.exec(*x),
            (Cos, [x]) => functions::Cos.exec(*x),
            (Arccos, [x]) => functions::Arccos.exec(*x),
            (Tan, [x]) => functions::Tan.exec(*x),
            (Cotan, [x]) => functions::Cotan.exec(*x),
            (Ln, [x]) => functions::Ln.exec(*x),
            _ => Err(EvalError::StackUnderflow),
        }
    }
}
