#[macro_use]
extern crate lazy_static;

mod bindings;
mod eval;
mod ops;
mod postfix;
mod registry;
mod stack;
mod tokens;

pub use bindings::resolve;
pub use eval::evaluate;
pub use ops::{AnyFunction, AnyOperator, BinaryOperator, UnaryFunction};
pub use postfix::convert;
pub use registry::{lookup_function, lookup_operator, precedence_of};
pub use tokens::{classify, is_number, tokenize, Token, TokenKind};

use firestorm::profile_fn;
use std::{error, fmt};

/// Everything that can go wrong between receiving an expression and
/// producing its value. The library never terminates the process;
/// the caller decides what a failure means.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EvalError {
    StackOverflow,
    StackUnderflow,
    UnexpectedToken,
    ZeroDivision,
    RootOfNegative,
    LogOfZero,
    LogOfNegative,
    UnknownAlias,
}

impl error::Error for EvalError {}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EvalError::*;
        match self {
            StackOverflow => write!(f, "Stack overflow"),
            StackUnderflow => write!(f, "Stack underflow"),
            UnexpectedToken => write!(f, "Unexpected token"),
            ZeroDivision => write!(f, "Zero division"),
            RootOfNegative => write!(f, "Root of negative"),
            LogOfZero => write!(f, "Logarithm of zero"),
            LogOfNegative => write!(f, "Logarithm of negative"),
            UnknownAlias => write!(f, "Unexpected alias"),
        }
    }
}

/// Tokenize, convert to postfix, and execute a plain infix expression.
/// No binding-separator handling happens here.
pub fn compile_and_run(expression: &str) -> Result<f64, EvalError> {
    profile_fn!(compile_and_run);

    let tokens = tokens::tokenize(expression)?;
    let program = postfix::convert(&tokens)?;
    eval::evaluate(&program)
}

/// Substitute `bindings_text` into `formula`, then run the pipeline.
pub fn bind_and_run(formula: &str, bindings_text: &str) -> Result<f64, EvalError> {
    profile_fn!(bind_and_run);

    let rewritten = bindings::substitute(formula, bindings_text)?;
    compile_and_run(&rewritten)
}

/// The full pipeline: detects the `|` binding separator, rewrites the
/// formula if one is present, and evaluates the result.
pub fn evaluate_expression(text: &str) -> Result<f64, EvalError> {
    profile_fn!(evaluate_expression);

    let rewritten = bindings::resolve(text)?;
    compile_and_run(&rewritten)
}
