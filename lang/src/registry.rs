use crate::ops::{AnyFunction, AnyOperator};
use crate::EvalError;
use std::collections::HashMap;

lazy_static! {
    /// alias → operator. Together with [`FUNCTIONS`] this is the single
    /// source of truth consulted by token classification, precedence
    /// comparison in the converter, and dispatch in the evaluator.
    static ref OPERATORS: HashMap<&'static str, AnyOperator> = {
        use AnyOperator::*;
        let mut table = HashMap::new();
        table.insert("+", Add);
        table.insert("-", Sub);
        table.insert("*", Mul);
        table.insert("/", Div);
        table.insert("DIV", IntDiv);
        table.insert("MOD", Mod);
        table.insert(">", Gt);
        table.insert("<", Lt);
        table.insert("=", Eq);
        table.insert("OR", Or);
        table
    };

    static ref FUNCTIONS: HashMap<&'static str, AnyFunction> = {
        use AnyFunction::*;
        let mut table = HashMap::new();
        table.insert("sqrt", Sqrt);
        table.insert("pow", Pow);
        table.insert("neg", Neg);
        table.insert("abs", Abs);
        table.insert("sin", Sin);
        table.insert("cos", Cos);
        table.insert("arccos", Arccos);
        table.insert("tan", Tan);
        table.insert("cotan", Cotan);
        table.insert("ln", Ln);
        table
    };
}

pub fn lookup_operator(alias: &str) -> Option<AnyOperator> {
    OPERATORS.get(alias).copied()
}

pub fn lookup_function(alias: &str) -> Option<AnyFunction> {
    FUNCTIONS.get(alias).copied()
}

/// The converter's precedence lookup. Resolving an alias that is not a
/// registered operator is an error, not a default rank.
pub fn precedence_of(alias: &str) -> Result<i32, EvalError> {
    lookup_operator(alias)
        .map(|op| op.precedence())
        .ok_or(EvalError::UnknownAlias)
}
