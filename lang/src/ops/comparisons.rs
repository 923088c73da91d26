//! Comparison and boolean operators. There is no boolean type: results
//! are `1.0`/`0.0` pushed onto the same stack as arithmetic values.

use super::*;

macro_rules! comparison_op {
    ($($Name:ident: $op:tt,)+) => {
        $(
            #[derive(Debug, PartialEq, Eq, Copy, Clone)]
            pub struct $Name;

            impl BinaryOperator for $Name {
                #[inline(always)]
                fn exec(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
                    Ok(if lhs $op rhs { 1.0 } else { 0.0 })
                }
            }
        )+
    }
}

comparison_op![
    Gt: >,
    Lt: <,
    Eq: ==,
];

/// `OR`. Truthiness is exact equality with 1, matching the original
/// engine: `2 OR 0` is falsy.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Or;

impl BinaryOperator for Or {
    fn exec(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        Ok(if lhs == 1.0 || rhs == 1.0 { 1.0 } else { 0.0 })
    }
}
