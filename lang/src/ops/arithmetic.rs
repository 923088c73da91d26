use super::*;

macro_rules! arithmetic_op {
    ($($Name:ident: $op:tt,)+) => {
        $(
            #[derive(Debug, PartialEq, Eq, Copy, Clone)]
            pub struct $Name;

            impl BinaryOperator for $Name {
                #[inline(always)]
                fn exec(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
                    Ok(lhs $op rhs)
                }
            }
        )+
    }
}

arithmetic_op![
    Add: +,
    Sub: -,
    Mul: *,
];

/// `/` reports a zero divisor instead of producing an infinity.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Div;

impl BinaryOperator for Div {
    fn exec(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        if rhs == 0.0 {
            return Err(EvalError::ZeroDivision);
        }
        Ok(lhs / rhs)
    }
}

// DIV and MOD work on operands truncated toward zero, the C div()
// convention. Truncation is explicit so a floor-division reading
// can never sneak in for negative dividends.
fn truncated(value: f64) -> i64 {
    value.trunc() as i64
}

/// `DIV`, the truncated integer quotient.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct IntDiv;

impl BinaryOperator for IntDiv {
    fn exec(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        let (lhs, rhs) = (truncated(lhs), truncated(rhs));
        if rhs == 0 {
            return Err(EvalError::ZeroDivision);
        }
        // i64::MIN / -1 overflows; wrap rather than panic.
        Ok(lhs.wrapping_div(rhs) as f64)
    }
}

/// `MOD`, the remainder matching `IntDiv`. Takes the dividend's sign.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Mod;

impl BinaryOperator for Mod {
    fn exec(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        let (lhs, rhs) = (truncated(lhs), truncated(rhs));
        if rhs == 0 {
            return Err(EvalError::ZeroDivision);
        }
        Ok(lhs.wrapping_rem(rhs) as f64)
    }
}
