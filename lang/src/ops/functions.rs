use super::*;

macro_rules! unary_fn {
    ($($Name:ident: $f:expr,)+) => {
        $(
            #[derive(Debug, PartialEq, Eq, Copy, Clone)]
            pub struct $Name;

            impl UnaryFunction for $Name {
                #[inline(always)]
                fn exec(&self, operand: f64) -> Result<f64, EvalError> {
                    Ok($f(operand))
                }
            }
        )+
    }
}

unary_fn![
    Neg: |x: f64| -x,
    Abs: f64::abs,
    Sin: f64::sin,
    Cos: f64::cos,
    Arccos: f64::acos,
    Tan: f64::tan,
    // Known gap: no guard where tan(x) is zero, so cotan of a tangent
    // zero yields an infinity rather than an error.
    Cotan: |x: f64| 1.0 / x.tan(),
];

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Sqrt;

impl UnaryFunction for Sqrt {
    fn exec(&self, operand: f64) -> Result<f64, EvalError> {
        if operand < 0.0 {
            return Err(EvalError::RootOfNegative);
        }
        Ok(operand.sqrt())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Ln;

impl UnaryFunction for Ln {
    fn exec(&self, operand: f64) -> Result<f64, EvalError> {
        if operand == 0.0 {
            return Err(EvalError::LogOfZero);
        }
        if operand < 0.0 {
            return Err(EvalError::LogOfNegative);
        }
        Ok(operand.ln())
    }
}

/// `pow`, the only binary function. It has no precedence entry; its
/// argument order is fixed by the call syntax `pow ( base , exponent )`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Pow;

impl Pow {
    pub fn exec(&self, base: f64, exponent: f64) -> Result<f64, EvalError> {
        Ok(base.powf(exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_guards() {
        assert_eq!(Sqrt.exec(-1.0), Err(EvalError::RootOfNegative));
        assert_eq!(Sqrt.exec(16.0), Ok(4.0));
        assert_eq!(Ln.exec(0.0), Err(EvalError::LogOfZero));
        assert_eq!(Ln.exec(-5.0), Err(EvalError::LogOfNegative));
        assert_eq!(Ln.exec(1.0), Ok(0.0));
    }

    #[test]
    fn unary_math() {
        assert_eq!(Neg.exec(3.5), Ok(-3.5));
        assert_eq!(Abs.exec(-3.5), Ok(3.5));
        assert_eq!(Sin.exec(0.0), Ok(0.0));
        assert_eq!(Cos.exec(0.0), Ok(1.0));
        assert_eq!(Arccos.exec(1.0), Ok(0.0));
    }

    #[test]
    fn pow_is_binary() {
        assert_eq!(Pow.exec(2.0, 3.0), Ok(8.0));
        assert_eq!(Pow.exec(9.0, 0.5), Ok(3.0));
    }

    #[test]
    fn cotan_has_no_domain_guard() {
        assert!(Cotan.exec(0.0).unwrap().is_infinite());
    }
}
