use crate::ops::BinaryOperator as _;
use crate::stack::{Stack, STACK_CAPACITY};
use crate::tokens::{Token, TokenKind};
use crate::{registry, EvalError};
use firestorm::profile_fn;

/// Execute a postfix token sequence as a straight-line stack program.
///
/// Operand order: for operators the second-popped value is the left
/// operand. Exactly one value may remain when the program ends; that
/// value is the result.
pub fn evaluate(program: &[Token<'_>]) -> Result<f64, EvalError> {
    profile_fn!(evaluate);

    let mut stack: Stack<f64> = Stack::new(STACK_CAPACITY);

    for token in program {
        match token.kind {
            TokenKind::Number => {
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| EvalError::UnexpectedToken)?;
                stack.push(value)?;
            }
            TokenKind::Operator => {
                let op =
                    registry::lookup_operator(token.text).ok_or(EvalError::UnknownAlias)?;
                let rhs = stack.pop()?;
                let lhs = stack.pop()?;
                stack.push(op.exec(lhs, rhs)?)?;
            }
            TokenKind::Function => {
                let function =
                    registry::lookup_function(token.text).ok_or(EvalError::UnknownAlias)?;
                let mut operands = Vec::with_capacity(function.arity());
                for _ in 0..function.arity() {
                    operands.push(stack.pop()?);
                }
                operands.reverse();
                stack.push(function.exec(&operands)?)?;
            }
            // Brackets and separators never belong in a postfix program.
            _ => return Err(EvalError::UnexpectedToken),
        }
    }

    let result = stack.pop()?;
    if !stack.is_empty() {
        return Err(EvalError::UnexpectedToken);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postfix::convert;
    use crate::tokens::tokenize;

    fn run(expression: &str) -> Result<f64, EvalError> {
        let tokens = tokenize(expression)?;
        evaluate(&convert(&tokens)?)
    }

    #[test]
    fn operand_order() {
        assert_eq!(run("8 - 3"), Ok(5.0));
        assert_eq!(run("8 / 4"), Ok(2.0));
        assert_eq!(run("2 MOD 5"), Ok(2.0));
    }

    #[test]
    fn empty_program_underflows() {
        assert_eq!(evaluate(&[]), Err(EvalError::StackUnderflow));
        assert_eq!(run(""), Err(EvalError::StackUnderflow));
    }

    #[test]
    fn leftover_operands_are_rejected() {
        assert_eq!(run("3 4"), Err(EvalError::UnexpectedToken));
    }

    #[test]
    fn missing_operand_underflows() {
        assert_eq!(run("3 + +"), Err(EvalError::StackUnderflow));
        assert_eq!(run("sqrt"), Err(EvalError::StackUnderflow));
        assert_eq!(run("pow ( 2 )"), Err(EvalError::StackUnderflow));
    }

    #[test]
    fn stray_bracket_is_rejected() {
        assert_eq!(run("( 2 + 3"), Err(EvalError::UnexpectedToken));
    }

    #[test]
    fn deep_expression_overflows() {
        // Nesting past the 64-slot per-call stacks overflows instead
        // of corrupting anything.
        let mut text = String::new();
        for i in 0..65 {
            if i > 0 {
                text.push_str("+ ( ");
            }
            text.push_str("1 ");
        }
        for _ in 0..64 {
            text.push_str(") ");
        }
        assert_eq!(run(&text), Err(EvalError::StackOverflow));
    }
}
