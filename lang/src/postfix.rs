use crate::stack::{Stack, STACK_CAPACITY};
use crate::tokens::{Token, TokenKind};
use crate::{registry, EvalError};
use firestorm::profile_fn;

/// Shunting-yard: rewrite an infix token sequence into postfix order.
///
/// The auxiliary stack holds operators, functions, and open brackets
/// awaiting emission; it is always empty again by the time a balanced
/// expression has been converted. Unbalanced brackets surface as
/// `UnexpectedToken` when the stack runs dry where an open bracket was
/// required. A stray open bracket is drained into the output at end of
/// input and left for the evaluator to reject.
pub fn convert<'a>(tokens: &[Token<'a>]) -> Result<Vec<Token<'a>>, EvalError> {
    profile_fn!(convert);

    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Stack<Token<'a>> = Stack::new(STACK_CAPACITY);

    for token in tokens {
        match token.kind {
            TokenKind::Number => output.push(*token),
            TokenKind::Function => stack.push(*token)?,
            TokenKind::ArgumentSeparator => loop {
                match stack.peek() {
                    Some(top) if top.kind == TokenKind::OpenBracket => break,
                    Some(_) => output.push(stack.pop()?),
                    None => return Err(EvalError::UnexpectedToken),
                }
            },
            TokenKind::Operator => {
                // Left-associative pop rule: equal precedence pops, so
                // chains like `8 - 3 - 2` evaluate left to right.
                while let Some(top) = stack.peek() {
                    if top.kind != TokenKind::Operator {
                        break;
                    }
                    if registry::precedence_of(token.text)?
                        <= registry::precedence_of(top.text)?
                    {
                        output.push(stack.pop()?);
                    } else {
                        break;
                    }
                }
                stack.push(*token)?;
            }
            TokenKind::OpenBracket => stack.push(*token)?,
            TokenKind::CloseBracket => {
                loop {
                    match stack.peek() {
                        Some(top) if top.kind == TokenKind::OpenBracket => break,
                        Some(_) => output.push(stack.pop()?),
                        None => return Err(EvalError::UnexpectedToken),
                    }
                }
                stack.pop()?;
                // `f ( ... )` leaves the function alias below the
                // bracket; emit it once the call closes.
                if let Some(top) = stack.peek() {
                    if top.kind == TokenKind::Function {
                        output.push(stack.pop()?);
                    }
                }
            }
        }
    }

    while !stack.is_empty() {
        output.push(stack.pop()?);
    }

    Ok(output)
}
