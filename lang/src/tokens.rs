use crate::registry::{lookup_function, lookup_operator};
use crate::EvalError;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, digit1},
    combinator::{opt, recognize},
    multi::many0,
    sequence::tuple,
    IResult,
};

pub const OPEN_BRACKET: &str = "(";
pub const CLOSE_BRACKET: &str = ")";
pub const ARGUMENT_SEPARATOR: &str = ",";

/// What a single whitespace-delimited token turned out to be.
/// Every token is exactly one of these; anything else is malformed input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number,
    Operator,
    Function,
    OpenBracket,
    CloseBracket,
    ArgumentSeparator,
}

/// A classified slice of the input. Tokens borrow the expression text;
/// they never outlive the call that produced them.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, kind: TokenKind) -> Self {
        Self { text, kind }
    }
}

fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(tag("-")),
        digit1,
        opt(tuple((tag("."), digit1))),
    )))(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    )))(input)
}

/// The one authority on what counts as a numeric literal: an optional
/// leading `-`, digits, and at most one `.` with digits on both sides.
/// No exponents, no leading `+`. A bare `-` is not a number.
pub fn is_number(token: &str) -> bool {
    matches!(number(token), Ok(("", _)))
}

pub fn is_identifier(token: &str) -> bool {
    matches!(identifier(token), Ok(("", _)))
}

/// Decide what a token is. Order matters: the numeric-literal rule wins,
/// so `-` alone falls through to the operator table.
pub fn classify(token: &str) -> Result<TokenKind, EvalError> {
    if is_number(token) {
        return Ok(TokenKind::Number);
    }
    match token {
        OPEN_BRACKET => return Ok(TokenKind::OpenBracket),
        CLOSE_BRACKET => return Ok(TokenKind::CloseBracket),
        ARGUMENT_SEPARATOR => return Ok(TokenKind::ArgumentSeparator),
        _ => {}
    }
    if lookup_operator(token).is_some() {
        return Ok(TokenKind::Operator);
    }
    if lookup_function(token).is_some() {
        return Ok(TokenKind::Function);
    }
    Err(EvalError::UnexpectedToken)
}

/// Split an expression on whitespace and classify every token.
/// The grammar has no glued tokens: `2+3` is one (malformed) token.
pub fn tokenize(expression: &str) -> Result<Vec<Token<'_>>, EvalError> {
    expression
        .split_whitespace()
        .map(|text| Ok(Token::new(text, classify(text)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_literals() {
        assert!(is_number("3"));
        assert!(is_number("-3"));
        assert!(is_number("-3.5"));
        assert!(is_number("10.25"));
        assert!(is_number("0"));
    }

    #[test]
    fn not_numeric_literals() {
        assert!(!is_number("-"));
        assert!(!is_number("3."));
        assert!(!is_number(".5"));
        assert!(!is_number("3..5"));
        assert!(!is_number("3.5.1"));
        assert!(!is_number("+3"));
        assert!(!is_number("1e5"));
        assert!(!is_number(""));
        assert!(!is_number("--3"));
    }

    #[test]
    fn classification() {
        assert_eq!(classify("42"), Ok(TokenKind::Number));
        assert_eq!(classify("-"), Ok(TokenKind::Operator));
        assert_eq!(classify("MOD"), Ok(TokenKind::Operator));
        assert_eq!(classify("sqrt"), Ok(TokenKind::Function));
        assert_eq!(classify("("), Ok(TokenKind::OpenBracket));
        assert_eq!(classify(")"), Ok(TokenKind::CloseBracket));
        assert_eq!(classify(","), Ok(TokenKind::ArgumentSeparator));
        assert_eq!(classify("frobnicate"), Err(EvalError::UnexpectedToken));
        assert_eq!(classify("2+3"), Err(EvalError::UnexpectedToken));
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_tmp"));
        assert!(is_identifier("speed2"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("="));
        assert!(!is_identifier(""));
    }

    #[test]
    fn tokenize_keeps_order() {
        let tokens = tokenize("2 + sqrt ( 16 )").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Function,
                TokenKind::OpenBracket,
                TokenKind::Number,
                TokenKind::CloseBracket,
            ]
        );
    }

    #[test]
    fn tokenize_rejects_unknown() {
        assert_eq!(tokenize("2 + bogus"), Err(EvalError::UnexpectedToken));
    }
}
