use crate::tokens::is_identifier;
use crate::EvalError;
use firestorm::profile_fn;
use itertools::Itertools as _;
use std::collections::HashMap;

pub const BINDING_SEPARATOR: &str = "|";

/// Build the name → value-text table from binding tokens. Bindings are
/// strict `name = value` triples; anything else is malformed. The table
/// lives only for the duration of one substitution.
fn binding_table<'a>(bindings: &[&'a str]) -> Result<HashMap<&'a str, &'a str>, EvalError> {
    if bindings.len() % 3 != 0 {
        return Err(EvalError::UnexpectedToken);
    }

    let equals_count = bindings.iter().filter(|token| **token == "=").count();
    let mut table = HashMap::with_capacity(equals_count);

    for (name, equals, value) in bindings.iter().tuples() {
        if *equals != "=" || !is_identifier(*name) {
            return Err(EvalError::UnexpectedToken);
        }
        // Values are substituted as raw text; the pipeline classifies
        // them after the rewrite. The first binding for a name sticks.
        table.entry(*name).or_insert(*value);
    }

    Ok(table)
}

fn rewrite(formula: &[&str], table: &HashMap<&str, &str>) -> String {
    formula
        .iter()
        .map(|token| table.get(token).copied().unwrap_or(*token))
        .join(" ")
}

/// Substitute `bindings_text` into `formula`, token by token. Tokens
/// with no binding pass through unchanged.
pub fn substitute(formula: &str, bindings_text: &str) -> Result<String, EvalError> {
    profile_fn!(substitute);

    let bindings: Vec<&str> = bindings_text.split_whitespace().collect();
    if bindings.iter().any(|token| *token == BINDING_SEPARATOR) {
        return Err(EvalError::UnexpectedToken);
    }
    let formula: Vec<&str> = formula.split_whitespace().collect();

    let table = binding_table(&bindings)?;
    Ok(rewrite(&formula, &table))
}

/// Detect the `formula | bindings` form. Without a standalone `|` token
/// the expression passes through untouched; with one, the text before
/// it is rewritten through the binding table. A second separator is
/// malformed rather than silently mishandled.
pub fn resolve(expression: &str) -> Result<String, EvalError> {
    profile_fn!(resolve);

    let tokens: Vec<&str> = expression.split_whitespace().collect();
    let split = match tokens.iter().position(|token| *token == BINDING_SEPARATOR) {
        None => return Ok(expression.to_owned()),
        Some(position) => position,
    };

    let (formula, rest) = tokens.split_at(split);
    let bindings = &rest[1..];
    if bindings.iter().any(|token| *token == BINDING_SEPARATOR) {
        return Err(EvalError::UnexpectedToken);
    }

    let table = binding_table(bindings)?;
    Ok(rewrite(formula, &table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_without_separator() {
        assert_eq!(resolve("2 + 3"), Ok("2 + 3".to_owned()));
    }

    #[test]
    fn substitutes_bound_names() {
        assert_eq!(resolve("x + y | x = 2 y = 3"), Ok("2 + 3".to_owned()));
        assert_eq!(resolve("x + x | x = 4"), Ok("4 + 4".to_owned()));
    }

    #[test]
    fn unbound_tokens_pass_through() {
        assert_eq!(
            resolve("x + sqrt ( 16 ) | x = 2"),
            Ok("2 + sqrt ( 16 )".to_owned())
        );
    }

    #[test]
    fn substitution_is_idempotent() {
        let once = resolve("x + y | x = 2 y = 3").unwrap();
        let twice = substitute(&once, "x = 2 y = 3").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn malformed_bindings() {
        // `=` with no preceding name.
        assert_eq!(resolve("x + 1 | = 2"), Err(EvalError::UnexpectedToken));
        // `=` with no following value.
        assert_eq!(resolve("x + 1 | x ="), Err(EvalError::UnexpectedToken));
        // Missing the `=` entirely.
        assert_eq!(resolve("x + 1 | x 2"), Err(EvalError::UnexpectedToken));
        // Name is not an identifier.
        assert_eq!(resolve("x + 1 | 5 = 2"), Err(EvalError::UnexpectedToken));
    }

    #[test]
    fn multiple_separators_are_rejected() {
        assert_eq!(
            resolve("x | x = 1 | y = 2"),
            Err(EvalError::UnexpectedToken)
        );
    }

    #[test]
    fn first_binding_wins_for_duplicate_names() {
        assert_eq!(resolve("x | x = 1 x = 2"), Ok("1".to_owned()));
    }
}
