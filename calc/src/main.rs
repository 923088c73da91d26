mod args;

use anyhow::Result;
use math_parser::evaluate_expression;
use std::io::{self, BufRead, Write};

/// Evaluates infix expressions. One-shot when expressions are passed
/// as arguments, otherwise an interactive prompt loop. The engine only
/// ever returns errors; deciding that a failure ends the process (or
/// doesn't) happens here.
fn main() -> Result<()> {
    let args = args::load();

    if args.expressions.is_empty() {
        return interactive();
    }

    let mut failed = false;
    for expression in &args.expressions {
        match evaluate_expression(expression) {
            Ok(value) => println!("Result: {}", value),
            Err(err) => {
                eprintln!("{}", err);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Read, evaluate, print, repeat. Evaluation errors are printed and the
/// prompt continues; only I/O failures abort. An empty line, `exit`, or
/// end of input ends the session.
fn interactive() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter expression: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let line = line.trim();
        if line.is_empty() || line == "exit" {
            return Ok(());
        }

        match evaluate_expression(line) {
            Ok(value) => println!("Result: {}", value),
            Err(err) => println!("{}", err),
        }
    }
}
