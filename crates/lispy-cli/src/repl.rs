//! Interactive read-eval-print loop (spec.md §6: "If no arguments, enter the
//! REPL reading one expression per line until end-of-input"), built on
//! `rustyline` the way the CLI-boundary crates in the retrieval pack reach
//! for line editing rather than hand-rolling `stdin().read_line`.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use lispy::context::{EvalContext, StdoutPrinter};
use lispy::{SharedEnvironment, eval_with_context};

use crate::parser::{NomParser, parse_one};

const PROMPT: &str = "lispy> ";

/// Runs until end-of-input (Ctrl-D) or an interrupt (Ctrl-C), printing the
/// result of every successfully-parsed line. Parse errors are reported and
/// do not end the session.
pub fn run(env: &SharedEnvironment) {
    let mut editor = match DefaultEditor::new() {
        Ok(e) => e,
        Err(err) => {
            eprintln!("could not start line editor: {err}");
            return;
        }
    };

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                run_line(env, &line);
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => {
                eprintln!("readline error: {err}");
                break;
            }
        }
    }
}

fn run_line(env: &SharedEnvironment, line: &str) {
    let node = match parse_one(line) {
        Ok(Some(node)) => node,
        Ok(None) => return,
        Err(msg) => {
            eprintln!("parse error: {msg}");
            return;
        }
    };

    let mut printer = StdoutPrinter;
    let parser = NomParser;
    let mut ctx = EvalContext::new(&mut printer, &parser);
    let value = lispy::read(&node);
    let result = eval_with_context(env, value, &mut ctx);
    println!("{result}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use lispy::global_environment;

    #[test]
    fn run_line_prints_nothing_for_blank_input() {
        let env = global_environment();
        run_line(&env, "   ");
        run_line(&env, "; just a comment");
    }

    #[test]
    fn run_line_evaluates_an_expression() {
        let env = global_environment();
        run_line(&env, "(+ 1 2)");
    }
}
