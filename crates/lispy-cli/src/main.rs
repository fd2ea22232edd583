//! Command-line front end (spec.md §6): given filenames, `load` each one in
//! order; given none, run the REPL. This binary owns the only concrete
//! syntax parser in the workspace — CORE (`lispy`) never sees source text.

mod parser;
mod repl;

use std::process::ExitCode;

use lispy::context::{EvalContext, StdoutPrinter};
use lispy::{SharedEnvironment, Value, eval_with_context, global_environment};
use thiserror::Error;

use crate::parser::NomParser;

#[derive(Debug, Error)]
enum CliError {
    #[error("{path}: {source}")]
    Load { path: String, #[source] source: std::io::Error },
}

fn main() -> ExitCode {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    let env = global_environment();

    if paths.is_empty() {
        repl::run(&env);
        return ExitCode::SUCCESS;
    }

    for path in paths {
        if let Err(err) = load_file(&env, &path) {
            eprintln!("{err}");
        }
    }
    ExitCode::SUCCESS
}

/// Invokes the `load` builtin with `path` as a String, the way spec.md §6
/// specifies the CLI's file-argument handling. A missing/unreadable file is
/// surfaced here as a typed [`CliError`] before `load` gets a chance to
/// report the same failure as a `Value::Error`; once the file exists, any
/// load/parse/evaluation error is CORE's own `Value::Error`, printed as-is.
fn load_file(env: &SharedEnvironment, path: &str) -> Result<(), CliError> {
    if let Err(source) = std::fs::metadata(path) {
        return Err(CliError::Load { path: path.to_owned(), source });
    }

    let mut printer = StdoutPrinter;
    let parser = NomParser;
    let mut ctx = EvalContext::new(&mut printer, &parser);
    let expr = Value::sexpr(vec![Value::symbol("load"), Value::string(path)]);
    let result = eval_with_context(env, expr, &mut ctx);
    if result.is_error() {
        eprintln!("{result}");
    }
    Ok(())
}
