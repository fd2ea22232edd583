//! Translates a parser [`AstNode`] tree into a [`Value`] tree (spec.md §4.C).
//!
//! This is the one piece of CORE that looks at raw, still-escaped text (a
//! number literal's digits, a string literal's quotes and backslash
//! escapes) — everything downstream of here only ever sees already-built
//! `Value`s.

use crate::ast::AstNode;
use crate::errors;
use crate::value::Value;

/// The tag a root/program node carries. mpc-family parsers (the ancestor of
/// spec.md's grammar, see `examples/original_source/`) conventionally use
/// `>` for the parse tree's top node; `lispy-cli`'s own parser follows suit.
pub const ROOT_TAG: &str = ">";

/// Reads one [`AstNode`] into a [`Value`] (spec.md §4.C).
pub fn read(node: &AstNode) -> Value {
    if node.tag.contains("number") {
        return read_number(&node.contents);
    }
    if node.tag.contains("symbol") {
        return Value::symbol(node.contents.clone());
    }
    if node.tag.contains("string") {
        return read_string(&node.contents);
    }
    if node.tag.contains("qexpr") {
        return Value::qexpr(read_children(node));
    }
    if node.tag.contains("sexpr") || node.tag == ROOT_TAG {
        return Value::sexpr(read_children(node));
    }
    // Any other leaf (e.g. a stray punctuation token at the top level) is
    // read as an empty SExpr; reaching this arm means the parser produced a
    // tag shape the reader doesn't recognize.
    Value::empty_sexpr()
}

fn read_children(node: &AstNode) -> Vec<Value> {
    node.children.iter().filter(|c| !c.is_skipped()).map(read).collect()
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(_) => errors::invalid_number(text),
    }
}

/// Strips the surrounding quotes and applies the inverse of the printer's
/// escape rules (spec.md §4.C, §4.A `print`).
fn read_string(raw: &str) -> Value {
    let inner = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(raw);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    Value::string(out)
}
