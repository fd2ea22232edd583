//! The concrete grammar for Lispy source text (spec.md §6), built with `nom`
//! the way `examples/other_examples/manifests/` reaches for it for
//! hand-written recursive-descent parsers. Produces [`lispy::AstNode`] trees
//! tagged exactly the way [`lispy::reader::read`] expects.

use nom::Parser as _;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{escaped, take_while1};
use nom::character::complete::{char as nom_char, multispace0, none_of, one_of};
use nom::combinator::{map, opt, recognize};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded};

use lispy::AstNode;

const SYMBOL_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_+-*/\\=<>!&";

fn number(input: &str) -> IResult<&str, AstNode> {
    map(recognize(pair(opt(nom_char('-')), take_while1(|c: char| c.is_ascii_digit()))), |s: &str| {
        AstNode::leaf("number", s)
    })
    .parse(input)
}

fn symbol(input: &str) -> IResult<&str, AstNode> {
    map(take_while1(|c: char| SYMBOL_CHARS.contains(c)), |s: &str| AstNode::leaf("symbol", s)).parse(input)
}

fn string_literal(input: &str) -> IResult<&str, AstNode> {
    let body = opt(escaped(none_of("\"\\"), '\\', one_of("\"\\nrt")));
    map(recognize(delimited(nom_char('"'), body, nom_char('"'))), |s: &str| AstNode::leaf("string", s))
        .parse(input)
}

fn comment(input: &str) -> IResult<&str, AstNode> {
    map(recognize(preceded(nom_char(';'), nom::bytes::complete::take_till(|c| c == '\n'))), |s: &str| {
        AstNode::leaf("comment", s)
    })
    .parse(input)
}

/// Consumes alternating runs of whitespace and `;`-comments. Written as an
/// explicit loop rather than `many0` over an `alt` of the two, since
/// `multispace0` always succeeds (even matching zero bytes) and would make
/// `many0` treat "no progress" as a hard parse error instead of simply
/// stopping.
fn whitespace_or_comment(input: &str) -> IResult<&str, ()> {
    let mut rest = input;
    loop {
        let (after_ws, _) = multispace0(rest)?;
        match comment(after_ws) {
            Ok((after_comment, _)) => rest = after_comment,
            Err(_) => return Ok((after_ws, ())),
        }
    }
}

fn sexpr(input: &str) -> IResult<&str, AstNode> {
    map(
        delimited(
            pair(nom_char('('), whitespace_or_comment),
            many0(delimited(whitespace_or_comment, expr, whitespace_or_comment)),
            nom_char(')'),
        ),
        |children| AstNode::interior("sexpr", children),
    )
    .parse(input)
}

fn qexpr(input: &str) -> IResult<&str, AstNode> {
    map(
        delimited(
            pair(nom_char('{'), whitespace_or_comment),
            many0(delimited(whitespace_or_comment, expr, whitespace_or_comment)),
            nom_char('}'),
        ),
        |children| AstNode::interior("qexpr", children),
    )
    .parse(input)
}

fn expr(input: &str) -> IResult<&str, AstNode> {
    alt((number, string_literal, sexpr, qexpr, symbol)).parse(input)
}

/// Parses a full program: zero or more top-level expressions, tolerating
/// leading/trailing whitespace and comments (spec.md §6 "a top-level program
/// is `expr*`").
pub fn parse_program(source: &str) -> Result<Vec<AstNode>, String> {
    let mut rest = source;
    let mut forms = Vec::new();
    loop {
        let (after_ws, ()) = whitespace_or_comment(rest).map_err(|e| e.to_string())?;
        if after_ws.is_empty() {
            return Ok(forms);
        }
        match expr(after_ws) {
            Ok((remaining, node)) => {
                forms.push(node);
                rest = remaining;
            }
            Err(err) => return Err(format!("parse error at {:?}: {err}", &after_ws[..after_ws.len().min(30)])),
        }
    }
}

/// Parses exactly one top-level expression, used by the REPL to read one
/// line at a time. Returns `Ok(None)` for a blank (whitespace/comment-only)
/// line.
pub fn parse_one(line: &str) -> Result<Option<AstNode>, String> {
    let (after_ws, ()) = whitespace_or_comment(line).map_err(|e| e.to_string())?;
    if after_ws.is_empty() {
        return Ok(None);
    }
    let (remaining, node) = expr(after_ws).map_err(|e| e.to_string())?;
    let (remaining, ()) = whitespace_or_comment(remaining).map_err(|e| e.to_string())?;
    if !remaining.is_empty() {
        return Err(format!("trailing input: {remaining:?}"));
    }
    Ok(Some(node))
}

/// Implements [`lispy::Parser`] so `load` can delegate file parsing through
/// [`lispy::context::EvalContext`] without CORE knowing this grammar exists.
#[derive(Debug, Default)]
pub struct NomParser;

impl lispy::Parser for NomParser {
    fn parse_program(&self, source: &str) -> Result<Vec<AstNode>, String> {
        parse_program(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_and_negative_number() {
        assert_eq!(parse_one("42").unwrap().unwrap(), AstNode::leaf("number", "42"));
        assert_eq!(parse_one("-7").unwrap().unwrap(), AstNode::leaf("number", "-7"));
    }

    #[test]
    fn parses_symbol_with_operator_characters() {
        let node = parse_one("add-mul!").unwrap().unwrap();
        assert_eq!(node, AstNode::leaf("symbol", "add-mul!"));
    }

    #[test]
    fn parses_string_with_escapes() {
        let node = parse_one(r#""a\nb\"c""#).unwrap().unwrap();
        assert_eq!(node.tag, "string");
    }

    #[test]
    fn parses_nested_sexpr_and_qexpr() {
        let node = parse_one("(+ 1 {2 3})").unwrap().unwrap();
        assert_eq!(node.tag, "sexpr");
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[2].tag, "qexpr");
    }

    #[test]
    fn skips_comments_between_forms() {
        let forms = parse_program("; leading comment\n(+ 1 2) ; trailing\n(- 3 4)").unwrap();
        assert_eq!(forms.len(), 2);
    }

    #[test]
    fn blank_line_parses_as_none() {
        assert!(parse_one("   ").unwrap().is_none());
        assert!(parse_one("; only a comment").unwrap().is_none());
    }

    #[test]
    fn trailing_input_after_one_expr_is_an_error() {
        assert!(parse_one("1 2").is_err());
    }
}
