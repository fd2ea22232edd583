//! The `Value` tagged sum (spec.md §3.1, §4.A) and its constructors, copy,
//! equality, and printing.
//!
//! `Value` is a move-only owned tree: every non-empty `SExpr`/`QExpr` owns
//! its children exclusively, duplication only ever happens through
//! [`Value::deep_clone`], and destruction is ordinary `Drop` — there is no
//! hand-rolled `delete`, matching the "ownership over manual malloc/free"
//! design note (spec.md §9).
//!
//! `Clone` is intentionally NOT derived for [`Function::Lambda`]: a naive
//! derive would `Rc::clone` the captured environment, aliasing it with the
//! original. Use [`Value::deep_clone`], which gives a lambda copy its own
//! independent top frame (see [`crate::environment::Environment::deep_clone`]).

use std::fmt;

use crate::builtins::Builtin;
use crate::environment::SharedEnvironment;

/// Runtime value. See spec.md §3.1 for the full contract.
#[derive(Debug)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    Str(String),
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
    Function(Function),
}

/// A callable value: either an opaque builtin handle or a user-defined
/// lambda (spec.md §3.1).
#[derive(Debug)]
pub enum Function {
    Builtin(Builtin),
    Lambda(Lambda),
}

/// A user-defined function: its formal parameters, its body, and the
/// environment it closed over at definition time.
///
/// `formals` and `body` play the role of the QExprs spec.md describes them
/// as; they are stored as plain `Vec<Value>` (the same payload a
/// `Value::QExpr` would hold) rather than boxed inside another `Value`
/// layer, since a `Lambda` already knows both fields are q-expressions by
/// construction.
///
/// `env`'s parent link is `None` until the lambda is applied (§4.F), at
/// which point the call protocol sets it to the caller's environment.
#[derive(Debug)]
pub struct Lambda {
    pub formals: Vec<Value>,
    pub body: Vec<Value>,
    pub env: SharedEnvironment,
}

/// The symbol that marks the variadic parameter in a formals list.
pub const VARIADIC_MARKER: &str = "&";

impl Value {
    pub fn number(n: i64) -> Self {
        Self::Number(n)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }

    pub fn sexpr(children: Vec<Value>) -> Self {
        Self::SExpr(children)
    }

    pub fn qexpr(children: Vec<Value>) -> Self {
        Self::QExpr(children)
    }

    pub fn empty_sexpr() -> Self {
        Self::SExpr(Vec::new())
    }

    pub fn builtin(b: Builtin) -> Self {
        Self::Function(Function::Builtin(b))
    }

    pub fn lambda(formals: Vec<Value>, body: Vec<Value>, env: SharedEnvironment) -> Self {
        Self::Function(Function::Lambda(Lambda { formals, body, env }))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The kind name spec.md's `print`/type-error messages use (§4.A, §4.E).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Error(_) => "Error",
            Self::Symbol(_) => "Symbol",
            Self::Str(_) => "String",
            Self::SExpr(_) => "S-Expression",
            Self::QExpr(_) => "Q-Expression",
            Self::Function(_) => "Function",
        }
    }

    /// Deep-copies this value. For `Lambda`, the captured environment's own
    /// bindings are cloned into a fresh frame; its parent link is shared by
    /// reference (spec.md §3.2, §4.B, §9).
    pub fn deep_clone(&self) -> Value {
        match self {
            Self::Number(n) => Self::Number(*n),
            Self::Error(m) => Self::Error(m.clone()),
            Self::Symbol(s) => Self::Symbol(s.clone()),
            Self::Str(s) => Self::Str(s.clone()),
            Self::SExpr(c) => Self::SExpr(c.iter().map(Value::deep_clone).collect()),
            Self::QExpr(c) => Self::QExpr(c.iter().map(Value::deep_clone).collect()),
            Self::Function(Function::Builtin(b)) => Self::Function(Function::Builtin(*b)),
            Self::Function(Function::Lambda(l)) => Self::Function(Function::Lambda(Lambda {
                formals: l.formals.iter().map(Value::deep_clone).collect(),
                body: l.body.iter().map(Value::deep_clone).collect(),
                env: l.env.deep_clone_shared(),
            })),
        }
    }

    /// Structural equality (spec.md §4.A `equal`). Different tags are never
    /// equal; a lambda's captured environment is never compared.
    pub fn equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::SExpr(a), Self::SExpr(b)) | (Self::QExpr(a), Self::QExpr(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equal(y))
            }
            (Self::Function(Function::Builtin(a)), Self::Function(Function::Builtin(b))) => a == b,
            (Self::Function(Function::Lambda(a)), Self::Function(Function::Lambda(b))) => {
                a.formals.len() == b.formals.len()
                    && a.formals.iter().zip(&b.formals).all(|(x, y)| x.equal(y))
                    && a.body.len() == b.body.len()
                    && a.body.iter().zip(&b.body).all(|(x, y)| x.equal(y))
            }
            _ => false,
        }
    }

    /// Re-tags an `SExpr` as a `QExpr` or vice versa in place, the one
    /// sanctioned tag mutation spec.md §3.1 allows.
    pub fn retag_to_sexpr(self) -> Value {
        match self {
            Self::QExpr(c) => Self::SExpr(c),
            other => other,
        }
    }

    pub fn retag_to_qexpr(self) -> Value {
        match self {
            Self::SExpr(c) => Self::QExpr(c),
            other => other,
        }
    }
}

fn write_escaped_str(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for ch in s.chars() {
        match ch {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            _ => write!(f, "{ch}")?,
        }
    }
    write!(f, "\"")
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Error(msg) => write!(f, "Error: {msg}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::Str(s) => write_escaped_str(f, s),
            Self::SExpr(c) => write_children(f, c, '(', ')'),
            Self::QExpr(c) => write_children(f, c, '{', '}'),
            Self::Function(Function::Builtin(_)) => write!(f, "<builtin>"),
            Self::Function(Function::Lambda(l)) => {
                write!(f, "(\\ ")?;
                write_children(f, &l.formals, '{', '}')?;
                write!(f, " ")?;
                write_children(f, &l.body, '{', '}')?;
                write!(f, ")")
            }
        }
    }
}
