//! Go expressions.

use mapgen_codegen::builder::align_columns;

use super::{Lines, TypeExpr};

/// A Go expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    /// `x.name`
    Selector(Box<Expr>, String),
    /// `x[index]`
    Index(Box<Expr>, Box<Expr>),
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `*x`
    Deref(Box<Expr>),
    /// `&x`
    AddrOf(Box<Expr>),
    Binary {
        left: Box<Expr>,
        op: &'static str,
        right: Box<Expr>,
    },
    Nil,
    /// `make(ty, len)`
    Make {
        ty: TypeExpr,
        len: Box<Expr>,
    },
    /// Keyed composite literal, `T{Key: value, ...}`.
    Composite {
        ty: TypeExpr,
        fields: Vec<(String, Expr)>,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn call(func: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            func: Box::new(Self::ident(func)),
            args,
        }
    }

    /// `len(x)`
    pub fn len_of(x: Expr) -> Self {
        Self::call("len", vec![x])
    }

    pub fn field(self, name: impl Into<String>) -> Self {
        Self::Selector(Box::new(self), name.into())
    }

    pub fn index(self, index: Expr) -> Self {
        Self::Index(Box::new(self), Box::new(index))
    }

    /// Zero-argument method call, `x.name()`.
    pub fn method(self, name: impl Into<String>) -> Self {
        Self::Call {
            func: Box::new(self.field(name)),
            args: Vec::new(),
        }
    }

    pub fn deref(self) -> Self {
        Self::Deref(Box::new(self))
    }

    pub fn addr(self) -> Self {
        Self::AddrOf(Box::new(self))
    }

    /// `x != nil`
    pub fn not_nil(self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op: "!=",
            right: Box::new(Self::Nil),
        }
    }

    pub fn make(ty: TypeExpr, len: Expr) -> Self {
        Self::Make {
            ty,
            len: Box::new(len),
        }
    }

    pub fn composite(ty: TypeExpr, fields: Vec<(String, Expr)>) -> Self {
        Self::Composite { ty, fields }
    }

    /// Render the expression. Composite literals span several lines.
    pub fn lines(&self) -> Lines {
        match self {
            Self::Ident(name) => Lines::single(name.clone()),
            Self::Nil => Lines::single("nil"),
            Self::Selector(x, name) => operand(x).suffixed(&format!(".{}", name)),
            Self::Index(x, index) => {
                let mut lines = operand(x).suffixed("[");
                lines.append(index.lines());
                lines.suffixed("]")
            }
            Self::Call { func, args } => {
                let mut lines = operand(func).suffixed("(");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        lines.push_str(", ");
                    }
                    lines.append(arg.lines());
                }
                lines.suffixed(")")
            }
            Self::Deref(x) => unary("*", x),
            Self::AddrOf(x) => unary("&", x),
            Self::Binary { left, op, right } => {
                let mut lines = left.lines().suffixed(&format!(" {} ", op));
                lines.append(right.lines());
                lines
            }
            Self::Make { ty, len } => {
                let mut lines = Lines::single(format!("make({}, ", ty));
                lines.append(len.lines());
                lines.suffixed(")")
            }
            Self::Composite { ty, fields } => composite(ty, fields),
        }
    }
}

fn needs_parens(x: &Expr) -> bool {
    matches!(x, Expr::Deref(_) | Expr::AddrOf(_) | Expr::Binary { .. })
}

/// Render `x` as the operand of a selector, index or call.
fn operand(x: &Expr) -> Lines {
    if needs_parens(x) {
        let mut lines = Lines::single("(");
        lines.append(x.lines());
        lines.suffixed(")")
    } else {
        x.lines()
    }
}

fn unary(op: &str, x: &Expr) -> Lines {
    let mut lines = Lines::single(op);
    if matches!(x, Expr::Binary { .. }) {
        lines.push_str("(");
        lines.append(x.lines());
        lines.push_str(")");
    } else {
        lines.append(x.lines());
    }
    lines
}

fn composite(ty: &TypeExpr, fields: &[(String, Expr)]) -> Lines {
    if fields.is_empty() {
        return Lines::single(format!("{}{{}}", ty));
    }

    let mut lines = Lines::single(format!("{}{{", ty));
    // consecutive single-line entries share one alignment column
    let mut run: Vec<(String, String)> = Vec::new();
    for (key, value) in fields {
        let value = value.lines();
        if value.is_single() {
            run.push((format!("{}:", key), format!("{},", value.text())));
            continue;
        }
        flush_run(&mut lines, &mut run);
        lines.extend(
            value
                .prefixed(&format!("{}: ", key))
                .suffixed(",")
                .nested(1),
        );
    }
    flush_run(&mut lines, &mut run);
    lines.push_line(0, "}");
    lines
}

fn flush_run(lines: &mut Lines, run: &mut Vec<(String, String)>) {
    for row in align_columns(run.as_slice()) {
        lines.push_line(1, row);
    }
    run.clear();
}
