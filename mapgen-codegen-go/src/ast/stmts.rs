//! Go statements.

use mapgen_codegen::builder::{CodeFragment, Renderable};

use super::{Expr, TypeExpr};

/// A Go statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `name := value`
    Define { name: String, value: Expr },
    /// `target = value`
    Assign { target: Expr, value: Expr },
    /// `var name ty`
    Var { name: String, ty: TypeExpr },
    /// `for index := 0; index < len(over); index++ { ... }`
    ForIndex {
        index: String,
        over: Expr,
        body: Vec<Stmt>,
    },
    /// `for key, value := range over { ... }`
    Range {
        key: String,
        value: String,
        over: Expr,
        body: Vec<Stmt>,
    },
    If { cond: Expr, body: Vec<Stmt> },
    Return(Expr),
}

impl Stmt {
    pub fn define(name: impl Into<String>, value: Expr) -> Self {
        Self::Define {
            name: name.into(),
            value,
        }
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::Assign { target, value }
    }

    pub fn var(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self::Var {
            name: name.into(),
            ty,
        }
    }
}

fn body_fragments(body: &[Stmt]) -> Vec<CodeFragment> {
    body.iter().flat_map(|stmt| stmt.to_fragments()).collect()
}

fn block(header: String, body: &[Stmt]) -> Vec<CodeFragment> {
    vec![CodeFragment::block(
        header,
        body_fragments(body),
        Some("}".to_string()),
    )]
}

impl Renderable for Stmt {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Define { name, value } => value
                .lines()
                .prefixed(&format!("{} := ", name))
                .to_fragments(),
            Self::Assign { target, value } => {
                let mut lines = target.lines().suffixed(" = ");
                lines.append(value.lines());
                lines.to_fragments()
            }
            Self::Var { name, ty } => vec![CodeFragment::line(format!("var {} {}", name, ty))],
            Self::ForIndex { index, over, body } => block(
                format!(
                    "for {i} := 0; {i} < len({over}); {i}++ {{",
                    i = index,
                    over = over.lines().text()
                ),
                body,
            ),
            Self::Range {
                key,
                value,
                over,
                body,
            } => block(
                format!("for {}, {} := range {} {{", key, value, over.lines().text()),
                body,
            ),
            Self::If { cond, body } => block(format!("if {} {{", cond.lines().text()), body),
            Self::Return(value) => value.lines().prefixed("return ").to_fragments(),
        }
    }
}
