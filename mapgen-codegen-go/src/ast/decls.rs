//! Go top-level declarations.

use mapgen_codegen::builder::{CodeFragment, Renderable, align_columns};

use super::{Stmt, TypeExpr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    pub ty: TypeExpr,
}

/// `type Name struct { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<StructField>,
}

impl StructDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: TypeExpr) -> Self {
        self.fields.push(StructField {
            name: name.into(),
            ty,
        });
        self
    }
}

impl Renderable for StructDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("type {} struct{{}}", self.name))];
        }
        let rows: Vec<(&str, String)> = self
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.ty.to_string()))
            .collect();
        vec![CodeFragment::block(
            format!("type {} struct {{", self.name),
            align_columns(&rows)
                .into_iter()
                .map(CodeFragment::line)
                .collect(),
            Some("}".to_string()),
        )]
    }
}

/// A named, typed parameter or method receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: TypeExpr,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A function, or a method when `receiver` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub receiver: Option<Param>,
    pub name: String,
    pub params: Vec<Param>,
    pub result: Option<TypeExpr>,
    pub body: Vec<Stmt>,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            receiver: None,
            name: name.into(),
            params: Vec::new(),
            result: None,
            body: Vec::new(),
        }
    }

    pub fn receiver(mut self, receiver: Param) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: TypeExpr) -> Self {
        self.result = Some(ty);
        self
    }

    pub fn body(mut self, body: Vec<Stmt>) -> Self {
        self.body = body;
        self
    }

    fn signature(&self) -> String {
        let mut sig = String::from("func ");
        if let Some(recv) = &self.receiver {
            sig.push_str(&format!("({} {}) ", recv.name, recv.ty));
        }
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");
        sig.push_str(&format!("{}({})", self.name, params));
        if let Some(result) = &self.result {
            sig.push_str(&format!(" {}", result));
        }
        sig
    }
}

impl Renderable for FuncDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("{} {{", self.signature()),
            self.body.iter().flat_map(|stmt| stmt.to_fragments()).collect(),
            Some("}".to_string()),
        )]
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Struct(StructDecl),
    Func(FuncDecl),
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Self::Struct(s) => &s.name,
            Self::Func(f) => &f.name,
        }
    }
}

impl Renderable for Decl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Struct(s) => s.to_fragments(),
            Self::Func(f) => f.to_fragments(),
        }
    }
}
