//! Go code model produced by the mapper synthesizer.
//!
//! The model is plain data: type expressions, expressions, statements and
//! declarations. Every node renders itself through
//! [`Renderable`](mapgen_codegen::builder::Renderable), so the synthesizer
//! never manipulates text.

mod decls;
mod exprs;
mod file;
mod lines;
mod stmts;
mod types;

pub use decls::{Decl, FuncDecl, Param, StructDecl, StructField};
pub use exprs::Expr;
pub use file::{GENERATED_HEADER, GoFile, Import};
pub use lines::Lines;
pub use stmts::Stmt;
pub use types::TypeExpr;
