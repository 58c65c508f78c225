//! Go backend for mapgen.
//!
//! [`MapperSynthesizer`] builds a [`GoFile`] model from the pipeline output;
//! the model renders itself through the shared
//! [`CodeBuilder`](mapgen_codegen::builder::CodeBuilder). [`GoGenerator`]
//! ties both together and writes the output file.

mod generator;
mod imports;
mod naming;

pub mod ast;
pub mod mapper;

pub use ast::{Decl, Expr, FuncDecl, GoFile, Import, Stmt, StructDecl, TypeExpr};
pub use generator::GoGenerator;
pub use imports::ImportCollector;
pub use mapgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use mapper::MapperSynthesizer;
pub use naming::GO_NAMING;
