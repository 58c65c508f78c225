//! Go source front end for mapgen.
//!
//! Parses Go files with tree-sitter, extracts requested struct declarations
//! and the methods declared on them, and decodes field type expressions into
//! [`FieldType`](mapgen_ir::FieldType) shapes.
//!
//! A file that cannot be read or does not parse cleanly is an error; no
//! partial model is produced from a broken file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod decode;
mod error;
mod extract;
mod parser;

pub use decode::decode_type_expr;
pub use error::{Error, Result};
pub use extract::{extract_domain_types, load_domain_types};
pub use parser::{GoParser, MethodDecl, ParsedFile, RawField, StructDecl};
