//! Source front end errors.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for source operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read source file '{}'", path.display())]
    #[diagnostic(
        code(mapgen::source::read_error),
        help("check the 'file' entry of this domain type in mapgen.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize the Go parser")]
    #[diagnostic(code(mapgen::source::parser_init))]
    ParserInit,

    #[error("failed to parse '{}'", path.display())]
    #[diagnostic(code(mapgen::source::parse_failed))]
    ParseFailed { path: PathBuf },

    #[error("syntax error in '{}' at {line}:{column}", path.display())]
    #[diagnostic(
        code(mapgen::source::syntax_error),
        help("the file must be valid Go; fix it and run mapgen again")
    )]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("type '{name}' is not declared in '{}'", path.display())]
    #[diagnostic(
        code(mapgen::source::type_not_found),
        help("check the type name and the 'file' entry in [domain_types.{name}]")
    )]
    TypeNotFound { name: String, path: PathBuf },

    #[error("type '{name}' in '{}' is not a struct", path.display())]
    #[diagnostic(code(mapgen::source::not_a_struct))]
    NotAStruct { name: String, path: PathBuf },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
