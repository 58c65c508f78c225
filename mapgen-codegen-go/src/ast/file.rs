//! A complete Go source file.

use mapgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Decl;

/// First line of every generated file, recognised by Go tooling.
pub const GENERATED_HEADER: &str = "Code generated by mapgen. DO NOT EDIT.";

/// An import spec.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Import {
    pub path: String,
    pub alias: String,
}

impl Import {
    pub fn new(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: alias.into(),
        }
    }

    /// The spec text, with the alias spelled out only when it differs
    /// from the last path segment.
    pub fn spec(&self) -> String {
        let last = self.path.rsplit('/').next().unwrap_or(&self.path);
        if last == self.alias {
            format!("\"{}\"", self.path)
        } else {
            format!("{} \"{}\"", self.alias, self.path)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFile {
    pub package: String,
    /// Sorted by path.
    pub imports: Vec<Import>,
    pub decls: Vec<Decl>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: Vec::new(),
            decls: Vec::new(),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Decl> {
        self.decls.iter().find(|d| d.name() == name)
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }

    fn import_fragments(&self) -> Vec<CodeFragment> {
        match self.imports.as_slice() {
            [] => Vec::new(),
            [single] => vec![
                CodeFragment::line(format!("import {}", single.spec())),
                CodeFragment::blank(),
            ],
            many => vec![
                CodeFragment::block(
                    "import (",
                    many.iter()
                        .map(|import| CodeFragment::line(import.spec()))
                        .collect(),
                    Some(")".to_string()),
                ),
                CodeFragment::blank(),
            ],
        }
    }
}

impl Renderable for GoFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![
            CodeFragment::comment(GENERATED_HEADER),
            CodeFragment::blank(),
            CodeFragment::line(format!("package {}", self.package)),
            CodeFragment::blank(),
        ];
        fragments.extend(self.import_fragments());
        for (i, decl) in self.decls.iter().enumerate() {
            if i > 0 {
                fragments.push(CodeFragment::blank());
            }
            fragments.extend(decl.to_fragments());
        }
        fragments
    }
}
