//! Go parser using tree-sitter.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use miette::{NamedSource, SourceSpan};
use tree_sitter::{Node, Parser};

use crate::{Error, Result};

/// A named struct field with its type expression as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub name: String,
    pub type_text: String,
}

/// A top-level `type X struct { ... }` declaration.
#[derive(Debug, Clone)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<RawField>,
}

/// A method declaration, reduced to what getter detection needs.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    /// Receiver type name, pointer marker and type arguments stripped.
    pub receiver: String,
    pub name: String,
    pub param_count: usize,
    /// Result type expressions, one per result value.
    pub results: Vec<String>,
}

impl MethodDecl {
    /// Zero parameters and exactly one result.
    pub fn is_getter_shaped(&self) -> bool {
        self.param_count == 0 && self.results.len() == 1
    }
}

/// Declarations extracted from one Go file.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub package: Option<String>,
    /// Package alias → import path.
    pub imports: BTreeMap<String, String>,
    pub structs: Vec<StructDecl>,
    /// Type names declared with a non-struct underlying type.
    pub other_types: Vec<String>,
    pub methods: Vec<MethodDecl>,
}

impl ParsedFile {
    pub fn find_struct(&self, name: &str) -> Option<&StructDecl> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// Methods declared on `receiver`, in source order.
    pub fn methods_of<'a>(&'a self, receiver: &'a str) -> impl Iterator<Item = &'a MethodDecl> {
        self.methods.iter().filter(move |m| m.receiver == receiver)
    }
}

/// Go parser.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Creates a new Go parser.
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|_| Box::new(Error::ParserInit))?;
        Ok(Self { parser })
    }

    /// Reads and parses a Go source file.
    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedFile> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.parse(&source, path)
    }

    /// Parses Go source text. Any syntax error fails the whole file.
    pub fn parse(&mut self, source: &str, path: &Path) -> Result<ParsedFile> {
        let tree = self.parser.parse(source, None).ok_or_else(|| {
            Box::new(Error::ParseFailed {
                path: path.to_path_buf(),
            })
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(syntax_error(root, source, path));
        }

        let mut visitor = Visitor::new(source, path);
        visitor.visit_source_file(root);
        Ok(visitor.finish())
    }
}

/// Build a syntax error pointing at the first error or missing node.
fn syntax_error(root: Node, source: &str, path: &Path) -> Box<Error> {
    let node = first_error(root).unwrap_or(root);
    let position = node.start_position();
    let message = if node.is_missing() {
        format!("missing '{}'", node.kind())
    } else {
        "unexpected syntax".to_string()
    };

    Box::new(Error::Syntax {
        src: NamedSource::new(path.display().to_string(), source.to_string()),
        span: SourceSpan::from(node.start_byte()..node.end_byte().max(node.start_byte() + 1)),
        message,
        path: path.to_path_buf(),
        line: position.row + 1,
        column: position.column + 1,
    })
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(first_error)
}

/// AST visitor that extracts declarations from tree-sitter nodes.
struct Visitor<'a> {
    source: &'a str,
    path: &'a Path,
    package: Option<String>,
    imports: BTreeMap<String, String>,
    structs: Vec<StructDecl>,
    other_types: Vec<String>,
    methods: Vec<MethodDecl>,
}

impl<'a> Visitor<'a> {
    fn new(source: &'a str, path: &'a Path) -> Self {
        Self {
            source,
            path,
            package: None,
            imports: BTreeMap::new(),
            structs: Vec::new(),
            other_types: Vec::new(),
            methods: Vec::new(),
        }
    }

    fn finish(self) -> ParsedFile {
        ParsedFile {
            path: self.path.to_path_buf(),
            package: self.package,
            imports: self.imports,
            structs: self.structs,
            other_types: self.other_types,
            methods: self.methods,
        }
    }

    fn node_text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn field_text(&self, node: Node, field: &str) -> Option<&'a str> {
        node.child_by_field_name(field).map(|n| self.node_text(n))
    }

    fn visit_source_file(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "package_clause" => self.visit_package(child),
                "import_declaration" => self.visit_imports(child),
                "type_declaration" => self.visit_type_declaration(child),
                "method_declaration" => self.visit_method(child),
                _ => {}
            }
        }
    }

    fn visit_package(&mut self, node: Node) {
        let mut cursor = node.walk();
        self.package = node
            .children(&mut cursor)
            .find(|c| c.kind() == "package_identifier")
            .map(|c| self.node_text(c).to_string());
    }

    fn visit_imports(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "import_spec" => self.visit_import_spec(child),
                "import_spec_list" => {
                    let mut inner = child.walk();
                    for spec in child.children(&mut inner) {
                        if spec.kind() == "import_spec" {
                            self.visit_import_spec(spec);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn visit_import_spec(&mut self, node: Node) {
        let Some(path) = self.field_text(node, "path") else {
            return;
        };
        let path = path.trim_matches(|c| c == '"' || c == '`').to_string();
        let alias = match self.field_text(node, "name") {
            // Dot and blank imports cannot qualify a type name.
            Some("." | "_") => return,
            Some(alias) => alias.to_string(),
            None => path.rsplit('/').next().unwrap_or(&path).to_string(),
        };
        self.imports.insert(alias, path);
    }

    fn visit_type_declaration(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "type_spec" {
                self.visit_type_spec(child);
            }
        }
    }

    fn visit_type_spec(&mut self, node: Node) {
        let Some(name) = self.field_text(node, "name") else {
            return;
        };
        match node.child_by_field_name("type") {
            Some(ty) if ty.kind() == "struct_type" => {
                let fields = self.visit_struct(ty);
                self.structs.push(StructDecl {
                    name: name.to_string(),
                    fields,
                });
            }
            _ => self.other_types.push(name.to_string()),
        }
    }

    fn visit_struct(&self, node: Node) -> Vec<RawField> {
        let mut fields = Vec::new();
        let mut cursor = node.walk();
        for list in node.children(&mut cursor) {
            if list.kind() != "field_declaration_list" {
                continue;
            }
            let mut inner = list.walk();
            for decl in list.children(&mut inner) {
                if decl.kind() == "field_declaration" {
                    self.visit_field_declaration(decl, &mut fields);
                }
            }
        }
        fields
    }

    /// `a, b int` yields two fields; embedded fields carry no name and are skipped.
    fn visit_field_declaration(&self, node: Node, fields: &mut Vec<RawField>) {
        let Some(type_text) = self.field_text(node, "type") else {
            return;
        };
        let mut cursor = node.walk();
        for name in node.children_by_field_name("name", &mut cursor) {
            fields.push(RawField {
                name: self.node_text(name).to_string(),
                type_text: type_text.to_string(),
            });
        }
    }

    fn visit_method(&mut self, node: Node) {
        let Some(receiver) = node
            .child_by_field_name("receiver")
            .and_then(|r| self.receiver_type(r))
        else {
            return;
        };
        let Some(name) = self.field_text(node, "name") else {
            return;
        };

        let param_count = node
            .child_by_field_name("parameters")
            .map(|p| self.parameter_types(p).len())
            .unwrap_or(0);

        let results = match node.child_by_field_name("result") {
            None => Vec::new(),
            Some(result) if result.kind() == "parameter_list" => self.parameter_types(result),
            Some(result) => vec![self.node_text(result).to_string()],
        };

        self.methods.push(MethodDecl {
            receiver,
            name: name.to_string(),
            param_count,
            results,
        });
    }

    /// One type expression per declared value; `(a, b int)` counts twice.
    fn parameter_types(&self, list: Node) -> Vec<String> {
        let mut types = Vec::new();
        let mut cursor = list.walk();
        for decl in list.children(&mut cursor) {
            if !matches!(
                decl.kind(),
                "parameter_declaration" | "variadic_parameter_declaration"
            ) {
                continue;
            }
            let ty = self.field_text(decl, "type").unwrap_or_default();
            let mut names = decl.walk();
            let count = decl.children_by_field_name("name", &mut names).count().max(1);
            types.extend(std::iter::repeat_n(ty.to_string(), count));
        }
        types
    }

    fn receiver_type(&self, list: Node) -> Option<String> {
        let mut cursor = list.walk();
        let decl = list
            .children(&mut cursor)
            .find(|c| c.kind() == "parameter_declaration")?;
        let text = self.field_text(decl, "type")?;
        let base = text.trim().trim_start_matches('*');
        let base = base.split('[').next().unwrap_or(base);
        Some(base.trim().to_string())
    }
}
