//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use super::DtoTypeConfig;
use crate::{Error, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested tables.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "mapgen.toml");
/// ctx.validate_name("restaurant", "package")?;
///
/// // For nested validation
/// let dto = ctx.push("domain_dto_types").push("Restaurant");
/// dto.validate_name("Phone", "map binding")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["domain_dto_types", "Restaurant"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "map binding in 'domain_dto_types.Restaurant'" or just
    /// "package" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Full dotted key for a key under the current path.
    fn key_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path_string(), key)
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// A validation error pointing at `name`.
    pub fn error_at(&self, name: &str, message: impl Into<String>) -> Box<Error> {
        self.source
            .validation_error(message, self.find_span(name))
    }

    /// Fail if a required string value is empty.
    pub fn require_non_empty(&self, key: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(self.error_at(
                key,
                format!("'{}' must not be empty", self.key_path(key)),
            ));
        }
        Ok(())
    }

    /// Validate that a name is a valid Go identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_go_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate one `[domain_dto_types.<name>]` table.
    pub(crate) fn validate_dto(&self, name: &str, dto: &DtoTypeConfig) -> Result<()> {
        for field in &dto.ignore_domain_fields {
            self.validate_name(field, "ignored field")?;
        }

        let bindings = self.push("map_bindings");
        for (field, expr) in &dto.map_bindings {
            bindings.validate_name(field, "map binding")?;
            let valid = expr.split_once('.').is_some_and(|(ty, target)| {
                validate_identifier(ty).is_none() && validate_identifier(target).is_none()
            });
            if !valid {
                return Err(self.source.invalid_binding_error(
                    name,
                    field,
                    expr,
                    self.find_span(expr),
                ));
            }
        }

        let mut init_funcs = dto.init_funcs();
        if let Some(first) = init_funcs.next() {
            if let Some(second) = init_funcs.next() {
                return Err(self.source.multiple_init_funcs_error(
                    name,
                    first.name,
                    second.name,
                    self.find_span(first.name),
                    self.find_span(second.name),
                ));
            }

            self.validate_name(first.name, "init func")?;
            for param in first.params {
                self.validate_name(param, "init func parameter")?;
            }
        }

        Ok(())
    }
}

/// Go reserved keywords and predeclared identifiers that cannot be used as names
/// Source: https://go.dev/ref/spec#Keywords
pub(crate) const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var",
];

/// Check if a name is a Go reserved keyword
pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source
/// Searches for patterns like `.name]`, `.name.`, `name =`, or `"name"`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    let patterns = [
        (format!(".{}]", name), 1),  // [domain_types.Name]
        (format!(".{}.", name), 1),  // [domain_dto_types.Name.map_bindings]
        (format!("\"{}\"", name), 1), // "value" in an array or binding
        (format!("{} =", name), 0),  // key = value
    ];

    for (pattern, offset) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + offset, name.len())));
        }
    }

    // Fallback: just find the name anywhere (less precise)
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a valid Go identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if name == "_" {
        return Some("the blank identifier cannot be used as a name");
    }

    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, digits, and underscores");
    }

    None
}
