//! Import tracking for the generated file.

use std::collections::BTreeMap;

use crate::ast::Import;

/// Tracks the packages referenced by emitted type expressions.
///
/// Namespaces arrive as full import paths once the domain model is bound;
/// the collector maps each back to its alias and remembers it. A namespace
/// with no known path is used as written and produces no import.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use mapgen_codegen_go::ImportCollector;
///
/// let aliases = BTreeMap::from([(
///     "github.com/satori/go.uuid".to_string(),
///     "uuid".to_string(),
/// )]);
/// let mut imports = ImportCollector::new(aliases);
///
/// assert_eq!(imports.qualify("github.com/satori/go.uuid"), "uuid");
/// assert_eq!(imports.qualify("decimal"), "decimal");
/// assert_eq!(imports.imports().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Import path -> alias, as declared by the domain sources
    aliases: BTreeMap<String, String>,
    /// Import path -> alias, for paths actually referenced
    used: BTreeMap<String, String>,
}

impl ImportCollector {
    pub fn new(aliases: BTreeMap<String, String>) -> Self {
        Self {
            aliases,
            used: BTreeMap::new(),
        }
    }

    /// The qualifier to write for `namespace`, recording its import.
    pub fn qualify(&mut self, namespace: &str) -> String {
        match self.aliases.get(namespace) {
            Some(alias) => {
                self.used
                    .entry(namespace.to_string())
                    .or_insert_with(|| alias.clone());
                alias.clone()
            }
            None => namespace.to_string(),
        }
    }

    /// Every alias a local variable must not shadow.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.values().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Referenced imports, sorted by path.
    pub fn imports(&self) -> Vec<Import> {
        self.used
            .iter()
            .map(|(path, alias)| Import::new(path, alias))
            .collect()
    }
}
