//! Canonical field type descriptor.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

/// Canonical shape of a field type.
///
/// A Go type expression is reduced to a base name plus shape flags, read
/// outermost first: `map[K]` (when `is_map`), then `[]` (when `is_slice`),
/// then `*` (when `is_pointer`), then `namespace.name`. So `[]*Thumbnail` is
/// `{is_slice, is_pointer, name: "Thumbnail"}`.
///
/// Equality is field-wise; getter binding relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldType {
    /// Qualifying namespace: a package alias after parsing, an import path
    /// after namespace substitution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Base type name, or the full type text for verbatim types.
    pub name: String,
    pub is_pointer: bool,
    pub is_slice: bool,
    pub is_map: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_key: Option<Box<FieldType>>,
    /// The type text could not be decoded into a shape and is carried as-is.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub verbatim: bool,
}

impl FieldType {
    /// An unqualified named type (`string`, `Restaurant`).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
            is_pointer: false,
            is_slice: false,
            is_map: false,
            map_key: None,
            verbatim: false,
        }
    }

    /// A namespace-qualified type (`uuid.UUID`).
    pub fn qualified(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..Self::named(name)
        }
    }

    /// A type expression kept as raw text.
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self {
            verbatim: true,
            ..Self::named(text)
        }
    }

    /// Mark the element as a pointer.
    pub fn pointer(mut self) -> Self {
        self.is_pointer = true;
        self
    }

    /// Wrap in a sequence.
    pub fn slice(mut self) -> Self {
        self.is_slice = true;
        self
    }

    /// Wrap in a map keyed by `key`.
    pub fn keyed_by(mut self, key: FieldType) -> Self {
        self.is_map = true;
        self.map_key = Some(Box::new(key));
        self
    }

    /// The element shape with the collection wrappers removed.
    ///
    /// `map[string][]*T` becomes `*T`; a non-collection type is returned
    /// unchanged.
    pub fn element(&self) -> FieldType {
        FieldType {
            is_slice: false,
            is_map: false,
            map_key: None,
            ..self.clone()
        }
    }

    /// The shape with only the map wrapper removed (`map[K][]T` becomes `[]T`).
    pub fn map_value(&self) -> FieldType {
        FieldType {
            is_map: false,
            map_key: None,
            ..self.clone()
        }
    }

    /// Whether this is a sequence or a map.
    pub fn is_collection(&self) -> bool {
        self.is_slice || self.is_map
    }

    /// Whether the base is a plain, unqualified name (a candidate for a
    /// same-package type reference).
    pub fn is_local(&self) -> bool {
        self.namespace.is_none() && !self.verbatim
    }

    /// Replace an aliased namespace with its canonical reference.
    ///
    /// Applies to the map key as well. Returns `true` if anything changed.
    pub fn substitute_namespace(&mut self, aliases: &BTreeMap<String, String>) -> bool {
        let mut changed = false;
        if let Some(target) = self.namespace.as_ref().and_then(|ns| aliases.get(ns)) {
            self.namespace = Some(target.clone());
            changed = true;
        }
        if let Some(key) = self.map_key.as_mut() {
            changed |= key.substitute_namespace(aliases);
        }
        changed
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_map {
            match &self.map_key {
                Some(key) => write!(f, "map[{}]", key)?,
                None => write!(f, "map[?]")?,
            }
        }
        if self.is_slice {
            write!(f, "[]")?;
        }
        if self.is_pointer {
            write!(f, "*")?;
        }
        if let Some(ns) = &self.namespace {
            write!(f, "{}.", ns)?;
        }
        write!(f, "{}", self.name)
    }
}
