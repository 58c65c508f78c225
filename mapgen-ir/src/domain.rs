//! Domain types extracted from source declarations.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::PathBuf,
};

use indexmap::IndexMap;
use serde::Serialize;

use crate::FieldType;

/// A zero-argument, single-result method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Getter {
    /// Receiver type name, pointer marker stripped.
    pub receiver: String,
    /// Method name.
    pub name: String,
    /// Result type.
    pub result: FieldType,
}

/// A field of a domain struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainField {
    pub name: String,
    pub ty: FieldType,
    /// Accessor method bound to this field, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub getter: Option<Getter>,
}

impl DomainField {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            getter: None,
        }
    }
}

/// A struct-shaped domain type.
#[derive(Debug, Clone, Serialize)]
pub struct DomainType {
    /// Type name.
    pub name: String,
    /// Source file the type was extracted from.
    pub file: PathBuf,
    /// Fields in declaration order, addressable by name.
    pub fields: IndexMap<String, DomainField>,
    /// Candidate getters; consumed and cleared by getter binding.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub getters: Vec<Getter>,
    /// Names of every method declared on the type.
    pub methods: BTreeSet<String>,
    /// Imports of the declaring file (package alias → import path).
    pub imports: BTreeMap<String, String>,
}

impl DomainType {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            fields: IndexMap::new(),
            getters: Vec::new(),
            methods: BTreeSet::new(),
            imports: BTreeMap::new(),
        }
    }

    /// Add a field, keeping declaration order.
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        let field = DomainField::new(name, ty);
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Look up a field by name.
    pub fn get_field(&self, name: &str) -> Option<&DomainField> {
        self.fields.get(name)
    }

    /// Single-valued fields whose type is the local type `target`.
    pub fn fields_referencing<'a>(
        &'a self,
        target: &'a str,
    ) -> impl Iterator<Item = &'a DomainField> + 'a {
        self.fields
            .values()
            .filter(move |f| f.ty.is_local() && !f.ty.is_collection() && f.ty.name == target)
    }

    /// Whether a method with this name is declared on the type.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains(name)
    }
}

/// All domain types of one run, keyed by name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DomainModel {
    pub types: BTreeMap<String, DomainType>,
    /// Package alias for every import path referenced by a field type.
    pub import_aliases: BTreeMap<String, String>,
}

impl DomainModel {
    pub fn get(&self, name: &str) -> Option<&DomainType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Total number of fields across all types.
    pub fn field_count(&self) -> usize {
        self.types.values().map(|t| t.fields.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_declaration_order() {
        let ty = DomainType::new("Restaurant", "restaurant.go")
            .field("restaurantID", FieldType::qualified("uuid", "UUID"))
            .field("phoneNumber", FieldType::named("string"))
            .field("city", FieldType::named("string"));

        let names: Vec<_> = ty.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["restaurantID", "phoneNumber", "city"]);
        assert!(ty.get_field("phoneNumber").is_some());
        assert!(ty.get_field("PhoneNumber").is_none());
    }

    #[test]
    fn test_fields_referencing_skips_collections() {
        let ty = DomainType::new("MenuItem", "menu.go")
            .field("restaurant", FieldType::named("Restaurant").pointer())
            .field("related", FieldType::named("Restaurant").slice())
            .field("owner", FieldType::qualified("user", "Restaurant"));

        let names: Vec<_> = ty
            .fields_referencing("Restaurant")
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["restaurant"]);
    }

    #[test]
    fn test_model_field_count() {
        let mut model = DomainModel::default();
        let a = DomainType::new("A", "a.go").field("x", FieldType::named("int"));
        let b = DomainType::new("B", "b.go")
            .field("y", FieldType::named("int"))
            .field("z", FieldType::named("int"));
        model.types.insert(a.name.clone(), a);
        model.types.insert(b.name.clone(), b);

        assert_eq!(model.field_count(), 3);
        assert!(model.contains("A"));
    }
}
