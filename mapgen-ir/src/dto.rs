//! DTO (output) type definitions.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde::Serialize;

use crate::FieldType;

/// Where a DTO field reads its value from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSource {
    /// A field of the backing domain type.
    Own,
    /// A field of another domain type, reached through the backing type's
    /// field `via`. Only readable when building the DTO.
    Composed {
        via: String,
        target_type: String,
        /// `via` is a pointer; a nil `via` leaves the zero value.
        nullable: bool,
    },
}

/// A field of a generated DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DtoField {
    /// Exported field name.
    pub name: String,
    /// Name of the domain field this maps to.
    pub mapping_to: String,
    pub ty: FieldType,
    pub source: FieldSource,
}

impl DtoField {
    pub fn is_map(&self) -> bool {
        self.ty.is_map
    }

    /// Whether the field participates in both mapping directions.
    pub fn is_own(&self) -> bool {
        matches!(self.source, FieldSource::Own)
    }
}

/// A `"Type.Field"` composition expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapBinding {
    pub target_type: String,
    pub target_field: String,
}

impl MapBinding {
    /// Parse `"Type.Field"`, splitting on the first `.`.
    pub fn parse(expr: &str) -> Option<Self> {
        let (target_type, target_field) = expr.split_once('.')?;
        if target_type.is_empty() || target_field.is_empty() || target_field.contains('.') {
            return None;
        }
        Some(Self {
            target_type: target_type.to_string(),
            target_field: target_field.to_string(),
        })
    }
}

/// A custom constructor used instead of a composite literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitFunc {
    pub name: String,
    /// Domain field names passed as arguments, in order.
    pub params: Vec<String>,
}

/// A DTO declaration, keyed by the name of its backing domain type.
#[derive(Debug, Clone, Serialize)]
pub struct DtoType {
    /// Backing domain type name.
    pub name: String,
    pub is_aggregate_root: bool,
    pub domain_mapping_enabled: bool,
    pub ignore_domain_fields: BTreeSet<String>,
    /// DTO field name → composition expression.
    pub map_bindings: BTreeMap<String, MapBinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_func: Option<InitFunc>,
    /// Derived by the schema builder; empty before that.
    pub fields: Vec<DtoField>,
}

impl DtoType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_aggregate_root: false,
            domain_mapping_enabled: true,
            ignore_domain_fields: BTreeSet::new(),
            map_bindings: BTreeMap::new(),
            init_func: None,
            fields: Vec::new(),
        }
    }

    /// Generated DTO type name.
    pub fn dto_name(&self, suffix: &str) -> String {
        format!("{}{}", self.name, suffix)
    }

    /// Whether the DTO struct is generated (no custom constructor).
    pub fn is_struct_backed(&self) -> bool {
        self.init_func.is_none()
    }

    /// Whether the DTO → domain procedure is generated.
    pub fn maps_to_domain(&self) -> bool {
        self.is_aggregate_root && self.domain_mapping_enabled
    }

    pub fn get_field(&self, name: &str) -> Option<&DtoField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Name correspondence between a DTO and its domain type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldDictionary {
    /// DTO field → domain field.
    pub forward: IndexMap<String, String>,
    /// Domain field → DTO field.
    pub backward: IndexMap<String, String>,
}

impl FieldDictionary {
    /// Build from the DTO's own fields; composed fields are excluded.
    pub fn from_fields(fields: &[DtoField]) -> Self {
        let mut dict = Self::default();
        for field in fields.iter().filter(|f| f.is_own()) {
            dict.forward
                .insert(field.name.clone(), field.mapping_to.clone());
            dict.backward
                .insert(field.mapping_to.clone(), field.name.clone());
        }
        dict
    }
}

/// All DTO types of one run with their dictionaries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DtoSchema {
    pub types: BTreeMap<String, DtoType>,
    pub dictionaries: BTreeMap<String, FieldDictionary>,
}

impl DtoSchema {
    pub fn get(&self, name: &str) -> Option<&DtoType> {
        self.types.get(name)
    }

    pub fn dictionary(&self, name: &str) -> Option<&FieldDictionary> {
        self.dictionaries.get(name)
    }

    /// The generated DTO a field type refers to, if its base is a known,
    /// struct-backed DTO.
    pub fn dto_for(&self, ty: &FieldType) -> Option<&DtoType> {
        if !ty.is_local() {
            return None;
        }
        self.types.get(&ty.name).filter(|dto| dto.is_struct_backed())
    }

    pub fn aggregate_roots(&self) -> impl Iterator<Item = &DtoType> {
        self.types.values().filter(|t| t.is_aggregate_root)
    }
}
