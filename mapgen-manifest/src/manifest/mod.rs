//! Manifest types and parsing for mapgen.toml files.

mod file;
mod parse;
mod validate;

use std::{collections::BTreeMap, path::PathBuf};

pub use file::MapgenToml;
use serde::Deserialize;
pub use validate::{ParseContext, is_go_keyword};

/// Root manifest for mapgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output directory, relative to the manifest
    pub dir: PathBuf,
    /// Package clause of the generated file
    pub package: String,
    /// Output file name
    pub filename: String,
    /// Appended to a domain type name to form its DTO name
    pub dto_suffix: String,
    /// Name template of the DTO → domain function, with `{domain_type}`
    pub map_from_func: String,
    /// Name template of the domain → DTO method, with `{suffix}`
    pub map_to_func: String,

    /// Package alias → canonical import path
    #[serde(default)]
    pub imports: BTreeMap<String, String>,

    /// Domain types to extract, by name
    #[serde(default)]
    pub domain_types: BTreeMap<String, DomainTypeConfig>,

    /// DTO declarations, keyed by backing domain type
    #[serde(default)]
    pub domain_dto_types: BTreeMap<String, DtoTypeConfig>,
}

/// `[domain_types.<Name>]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainTypeConfig {
    /// Go source file declaring the type, relative to the manifest
    pub file: PathBuf,
}

/// `[domain_dto_types.<Name>]`
#[derive(Debug, Clone, Deserialize)]
pub struct DtoTypeConfig {
    #[serde(default)]
    pub is_aggregate_root: bool,

    #[serde(default = "default_true")]
    pub domain_mapping_enabled: bool,

    #[serde(default)]
    pub ignore_domain_fields: Vec<String>,

    /// DTO field name → `"Type.field"`
    #[serde(default)]
    pub map_bindings: BTreeMap<String, String>,

    /// Nested blocks, one of which may describe a custom constructor.
    ///
    /// Any key not listed above must be a table.
    #[serde(flatten)]
    pub blocks: BTreeMap<String, NestedBlock>,
}

fn default_true() -> bool {
    true
}

/// A nested block inside a DTO declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NestedBlock {
    #[serde(default)]
    pub is_init_func: bool,
    /// Domain field names passed to the constructor, in order
    #[serde(default)]
    pub param_mapping: Vec<String>,
}

/// A custom constructor taken from a nested block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitFuncConfig<'a> {
    pub name: &'a str,
    pub params: &'a [String],
}

impl DtoTypeConfig {
    /// Blocks tagged `is_init_func = true`, in name order.
    pub fn init_funcs(&self) -> impl Iterator<Item = InitFuncConfig<'_>> {
        self.blocks
            .iter()
            .filter(|(_, block)| block.is_init_func)
            .map(|(name, block)| InitFuncConfig {
                name,
                params: &block.param_mapping,
            })
    }

    /// The custom constructor, if one is declared.
    pub fn init_func(&self) -> Option<InitFuncConfig<'_>> {
        self.init_funcs().next()
    }
}

impl Manifest {
    /// Names of DTOs declared as aggregate roots.
    pub fn aggregate_roots(&self) -> impl Iterator<Item = &str> {
        self.domain_dto_types
            .iter()
            .filter(|(_, dto)| dto.is_aggregate_root)
            .map(|(name, _)| name.as_str())
    }
}
