//! Intermediate representation types for the mapgen generator.
//!
//! This crate provides the model every pipeline stage reads and produces.
//! Each stage consumes the previous model by value and returns a new one;
//! nothing here is mutated after the stage that built it.
//!
//! # Architecture
//!
//! ```text
//! mapgen.toml → mapgen-manifest → GenerationConfig
//! *.go        → mapgen-source   → DomainType (raw) → DomainModel (bound)
//! GenerationConfig + DomainModel → DtoSchema → mapgen-codegen-go
//! ```
//!
//! The IR types are designed to be:
//! - Deterministic (ordered containers only, no hash maps)
//! - Serializable (pipeline snapshots are dumped as JSON)
//! - Free of rendering concerns

mod config;
mod domain;
mod dto;
mod field_type;

pub use config::{GenerationConfig, NamingTemplates, OutputTarget};
pub use domain::{DomainField, DomainModel, DomainType, Getter};
pub use dto::{DtoField, DtoSchema, DtoType, FieldDictionary, FieldSource, InitFunc, MapBinding};
pub use field_type::FieldType;
