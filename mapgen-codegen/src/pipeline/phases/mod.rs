//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`LowerPhase`] - resolves the manifest into a [`GenerationConfig`](mapgen_ir::GenerationConfig)
//! - [`ParsePhase`] - extracts requested struct declarations from Go sources
//! - [`BindPhase`] - binds getters to fields and substitutes import namespaces
//! - [`ValidatePhase`] - cross-reference lints over config and domain model
//! - [`SchemaPhase`] - derives DTO fields and field-name dictionaries

mod bind;
mod lower;
mod parse;
mod schema;
mod validate;

pub use bind::{BindPhase, bind_domain_model};
pub use lower::LowerPhase;
pub use parse::ParsePhase;
pub use schema::{SchemaPhase, build_schema};
pub use validate::{
    DtoDomainTypeLint, GeneratedNamesLint, IgnoredFieldsLint, InitFuncLint, Lint, LintInfo,
    MapBindingLint, NestingCycleLint, UnsupportedTypeLint, ValidatePhase,
};
