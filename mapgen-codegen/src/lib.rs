//! Shared code generation utilities for the mapgen generator.
//!
//! This crate provides the language-agnostic pipeline and the building
//! blocks used by language backends (e.g., `mapgen-codegen-go`).
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phased compilation from manifest to DTO schema
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Backend abstractions (LanguageCodegen, NamingConvention)
//! - [`naming`] - Generated function name templates
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod language;
pub mod naming;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
