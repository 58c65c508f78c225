//! Compilation pipeline for mapper generation.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the phases
//! from a parsed manifest to a verified DTO schema. The pipeline provides:
//!
//! - Explicit phase boundaries (lower → parse → bind → validate → schema)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use mapgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(manifest, root)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = GoGenerator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
