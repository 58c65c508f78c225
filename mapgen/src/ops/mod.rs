//! Core operations.
//!
//! This module contains the business logic for mapgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};
use mapgen_codegen::pipeline::{Diagnostic, Severity};
use mapgen_manifest::MapgenToml;

use crate::reports::{Diagnostics, ManifestSummary};

/// Summarize what a manifest asks for.
fn summarize(file: &MapgenToml) -> ManifestSummary {
    let manifest = file.manifest();
    ManifestSummary {
        package: manifest.package.clone(),
        output: file.root().join(&manifest.dir).join(&manifest.filename),
        domain_types: manifest.domain_types.keys().cloned().collect(),
        dtos: manifest.domain_dto_types.keys().cloned().collect(),
        aggregate_roots: manifest.aggregate_roots().map(str::to_string).collect(),
    }
}

fn format_diagnostic(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}

/// Sort pipeline diagnostics by severity.
fn collect_diagnostics(diagnostics: &[Diagnostic]) -> Diagnostics {
    let mut collected = Diagnostics::default();
    for diag in diagnostics {
        let msg = format_diagnostic(diag);
        match diag.severity {
            Severity::Error => collected.errors.push(msg),
            Severity::Warning => collected.warnings.push(msg),
            Severity::Info => collected.infos.push(msg),
        }
    }
    collected
}
