//! Compilation context passed through pipeline phases.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use mapgen_ir::{DomainModel, DtoSchema, GenerationConfig};
use mapgen_manifest::Manifest;

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating models and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The manifest being compiled.
    pub manifest: Manifest,
    /// Directory relative manifest paths are resolved against.
    pub root: PathBuf,
    /// Resolved generation config (populated by LowerPhase).
    pub config: Option<GenerationConfig>,
    /// Extracted domain types (populated by ParsePhase, finalized by BindPhase).
    pub domain: Option<DomainModel>,
    /// Derived DTO schema (populated by SchemaPhase).
    pub schema: Option<DtoSchema>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a manifest and its directory.
    pub fn new(manifest: Manifest, root: impl AsRef<Path>) -> Self {
        Self {
            manifest,
            root: root.as_ref().to_path_buf(),
            config: None,
            domain: None,
            schema: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a prepared diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Borrow the generation config, failing if LowerPhase has not run.
    pub fn config(&self) -> Result<&GenerationConfig> {
        self.config
            .as_ref()
            .ok_or_else(|| eyre!("generation config not set - did the lower phase run?"))
    }

    /// Borrow the domain model, failing if ParsePhase has not run.
    pub fn domain(&self) -> Result<&DomainModel> {
        self.domain
            .as_ref()
            .ok_or_else(|| eyre!("domain model not set - did the parse phase run?"))
    }

    /// Take the generation config out of the context.
    pub fn take_config(&mut self) -> Result<GenerationConfig> {
        self.config
            .take()
            .ok_or_else(|| eyre!("generation config not set - did the lower phase run?"))
    }

    /// Take the domain model out of the context.
    pub fn take_domain(&mut self) -> Result<DomainModel> {
        self.domain
            .take()
            .ok_or_else(|| eyre!("domain model not set - did the parse phase run?"))
    }

    /// Take the DTO schema out of the context.
    pub fn take_schema(&mut self) -> Result<DtoSchema> {
        self.schema
            .take()
            .ok_or_else(|| eyre!("DTO schema not set - did the schema phase run?"))
    }
}
