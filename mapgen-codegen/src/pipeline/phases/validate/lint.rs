//! Lint trait for cross-reference validation.

use mapgen_ir::{DomainModel, GenerationConfig};

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    /// The lint name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A lint that checks the generation config against the domain model.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the inputs and add any diagnostics.
    fn check(
        &self,
        config: &GenerationConfig,
        domain: &DomainModel,
        diagnostics: &mut Vec<Diagnostic>,
    );

    /// Get information about this lint.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
