//! Validate phase - cross-reference lints over config and domain model.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DtoDomainTypeLint, GeneratedNamesLint, IgnoredFieldsLint, InitFuncLint, MapBindingLint,
    NestingCycleLint, UnsupportedTypeLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks the manifest against the extracted domain model using
/// configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DtoDomainTypeLint),
                Box::new(IgnoredFieldsLint),
                Box::new(MapBindingLint),
                Box::new(InitFuncLint),
                Box::new(GeneratedNamesLint),
                Box::new(NestingCycleLint),
                Box::new(UnsupportedTypeLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check manifest against domain types and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let (Some(config), Some(domain)) = (ctx.config.as_ref(), ctx.domain.as_ref()) else {
            bail!("validate phase requires the lower and parse phases to run first");
        };

        for lint in &self.lints {
            lint.check(config, domain, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
