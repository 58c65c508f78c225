//! Pipeline orchestrator.

use std::path::Path;

use eyre::Result;
use mapgen_manifest::Manifest;
use tracing::{debug, info};

use super::{
    CompilationContext, Phase, Plugin,
    phases::{BindPhase, LowerPhase, ParsePhase, SchemaPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline manages the execution of compilation phases and plugin hooks.
/// It runs the built-in phases (lower, parse, bind, validate, schema)
/// followed by any user phases, calling plugin hooks before and after each
/// phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".mapgen/debug"))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(manifest, root)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a manifest whose relative paths resolve against
    /// `root`.
    ///
    /// Executes all phases in order:
    /// 1. LowerPhase - manifest to generation config
    /// 2. ParsePhase - Go sources to domain types
    /// 3. BindPhase - getter binding and namespace substitution
    /// 4. ValidatePhase - cross-reference lints
    /// 5. SchemaPhase - DTO fields and dictionaries
    /// 6. User phases (if any)
    ///
    /// Plugin hooks are called before and after each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, manifest: Manifest, root: impl AsRef<Path>) -> Result<CompilationContext> {
        let (ctx, outcome) = self.execute(manifest, root);
        outcome.map(|()| ctx)
    }

    /// Run the pipeline, keeping the context even when a phase fails.
    ///
    /// Diagnostics recorded before the failure stay available on the
    /// returned context, so callers can report every lint that fired.
    pub fn execute(
        &self,
        manifest: Manifest,
        root: impl AsRef<Path>,
    ) -> (CompilationContext, Result<()>) {
        let mut ctx = CompilationContext::new(manifest, root);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(LowerPhase),
            Box::new(ParsePhase),
            Box::new(BindPhase),
            Box::new(ValidatePhase::new()),
            Box::new(SchemaPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            if let Err(err) = self.run_phase(phase.as_ref(), &mut ctx) {
                return (ctx, Err(err));
            }
        }

        (ctx, Ok(()))
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            debug!(plugin = plugin.name(), phase = phase_name, "before phase");
            plugin.on_before_phase(phase_name, ctx)?;
        }

        info!(phase = phase_name, "{}", phase.description());
        phase.run(ctx)?;

        for plugin in &self.plugins {
            debug!(plugin = plugin.name(), phase = phase_name, "after phase");
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
