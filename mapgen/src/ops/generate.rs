//! Generate operation - mapper generation from manifest.

use eyre::{Context, Result};
use mapgen_codegen::pipeline::{Pipeline, SnapshotPlugin};
use mapgen_codegen_go::{GoGenerator, LanguageCodegen};
use mapgen_manifest::MapgenToml;
use tracing::debug;

use super::{collect_diagnostics, summarize};
use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Directory, relative to the manifest, receiving pipeline snapshots.
pub const DEBUG_DIR: &str = ".mapgen/debug";

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the manifest and emits the Go mapping file. When a
/// lint fails, the report carries the errors and no file is touched.
pub fn generate(file: &MapgenToml, opts: GenerateOptions) -> Result<GenerateReport> {
    let debug_dir = file.root().join(DEBUG_DIR);

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let (mut ctx, outcome) = pipeline.execute(file.manifest().clone(), file.root());

    let mut report = GenerateReport {
        summary: summarize(file),
        diagnostics: collect_diagnostics(&ctx.diagnostics),
        result: None,
        debug_dir: opts.visualize.then_some(debug_dir),
    };

    if let Err(err) = outcome {
        if !ctx.has_errors() {
            return Err(err);
        }
        debug!(error = %err, "pipeline stopped");
        return Ok(report);
    }

    let generator = GoGenerator::from_context(&mut ctx)?;
    let result = if opts.dry_run {
        let files = generator
            .preview()?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path.display().to_string(),
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate(file.root())
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            written: generated.written,
            unchanged: generated.unchanged,
        })
    };

    report.result = Some(result);
    Ok(report)
}
