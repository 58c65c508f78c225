//! Check operation - manifest and source validation.

use eyre::Result;
use mapgen_codegen::pipeline::Pipeline;
use mapgen_manifest::MapgenToml;
use tracing::debug;

use super::{collect_diagnostics, summarize};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the whole pipeline without generating code. Lint failures end up
/// in the report; errors that carry no diagnostics (unreadable or broken
/// Go sources) are returned as is.
pub fn check(file: &MapgenToml) -> Result<CheckReport> {
    let (ctx, outcome) = Pipeline::new().execute(file.manifest().clone(), file.root());

    if let Err(err) = outcome {
        if !ctx.has_errors() {
            return Err(err);
        }
        debug!(error = %err, "pipeline stopped");
    }

    Ok(CheckReport {
        config_path: file.path().to_path_buf(),
        summary: summarize(file),
        diagnostics: collect_diagnostics(&ctx.diagnostics),
    })
}
