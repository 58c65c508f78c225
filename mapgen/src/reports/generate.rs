//! Generate command report data structures.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    summary::{Diagnostics, ManifestSummary},
};

/// Report data from mapper generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub summary: ManifestSummary,
    /// Diagnostics from the pipeline.
    pub diagnostics: Diagnostics,
    /// Generation result, absent when the pipeline reported errors.
    pub result: Option<GenerationResult>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Files whose content changed.
    pub written: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GenerateReport {
    /// Whether generation ran to completion.
    pub fn is_success(&self) -> bool {
        self.diagnostics.errors.is_empty() && self.result.is_some()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(debug_dir) = &self.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        self.diagnostics.render(out);

        match &self.result {
            Some(GenerationResult::Written(written)) => self.render_written(out, written),
            Some(GenerationResult::Preview(preview)) => self.render_preview(out, preview),
            None => {}
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        self.summary.render(out);
        out.newline();

        for path in &written.unchanged {
            out.key_value("Up to date", &path.display().to_string());
        }
        if !written.written.is_empty() {
            out.section("Generated");
            for path in &written.written {
                out.added_item(&path.display().to_string());
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
