//! Check command report data structures.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    summary::{Diagnostics, ManifestSummary},
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub summary: ManifestSummary,
    pub diagnostics: Diagnostics,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.diagnostics.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out);

        if !self.is_valid() {
            return;
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        self.summary.render(out);
    }
}
