//! Pieces shared by the generate and check reports.

use std::path::PathBuf;

use super::output::Output;

/// What a manifest asks mapgen to produce.
#[derive(Debug)]
pub struct ManifestSummary {
    /// Package clause of the generated file.
    pub package: String,
    /// Generated file path.
    pub output: PathBuf,
    pub domain_types: Vec<String>,
    pub dtos: Vec<String>,
    pub aggregate_roots: Vec<String>,
}

impl ManifestSummary {
    pub fn render(&self, out: &mut dyn Output) {
        out.key_value("Package", &self.package);
        out.key_value("Output", &self.output.display().to_string());
        out.newline();

        out.section(&format!("Domain types ({})", self.domain_types.len()));
        for name in &self.domain_types {
            out.list_item(name);
        }
        out.newline();

        out.section(&format!("DTOs ({})", self.dtos.len()));
        for name in &self.dtos {
            if self.aggregate_roots.contains(name) {
                out.list_item(&format!("{} (aggregate root)", name));
            } else {
                out.list_item(name);
            }
        }
    }
}

/// Pipeline diagnostics, formatted and split by severity.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl Diagnostics {
    pub fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.infos.is_empty()
    }
}
