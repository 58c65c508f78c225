//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to emit mappers for a new target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "go")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "go")
    fn file_extension(&self) -> &'static str;

    /// Render generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files, resolving relative output paths against `root`
    fn generate(&self, root: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content was (re)written
    pub written: Vec<PathBuf>,
    /// Files left untouched because their content was already up to date
    pub unchanged: Vec<PathBuf>,
}

impl GenerateResult {
    /// All files produced by the run, written or not.
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.written.iter().chain(self.unchanged.iter())
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the manifest directory
    pub path: PathBuf,
    /// File content
    pub content: String,
}
