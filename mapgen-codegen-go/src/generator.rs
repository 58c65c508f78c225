//! Go mapper generator.

use std::path::{Path, PathBuf};

use eyre::Result;
use mapgen_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use mapgen_core::{File, WriteResult};
use mapgen_ir::{DomainModel, DtoSchema, GenerationConfig};
use tracing::{debug, info};

use crate::{GoFile, MapperSynthesizer};

/// Generates the Go mapping file for one manifest.
pub struct GoGenerator {
    config: GenerationConfig,
    domain: DomainModel,
    schema: DtoSchema,
    root: PathBuf,
}

impl LanguageCodegen for GoGenerator {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(vec![PreviewFile {
            path: self.relative_output_path(),
            content: self.render()?,
        }])
    }

    fn generate(&self, root: &Path) -> Result<GenerateResult> {
        let path = root.join(self.relative_output_path());
        let content = self.render()?;

        let mut result = GenerateResult::default();
        match File::new(&path, content).write()? {
            WriteResult::Written => {
                info!(path = %path.display(), "wrote mapper");
                result.written.push(path);
            }
            WriteResult::Unchanged => {
                debug!(path = %path.display(), "mapper unchanged");
                result.unchanged.push(path);
            }
        }
        Ok(result)
    }
}

impl GoGenerator {
    pub fn new(config: GenerationConfig, domain: DomainModel, schema: DtoSchema) -> Self {
        Self {
            config,
            domain,
            schema,
            root: PathBuf::new(),
        }
    }

    /// Take the pipeline results out of a finished context.
    pub fn from_context(ctx: &mut CompilationContext) -> Result<Self> {
        let generator = Self::new(ctx.take_config()?, ctx.take_domain()?, ctx.take_schema()?);
        Ok(generator.with_root(&ctx.root))
    }

    /// Directory the configured output path is relative to.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn domain(&self) -> &DomainModel {
        &self.domain
    }

    pub fn schema(&self) -> &DtoSchema {
        &self.schema
    }

    /// Build the Go code model.
    pub fn synthesize(&self) -> Result<GoFile> {
        MapperSynthesizer::new(&self.config, &self.domain, &self.schema).synthesize()
    }

    pub fn render(&self) -> Result<String> {
        Ok(self.synthesize()?.render())
    }

    /// The configured output file.
    pub fn output_path(&self) -> PathBuf {
        self.config.output.path()
    }

    fn relative_output_path(&self) -> PathBuf {
        let path = self.output_path();
        match path.strip_prefix(&self.root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => path,
        }
    }
}
