//! Parse phase - extracts domain types from Go sources.

use eyre::Result;
use mapgen_ir::DomainModel;
use mapgen_source::GoParser;
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that reads every referenced Go file once and extracts the
/// requested struct declarations with their methods.
///
/// Source errors are kept as [`mapgen_source::Error`] inside the report so
/// callers can render them with their spans.
pub struct ParsePhase;

impl Phase for ParsePhase {
    fn name(&self) -> &'static str {
        "parse"
    }

    fn description(&self) -> &'static str {
        "Extract domain types from Go sources"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let config = ctx.config()?;
        let mut parser = GoParser::new().map_err(|e| eyre::Report::new(*e))?;
        let mut model = DomainModel::default();

        for (path, names) in config.sources_by_file() {
            let types = mapgen_source::load_domain_types(&mut parser, &path, &names)
                .map_err(|e| eyre::Report::new(*e))?;
            for ty in types {
                debug!(domain_type = %ty.name, path = %path.display(), "loaded domain type");
                model.types.insert(ty.name.clone(), ty);
            }
        }

        ctx.domain = Some(model);
        Ok(())
    }
}
