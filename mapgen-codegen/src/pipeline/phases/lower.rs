//! Lower phase - resolves the manifest into a generation config.
//!
//! Relative paths are joined onto the manifest directory, map binding
//! expressions are parsed and the nested constructor block of each DTO is
//! picked out.

use std::path::Path;

use eyre::{Result, eyre};
use mapgen_ir::{
    DtoType, GenerationConfig, InitFunc, MapBinding, NamingTemplates, OutputTarget,
};
use mapgen_manifest::{DtoTypeConfig, Manifest};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that transforms the manifest into a [`GenerationConfig`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Resolve manifest into generation config"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.config = Some(lower_manifest(&ctx.manifest, &ctx.root)?);
        Ok(())
    }
}

/// Lower a manifest into a generation config rooted at `root`.
fn lower_manifest(manifest: &Manifest, root: &Path) -> Result<GenerationConfig> {
    let dto_types = manifest
        .domain_dto_types
        .iter()
        .map(|(name, dto)| Ok((name.clone(), lower_dto(name, dto)?)))
        .collect::<Result<_>>()?;

    Ok(GenerationConfig {
        output: OutputTarget {
            dir: root.join(&manifest.dir),
            package: manifest.package.clone(),
            filename: manifest.filename.clone(),
        },
        imports: manifest.imports.clone(),
        domain_sources: manifest
            .domain_types
            .iter()
            .map(|(name, ty)| (name.clone(), root.join(&ty.file)))
            .collect(),
        dto_types,
        naming: NamingTemplates {
            dto_suffix: manifest.dto_suffix.clone(),
            map_from_func: manifest.map_from_func.clone(),
            map_to_func: manifest.map_to_func.clone(),
        },
    })
}

/// Lower a single DTO declaration.
fn lower_dto(name: &str, config: &DtoTypeConfig) -> Result<DtoType> {
    let mut dto = DtoType::new(name);
    dto.is_aggregate_root = config.is_aggregate_root;
    dto.domain_mapping_enabled = config.domain_mapping_enabled;
    dto.ignore_domain_fields = config.ignore_domain_fields.iter().cloned().collect();

    for (field, expr) in &config.map_bindings {
        let binding = MapBinding::parse(expr).ok_or_else(|| {
            eyre!(
                "invalid map binding '{}' for {}.{}: expected \"Type.field\"",
                expr,
                name,
                field
            )
        })?;
        dto.map_bindings.insert(field.clone(), binding);
    }

    dto.init_func = config.init_func().map(|init| InitFunc {
        name: init.name.to_string(),
        params: init.params.to_vec(),
    });

    Ok(dto)
}
