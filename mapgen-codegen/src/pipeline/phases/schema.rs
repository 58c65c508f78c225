//! Schema phase - derives DTO fields and field-name dictionaries.

use std::collections::BTreeSet;

use eyre::{Result, bail};
use mapgen_core::upper_first;
use mapgen_ir::{
    DomainModel, DomainType, DtoField, DtoSchema, DtoType, FieldDictionary, FieldSource,
    GenerationConfig,
};
use tracing::debug;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that builds the [`DtoSchema`] from the config and domain model.
pub struct SchemaPhase;

impl Phase for SchemaPhase {
    fn name(&self) -> &'static str {
        "schema"
    }

    fn description(&self) -> &'static str {
        "Derive DTO fields and field dictionaries"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let (schema, diagnostics) = build_schema(ctx.config()?, ctx.domain()?);
        ctx.diagnostics.extend(diagnostics);

        if ctx.has_errors() {
            bail!("Schema construction failed with {} error(s)", ctx.error_count());
        }

        ctx.schema = Some(schema);
        Ok(())
    }
}

/// Derive every configured DTO.
///
/// Each non-ignored domain field becomes an exported DTO field. A map
/// binding onto the DTO's own type renames the derived field in place; a
/// binding onto another type appends a composed field read through the
/// owning type. Every `mapping_to` is checked against the domain model.
pub fn build_schema(
    config: &GenerationConfig,
    domain: &DomainModel,
) -> (DtoSchema, Vec<Diagnostic>) {
    let mut schema = DtoSchema::default();
    let mut diagnostics = Vec::new();

    for (name, declared) in &config.dto_types {
        let Some(ty) = domain.get(name) else {
            diagnostics.push(
                Diagnostic::error("schema", format!("no domain type for DTO '{}'", name))
                    .at(location(name)),
            );
            continue;
        };

        let mut dto = declared.clone();
        dto.fields = derive_fields(&dto, ty, domain, &mut diagnostics);
        verify_fields(&dto, domain, &mut diagnostics);

        debug!(
            dto = %dto.dto_name(&config.naming.dto_suffix),
            fields = dto.fields.len(),
            "derived DTO"
        );

        schema
            .dictionaries
            .insert(name.clone(), FieldDictionary::from_fields(&dto.fields));
        schema.types.insert(name.clone(), dto);
    }

    (schema, diagnostics)
}

fn derive_fields(
    dto: &DtoType,
    ty: &DomainType,
    domain: &DomainModel,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<DtoField> {
    let mut fields: Vec<DtoField> = ty
        .fields
        .values()
        .filter(|f| !dto.ignore_domain_fields.contains(&f.name))
        .map(|f| DtoField {
            name: upper_first(&f.name),
            mapping_to: f.name.clone(),
            ty: f.ty.clone(),
            source: FieldSource::Own,
        })
        .collect();

    for (key, binding) in &dto.map_bindings {
        let name = upper_first(key);

        if binding.target_type == dto.name {
            match fields
                .iter_mut()
                .find(|f| f.is_own() && f.mapping_to == binding.target_field)
            {
                Some(field) => field.name = name,
                None => diagnostics.push(
                    Diagnostic::error(
                        "schema",
                        format!(
                            "binding '{}' renames '{}', which is not a DTO field",
                            key, binding.target_field
                        ),
                    )
                    .at(location(&dto.name)),
                ),
            }
            continue;
        }

        let target_field = domain
            .get(&binding.target_type)
            .and_then(|t| t.get_field(&binding.target_field));
        let mut via = ty.fields_referencing(&binding.target_type);
        match (target_field, via.next(), via.next()) {
            (Some(target_field), Some(via), None) => fields.push(DtoField {
                name,
                mapping_to: binding.target_field.clone(),
                ty: target_field.ty.clone(),
                source: FieldSource::Composed {
                    via: via.name.clone(),
                    target_type: binding.target_type.clone(),
                    nullable: via.ty.is_pointer,
                },
            }),
            _ => diagnostics.push(
                Diagnostic::error(
                    "schema",
                    format!(
                        "binding '{}' = \"{}.{}\" cannot be resolved from '{}'",
                        key, binding.target_type, binding.target_field, dto.name
                    ),
                )
                .at(location(&dto.name)),
            ),
        }
    }

    fields
}

/// Check field-name uniqueness and that every `mapping_to` exists.
fn verify_fields(dto: &DtoType, domain: &DomainModel, diagnostics: &mut Vec<Diagnostic>) {
    let mut seen = BTreeSet::new();

    for field in &dto.fields {
        if !seen.insert(field.name.as_str()) {
            diagnostics.push(
                Diagnostic::error(
                    "schema",
                    format!("DTO '{}' declares field '{}' twice", dto.name, field.name),
                )
                .at(location(&dto.name)),
            );
        }

        let owner = match &field.source {
            FieldSource::Own => dto.name.as_str(),
            FieldSource::Composed { target_type, .. } => target_type.as_str(),
        };
        let exists = domain
            .get(owner)
            .is_some_and(|t| t.get_field(&field.mapping_to).is_some());
        if !exists {
            diagnostics.push(
                Diagnostic::error(
                    "schema",
                    format!(
                        "field '{}' of DTO '{}' maps to unknown field '{}.{}'",
                        field.name, dto.name, owner, field.mapping_to
                    ),
                )
                .at(location(&dto.name)),
            );
        }
    }
}

fn location(name: &str) -> String {
    format!("domain_dto_types.{}", name)
}
