//! Lint for map binding targets.

use mapgen_ir::{DomainModel, DtoType, GenerationConfig, MapBinding};

use super::{super::Lint, dto_location};
use crate::pipeline::Diagnostic;

/// Lint that errors when a `map_bindings` expression cannot be resolved.
///
/// A same-type binding must name a mapped field. A foreign binding must be
/// reachable through exactly one single-valued field of the owning type.
pub struct MapBindingLint;

impl Lint for MapBindingLint {
    fn name(&self) -> &'static str {
        "map-binding"
    }

    fn description(&self) -> &'static str {
        "Map bindings must resolve to a reachable domain field"
    }

    fn check(
        &self,
        config: &GenerationConfig,
        domain: &DomainModel,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for (name, dto) in &config.dto_types {
            if !domain.contains(name) {
                continue;
            }
            for (key, binding) in &dto.map_bindings {
                if let Some(message) = check_binding(dto, key, binding, domain) {
                    diagnostics.push(
                        Diagnostic::error("validate", message)
                            .at(format!("{}.map_bindings.{}", dto_location(name), key)),
                    );
                }
            }
        }
    }
}

fn check_binding(
    dto: &DtoType,
    key: &str,
    binding: &MapBinding,
    domain: &DomainModel,
) -> Option<String> {
    let expr = format!("{}.{}", binding.target_type, binding.target_field);

    let Some(target) = domain.get(&binding.target_type) else {
        return Some(format!(
            "binding '{}' = \"{}\" refers to unknown domain type '{}'",
            key, expr, binding.target_type
        ));
    };
    if target.get_field(&binding.target_field).is_none() {
        return Some(format!(
            "binding '{}' = \"{}\": '{}' has no field '{}'",
            key, expr, binding.target_type, binding.target_field
        ));
    }

    if binding.target_type == dto.name {
        if dto.ignore_domain_fields.contains(&binding.target_field) {
            return Some(format!(
                "binding '{}' renames '{}', which is ignored",
                key, binding.target_field
            ));
        }
        return None;
    }

    // domain.contains(dto.name) was checked by the caller
    let owner = domain.get(&dto.name)?;
    let via: Vec<_> = owner.fields_referencing(&binding.target_type).collect();
    match via.len() {
        1 => None,
        0 => Some(format!(
            "binding '{}' = \"{}\": '{}' has no field of type {}",
            key, expr, dto.name, binding.target_type
        )),
        _ => Some(format!(
            "binding '{}' = \"{}\" is ambiguous: '{}' has {} fields of type {} ({})",
            key,
            expr,
            dto.name,
            via.len(),
            binding.target_type,
            via.iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}
