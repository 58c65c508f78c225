//! Lint for identifiers produced by the naming templates.

use std::collections::BTreeMap;

use mapgen_ir::{DomainModel, GenerationConfig};
use mapgen_manifest::is_go_keyword;

use super::{super::Lint, dto_location};
use crate::{
    naming::{map_from_func_name, map_to_func_name},
    pipeline::Diagnostic,
};

/// Lint that errors when a generated type or procedure name is not a usable
/// Go identifier or collides with an existing declaration.
pub struct GeneratedNamesLint;

impl Lint for GeneratedNamesLint {
    fn name(&self) -> &'static str {
        "generated-names"
    }

    fn description(&self) -> &'static str {
        "Generated names must be valid, unique Go identifiers"
    }

    fn check(
        &self,
        config: &GenerationConfig,
        domain: &DomainModel,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let suffix = &config.naming.dto_suffix;
        let map_to = map_to_func_name(&config.naming);

        if let Some(reason) = identifier_problem(&map_to) {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!("map_to_func produces '{}', which {}", map_to, reason),
                )
                .at("map_to_func"),
            );
        }

        let mut map_from_owners: BTreeMap<String, &str> = BTreeMap::new();

        for (name, dto) in &config.dto_types {
            let dto_name = dto.dto_name(suffix);
            if let Some(reason) = identifier_problem(&dto_name) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("DTO name '{}' {}", dto_name, reason),
                    )
                    .at(dto_location(name)),
                );
            } else if domain.contains(&dto_name) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "DTO name '{}' collides with the domain type of the same name",
                            dto_name
                        ),
                    )
                    .at(dto_location(name)),
                );
            }

            if !dto.is_aggregate_root {
                continue;
            }

            if let Some(ty) = domain.get(name)
                && (ty.get_field(&map_to).is_some() || ty.has_method(&map_to))
            {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "'{}' already declares a field or method named '{}'",
                            name, map_to
                        ),
                    )
                    .at("map_to_func"),
                );
            }

            if !dto.maps_to_domain() {
                continue;
            }

            let map_from = map_from_func_name(&config.naming, name);
            if let Some(reason) = identifier_problem(&map_from) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("map_from_func produces '{}', which {}", map_from, reason),
                    )
                    .at("map_from_func"),
                );
            } else if let Some(first) = map_from_owners.get(&map_from) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "'{}' and '{}' both generate a function named '{}'",
                            first, name, map_from
                        ),
                    )
                    .at("map_from_func"),
                );
            } else {
                map_from_owners.insert(map_from, name);
            }
        }
    }
}

/// Why `name` cannot be used as a Go identifier, if it can't.
fn identifier_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("is empty");
    };
    if !(first.is_alphabetic() || first == '_')
        || !chars.all(|c| c.is_alphanumeric() || c == '_')
    {
        return Some("is not a valid Go identifier");
    }
    if name == "_" {
        return Some("is the blank identifier");
    }
    if is_go_keyword(name) {
        return Some("is a Go keyword");
    }
    None
}
