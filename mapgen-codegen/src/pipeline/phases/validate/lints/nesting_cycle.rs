//! Lint for recursive inline expansion.

use std::collections::{BTreeMap, BTreeSet};

use mapgen_ir::{DomainModel, GenerationConfig};

use super::{super::Lint, dto_location};
use crate::pipeline::Diagnostic;

/// Lint that errors when non-aggregate DTOs reference each other in a cycle.
///
/// Non-aggregate DTOs are converted inline, so a cycle among them has no
/// finite expansion. Aggregate roots with domain mapping break a cycle
/// because they are converted through their generated procedures.
pub struct NestingCycleLint;

impl Lint for NestingCycleLint {
    fn name(&self) -> &'static str {
        "nesting-cycle"
    }

    fn description(&self) -> &'static str {
        "Inline-expanded DTOs must not reference each other in a cycle"
    }

    fn check(
        &self,
        config: &GenerationConfig,
        domain: &DomainModel,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let edges = inline_edges(config, domain);
        let mut reported: BTreeSet<BTreeSet<&str>> = BTreeSet::new();

        for &start in edges.keys() {
            let mut cycles = Vec::new();
            find_cycles(start, &edges, &mut vec![start], &mut cycles);

            for cycle in cycles {
                let members: BTreeSet<&str> = cycle.iter().copied().collect();
                // report each cycle once, from its smallest member
                if members.first() != Some(&start) || !reported.insert(members) {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "DTOs reference each other in a cycle: {} -> {}",
                            cycle.join(" -> "),
                            start
                        ),
                    )
                    .at(dto_location(start)),
                );
            }
        }
    }
}

/// DTO name → DTOs it expands inline.
fn inline_edges<'a>(
    config: &'a GenerationConfig,
    domain: &'a DomainModel,
) -> BTreeMap<&'a str, BTreeSet<&'a str>> {
    let mut edges: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for (name, dto) in &config.dto_types {
        let Some(ty) = domain.get(name) else {
            continue;
        };

        let own = ty
            .fields
            .values()
            .filter(|f| !dto.ignore_domain_fields.contains(&f.name))
            .map(|f| &f.ty);
        let composed = dto.map_bindings.values().filter_map(|b| {
            (b.target_type != *name)
                .then(|| domain.get(&b.target_type)?.get_field(&b.target_field))
                .flatten()
                .map(|f| &f.ty)
        });

        let targets = edges.entry(name.as_str()).or_default();
        for field_ty in own.chain(composed) {
            if !field_ty.is_local() {
                continue;
            }
            if let Some((target, nested)) = config.dto_types.get_key_value(&field_ty.name)
                && nested.is_struct_backed()
                && !nested.maps_to_domain()
            {
                targets.insert(target.as_str());
            }
        }
    }

    edges
}

/// Collect every simple cycle through `path[0]` reachable from `node`.
fn find_cycles<'a>(
    node: &'a str,
    edges: &BTreeMap<&'a str, BTreeSet<&'a str>>,
    path: &mut Vec<&'a str>,
    cycles: &mut Vec<Vec<&'a str>>,
) {
    let Some(targets) = edges.get(node) else {
        return;
    };
    for &next in targets {
        if next == path[0] {
            cycles.push(path.clone());
        } else if !path.contains(&next) {
            path.push(next);
            find_cycles(next, edges, path, cycles);
            path.pop();
        }
    }
}
