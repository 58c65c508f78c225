//! Lint for DTOs without a backing domain type.

use mapgen_ir::{DomainModel, GenerationConfig};

use super::{super::Lint, dto_location};
use crate::pipeline::Diagnostic;

/// Lint that errors when a DTO names a type that was not extracted.
pub struct DtoDomainTypeLint;

impl Lint for DtoDomainTypeLint {
    fn name(&self) -> &'static str {
        "dto-domain-type"
    }

    fn description(&self) -> &'static str {
        "Every DTO must be backed by a declared domain type"
    }

    fn check(
        &self,
        config: &GenerationConfig,
        domain: &DomainModel,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for name in config.dto_types.keys() {
            if !domain.contains(name) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "DTO '{}' has no domain type; declare it under [domain_types.{}]",
                            name, name
                        ),
                    )
                    .at(dto_location(name)),
                );
            }
        }
    }
}
