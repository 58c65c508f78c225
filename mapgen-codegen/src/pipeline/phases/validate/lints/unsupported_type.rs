//! Lint for field types outside the recognised shapes.

use mapgen_ir::{DomainModel, GenerationConfig};

use super::{super::Lint, dto_location};
use crate::pipeline::Diagnostic;

/// Lint that warns about verbatim field types, which are copied as-is.
pub struct UnsupportedTypeLint;

impl Lint for UnsupportedTypeLint {
    fn name(&self) -> &'static str {
        "unsupported-type"
    }

    fn description(&self) -> &'static str {
        "Warn about field types that are copied without conversion"
    }

    fn check(
        &self,
        config: &GenerationConfig,
        domain: &DomainModel,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for (name, dto) in &config.dto_types {
            let Some(ty) = domain.get(name) else {
                continue;
            };
            for field in ty.fields.values() {
                if field.ty.verbatim && !dto.ignore_domain_fields.contains(&field.name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "field '{}.{}' has type '{}', which is copied without conversion",
                                name, field.name, field.ty.name
                            ),
                        )
                        .at(dto_location(name)),
                    );
                }
            }
        }
    }
}
