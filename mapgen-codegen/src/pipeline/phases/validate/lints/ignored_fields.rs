//! Lint for ignore-list entries that name no field.

use mapgen_ir::{DomainModel, GenerationConfig};

use super::{super::Lint, dto_location};
use crate::pipeline::Diagnostic;

/// Lint that errors on `ignore_domain_fields` entries missing from the domain type.
pub struct IgnoredFieldsLint;

impl Lint for IgnoredFieldsLint {
    fn name(&self) -> &'static str {
        "ignored-fields"
    }

    fn description(&self) -> &'static str {
        "Ignored fields must exist on the domain type"
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
            for field in &dto.ignore_domain_fields {
                if ty.get_field(field).is_none() {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!("ignored field '{}' does not exist on '{}'", field, name),
                        )
                        .at(format!("{}.ignore_domain_fields", dto_location(name))),
                    );
                }
            }
        }
    }
}
