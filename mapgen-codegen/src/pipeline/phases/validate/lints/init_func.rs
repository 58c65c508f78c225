//! Lint for custom constructor parameters.

use mapgen_ir::{DomainModel, GenerationConfig};

use super::{super::Lint, dto_location};
use crate::pipeline::Diagnostic;

/// Lint that errors when a constructor parameter cannot be supplied from the DTO.
pub struct InitFuncLint;

impl Lint for InitFuncLint {
    fn name(&self) -> &'static str {
        "init-func"
    }

    fn description(&self) -> &'static str {
        "Constructor parameters must name mapped domain fields"
    }

    fn check(
        &self,
        config: &GenerationConfig,
        domain: &DomainModel,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for (name, dto) in &config.dto_types {
            let (Some(init), Some(ty)) = (&dto.init_func, domain.get(name)) else {
                continue;
            };
            let location = format!("{}.{}.param_mapping", dto_location(name), init.name);

            for param in &init.params {
                let message = if ty.get_field(param).is_none() {
                    format!(
                        "parameter '{}' of {} is not a field of '{}'",
                        param, init.name, name
                    )
                } else if dto.ignore_domain_fields.contains(param) {
                    format!(
                        "parameter '{}' of {} is ignored and has no DTO value",
                        param, init.name
                    )
                } else {
                    continue;
                };
                diagnostics.push(Diagnostic::error("validate", message).at(&location));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mapgen_ir::{DomainType, DtoType, FieldType, InitFunc};

    use super::*;
    use crate::testing::{domain_model, test_config};

    fn money(params: &[&str], ignored: &[&str]) -> Vec<Diagnostic> {
        let mut dto = DtoType::new("Money");
        dto.init_func = Some(InitFunc {
            name: "NewMoney".into(),
            params: params.iter().map(|p| p.to_string()).collect(),
        });
        dto.ignore_domain_fields = ignored.iter().map(|p| p.to_string()).collect();

        let config = test_config(vec![dto]);
        let domain = domain_model(vec![
            DomainType::new("Money", "money.go")
                .field("amount", FieldType::named("int64"))
                .field("currency", FieldType::named("string")),
        ]);

        let mut diagnostics = Vec::new();
        InitFuncLint.check(&config, &domain, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_valid_params() {
        assert!(money(&["amount", "currency"], &[]).is_empty());
    }

    #[test]
    fn test_unknown_param() {
        let diagnostics = money(&["amount", "cents"], &[]);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'cents'"));
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("domain_dto_types.Money.NewMoney.param_mapping")
        );
    }

    #[test]
    fn test_ignored_param() {
        let diagnostics = money(&["amount", "currency"], &["currency"]);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("ignored"));
    }
}
