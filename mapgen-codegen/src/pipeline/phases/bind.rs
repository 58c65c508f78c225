//! Bind phase - finalizes the domain model.
//!
//! Getters are bound onto the fields they expose, then package aliases in
//! field types are replaced by canonical import paths.

use std::collections::BTreeMap;

use eyre::Result;
use mapgen_core::lower_first;
use mapgen_ir::{DomainModel, DomainType, FieldType};
use tracing::debug;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that binds getters and substitutes import namespaces.
pub struct BindPhase;

impl Phase for BindPhase {
    fn name(&self) -> &'static str {
        "bind"
    }

    fn description(&self) -> &'static str {
        "Bind getters to fields and resolve import namespaces"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let model = ctx.take_domain()?;
        let imports = ctx.config()?.imports.clone();
        let mut diagnostics = Vec::new();
        ctx.domain = Some(bind_domain_model(model, &imports, &mut diagnostics));
        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}

/// Bind getters and substitute namespaces on every type of `model`.
///
/// `imports` (alias → path) takes precedence over the imports of each
/// type's own source file. Namespaces found in neither are left as written
/// and reported as warnings.
pub fn bind_domain_model(
    mut model: DomainModel,
    imports: &BTreeMap<String, String>,
    diagnostics: &mut Vec<Diagnostic>,
) -> DomainModel {
    let mut import_aliases = BTreeMap::new();

    for ty in model.types.values_mut() {
        bind_getters(ty);

        let mut aliases = ty.imports.clone();
        aliases.extend(imports.iter().map(|(a, p)| (a.clone(), p.clone())));

        let type_name = ty.name.clone();
        for field in ty.fields.values_mut() {
            resolve_namespaces(
                &mut field.ty,
                &aliases,
                &mut import_aliases,
                &type_name,
                &field.name,
                diagnostics,
            );
            if let Some(getter) = field.getter.as_mut() {
                getter.result.substitute_namespace(&aliases);
            }
        }
    }

    model.import_aliases = import_aliases;
    model
}

/// Attach each candidate getter to the field it exposes, then clear the
/// candidate list.
fn bind_getters(ty: &mut DomainType) {
    for getter in std::mem::take(&mut ty.getters) {
        let key = lower_first(&getter.name);
        match ty.fields.get_mut(&key) {
            Some(field) if field.ty == getter.result => {
                debug!(domain_type = %ty.name, field = %key, getter = %getter.name, "bound getter");
                field.getter = Some(getter);
            }
            _ => {
                debug!(domain_type = %ty.name, getter = %getter.name, "getter matches no field");
            }
        }
    }
}

/// Substitute the namespaces of `ty` (and its map key) and remember the alias
/// each referenced path is written with.
fn resolve_namespaces(
    ty: &mut FieldType,
    aliases: &BTreeMap<String, String>,
    import_aliases: &mut BTreeMap<String, String>,
    type_name: &str,
    field_name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if let Some(key) = ty.map_key.as_deref_mut() {
        resolve_namespaces(key, aliases, import_aliases, type_name, field_name, diagnostics);
    }

    let Some(alias) = ty.namespace.clone() else {
        return;
    };
    match aliases.get(&alias) {
        Some(path) => {
            assign_alias(import_aliases, path, &alias);
            ty.namespace = Some(path.clone());
        }
        None => diagnostics.push(
            Diagnostic::warning(
                "bind",
                format!(
                    "package '{}' used by {}.{} is not imported; the type is emitted as written",
                    alias, type_name, field_name
                ),
            )
            .at(format!("domain_types.{}", type_name)),
        ),
    }
}

/// Record the alias `path` is written with. A path whose alias is already
/// held by another path gets the first free numbered alias.
fn assign_alias(import_aliases: &mut BTreeMap<String, String>, path: &str, alias: &str) {
    if import_aliases.contains_key(path) {
        return;
    }

    let mut candidate = alias.to_string();
    let mut n = 2;
    while import_aliases.values().any(|taken| *taken == candidate) {
        candidate = format!("{}{}", alias, n);
        n += 1;
    }
    if candidate != alias {
        debug!(path, alias, renamed = %candidate, "import alias already taken");
    }
    import_aliases.insert(path.to_string(), candidate);
}
