//! Go type expressions for domain and DTO field shapes.

use mapgen_codegen::naming::{map_from_func_name, map_to_func_name};
use mapgen_ir::{DtoSchema, DtoType, FieldType, NamingTemplates};

use crate::{ImportCollector, ast::TypeExpr};

/// Maps field types onto Go type expressions, recording the imports they
/// reference.
#[derive(Debug)]
pub struct TypeMapper<'a> {
    schema: &'a DtoSchema,
    naming: &'a NamingTemplates,
    imports: ImportCollector,
}

impl<'a> TypeMapper<'a> {
    pub fn new(
        schema: &'a DtoSchema,
        naming: &'a NamingTemplates,
        imports: ImportCollector,
    ) -> Self {
        Self {
            schema,
            naming,
            imports,
        }
    }

    pub fn schema(&self) -> &'a DtoSchema {
        self.schema
    }

    pub fn imports(&self) -> &ImportCollector {
        &self.imports
    }

    pub fn into_imports(self) -> ImportCollector {
        self.imports
    }

    pub fn map_to_name(&self) -> String {
        map_to_func_name(self.naming)
    }

    pub fn map_from_name(&self, dto: &DtoType) -> String {
        map_from_func_name(self.naming, &dto.name)
    }

    /// `<Name><suffix>`
    pub fn dto_named(&self, dto: &DtoType) -> TypeExpr {
        TypeExpr::named(dto.dto_name(&self.naming.dto_suffix))
    }

    pub fn domain_named(&self, dto: &DtoType) -> TypeExpr {
        TypeExpr::named(&dto.name)
    }

    /// The field's own type.
    pub fn domain_type(&mut self, ty: &FieldType) -> TypeExpr {
        let base = self.base(ty);
        self.wrap(ty, base, ty.is_pointer)
    }

    /// The field's type on the DTO side.
    ///
    /// References to struct-backed DTO types become the generated DTO
    /// type; inside collections those elements are values.
    pub fn dto_type(&mut self, ty: &FieldType) -> TypeExpr {
        let schema = self.schema;
        match schema.dto_for(ty) {
            Some(dto) => {
                let base = self.dto_named(dto);
                self.wrap(ty, base, ty.is_pointer && !ty.is_collection())
            }
            None => self.domain_type(ty),
        }
    }

    fn base(&mut self, ty: &FieldType) -> TypeExpr {
        if ty.verbatim {
            return TypeExpr::Verbatim(ty.name.clone());
        }
        match &ty.namespace {
            Some(namespace) => TypeExpr::qualified(self.imports.qualify(namespace), &ty.name),
            None => TypeExpr::named(&ty.name),
        }
    }

    fn wrap(&mut self, ty: &FieldType, base: TypeExpr, pointer: bool) -> TypeExpr {
        let mut expr = if pointer { base.pointer() } else { base };
        if ty.is_slice {
            expr = expr.slice();
        }
        if let (true, Some(key)) = (ty.is_map, ty.map_key.as_deref()) {
            expr = TypeExpr::map(self.domain_type(key), expr);
        }
        expr
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use mapgen_codegen::testing::{UUID_PATH, test_config};
    use mapgen_ir::InitFunc;

    use super::*;

    fn schema() -> DtoSchema {
        let mut schema = DtoSchema::default();
        schema
            .types
            .insert("Item".to_string(), DtoType::new("Item"));
        let mut money = DtoType::new("Money");
        money.init_func = Some(InitFunc {
            name: "NewMoney".to_string(),
            params: vec![],
        });
        schema.types.insert("Money".to_string(), money);
        schema
    }

    fn imports() -> ImportCollector {
        ImportCollector::new(BTreeMap::from([(
            UUID_PATH.to_string(),
            "uuid".to_string(),
        )]))
    }

    #[test]
    fn test_dto_type_shapes() {
        let schema = schema();
        let config = test_config(vec![]);
        let mut types = TypeMapper::new(&schema, &config.naming, imports());

        let item = FieldType::named("Item");
        assert_eq!(types.dto_type(&item).to_string(), "ItemOutput");
        assert_eq!(types.dto_type(&item.clone().pointer()).to_string(), "*ItemOutput");
        assert_eq!(
            types.dto_type(&item.clone().pointer().slice()).to_string(),
            "[]ItemOutput"
        );
        assert_eq!(
            types
                .dto_type(&item.clone().pointer().slice().keyed_by(FieldType::named("string")))
                .to_string(),
            "map[string][]ItemOutput"
        );
        assert_eq!(
            types.domain_type(&item.pointer().slice()).to_string(),
            "[]*Item"
        );
    }

    #[test]
    fn test_non_dto_types_pass_through() {
        let schema = schema();
        let config = test_config(vec![]);
        let mut types = TypeMapper::new(&schema, &config.naming, imports());

        assert_eq!(
            types.dto_type(&FieldType::named("Money").pointer()).to_string(),
            "*Money"
        );
        assert_eq!(
            types.dto_type(&FieldType::verbatim("chan int")).to_string(),
            "chan int"
        );
        assert!(types.imports().is_empty());
    }

    #[test]
    fn test_qualified_types_record_imports() {
        let schema = schema();
        let config = test_config(vec![]);
        let mut types = TypeMapper::new(&schema, &config.naming, imports());

        let ids = FieldType::qualified(UUID_PATH, "UUID").slice();
        assert_eq!(types.dto_type(&ids).to_string(), "[]uuid.UUID");

        let keyed = FieldType::named("Item").keyed_by(FieldType::qualified(UUID_PATH, "UUID"));
        assert_eq!(types.dto_type(&keyed).to_string(), "map[uuid.UUID]ItemOutput");

        let imports = types.into_imports().imports();
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].alias, "uuid");
    }

    #[test]
    fn test_procedure_names() {
        let schema = schema();
        let config = test_config(vec![]);
        let types = TypeMapper::new(&schema, &config.naming, imports());

        assert_eq!(types.map_to_name(), "ToOutput");
        assert_eq!(types.map_from_name(&DtoType::new("Item")), "MapItemFromOutput");
    }
}
