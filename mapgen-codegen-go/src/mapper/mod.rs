//! Mapper synthesis: DTO declarations and mapping procedures as a Go model.

mod convert;
mod scope;
mod types;

use eyre::{Result, eyre};
use mapgen_core::{is_exported, receiver_name, upper_first};
use mapgen_ir::{DomainModel, DomainType, DtoSchema, DtoType, GenerationConfig};
use tracing::{debug, warn};

pub use convert::{Converter, Direction};
pub use scope::FnScope;
pub use types::TypeMapper;

use crate::{
    ImportCollector,
    ast::{Decl, Expr, FuncDecl, GoFile, Param, Stmt, StructDecl, TypeExpr},
};

/// Name of the DTO parameter of generated `map_from` functions.
const OUTPUT_PARAM: &str = "output";

/// Builds the [`GoFile`] for a verified DTO schema.
///
/// DTO types are visited in name order. Each contributes, in order, its
/// struct declaration (unless it has a custom constructor), accessors for
/// unexported domain fields, and for aggregate roots the DTO → domain
/// function and the domain → DTO method.
pub struct MapperSynthesizer<'a> {
    config: &'a GenerationConfig,
    domain: &'a DomainModel,
    schema: &'a DtoSchema,
    types: TypeMapper<'a>,
}

impl<'a> MapperSynthesizer<'a> {
    pub fn new(
        config: &'a GenerationConfig,
        domain: &'a DomainModel,
        schema: &'a DtoSchema,
    ) -> Self {
        let imports = ImportCollector::new(domain.import_aliases.clone());
        Self {
            config,
            domain,
            schema,
            types: TypeMapper::new(schema, &config.naming, imports),
        }
    }

    pub fn synthesize(mut self) -> Result<GoFile> {
        let schema = self.schema;
        let mut decls = Vec::new();

        for dto in schema.types.values() {
            let domain = self.domain_type(dto)?;
            debug!(dto = %dto.name, "synthesizing");

            if dto.is_struct_backed() {
                decls.push(Decl::Struct(self.struct_decl(dto)));
            }
            decls.extend(self.accessors(dto, domain).into_iter().map(Decl::Func));
            if dto.maps_to_domain() {
                decls.push(Decl::Func(self.map_from(dto, domain)?));
            }
            if dto.is_aggregate_root {
                decls.push(Decl::Func(self.map_to(dto, domain)?));
            }
        }

        let mut file = GoFile::new(&self.config.output.package);
        file.imports = self.types.into_imports().imports();
        file.decls = decls;
        Ok(file)
    }

    fn domain_type(&self, dto: &DtoType) -> Result<&'a DomainType> {
        self.domain
            .get(&dto.name)
            .ok_or_else(|| eyre!("DTO {} has no domain type", dto.name))
    }

    /// Names a generated local must not shadow.
    fn scope(&self, locals: &[&str]) -> FnScope {
        let mut scope = FnScope::new(self.types.imports().aliases().map(str::to_string));
        for name in self.domain.types.keys().chain(self.config.imports.keys()) {
            scope.reserve(name.as_str());
        }
        for local in locals {
            scope.reserve(*local);
        }
        scope
    }

    fn struct_decl(&mut self, dto: &DtoType) -> StructDecl {
        let mut decl = StructDecl::new(dto.dto_name(&self.config.naming.dto_suffix));
        for field in &dto.fields {
            let ty = self.types.dto_type(&field.ty);
            decl = decl.field(&field.name, ty);
        }
        decl
    }

    /// Zero-argument accessors for unexported domain fields without a getter.
    fn accessors(&mut self, dto: &DtoType, domain: &DomainType) -> Vec<FuncDecl> {
        let map_to = dto.is_aggregate_root.then(|| self.types.map_to_name());
        let receiver = receiver_name(&domain.name);
        let mut accessors = Vec::new();

        for field in domain.fields.values() {
            if is_exported(&field.name) || field.getter.is_some() {
                continue;
            }
            let name = upper_first(&field.name);
            if !is_exported(&name) {
                continue;
            }
            if domain.has_method(&name)
                || domain.fields.contains_key(&name)
                || map_to.as_deref() == Some(name.as_str())
            {
                warn!(
                    domain_type = %domain.name,
                    accessor = %name,
                    "skipping accessor, name already taken"
                );
                continue;
            }

            let result = self.types.domain_type(&field.ty);
            accessors.push(
                FuncDecl::new(name)
                    .receiver(Param::new(
                        &receiver,
                        TypeExpr::named(&domain.name).pointer(),
                    ))
                    .returns(result)
                    .body(vec![Stmt::Return(
                        Expr::ident(&receiver).field(&field.name),
                    )]),
            );
        }
        accessors
    }

    /// `func <MapFrom>(output <Dto>) *<Domain>`
    fn map_from(&mut self, dto: &DtoType, domain: &DomainType) -> Result<FuncDecl> {
        let name = self.types.map_from_name(dto);
        let mut scope = self.scope(&[OUTPUT_PARAM, name.as_str()]);
        let result = scope.fresh(&receiver_name(&domain.name));

        let output = Expr::ident(OUTPUT_PARAM);
        let mut body = Vec::new();
        let mut conv = Converter::new(&mut self.types, &mut scope, Direction::ToDomain);
        let dictionary = conv.dictionary(dto);

        match &dto.init_func {
            None => {
                let fields = conv.domain_fields(output, dto, &[], "", &mut body)?;
                let domain_ty = TypeExpr::named(&domain.name);
                body.push(Stmt::define(
                    &result,
                    Expr::composite(domain_ty, fields).addr(),
                ));
            }
            Some(init) => {
                debug!(dto = %dto.name, init = %init.name, "constructing through init function");
                let mut args = Vec::with_capacity(init.params.len());
                for param in &init.params {
                    let field = dictionary
                        .backward
                        .get(param)
                        .and_then(|name| dto.get_field(name))
                        .ok_or_else(|| {
                            eyre!(
                                "{} parameter {} is not a mapped field of {}",
                                init.name,
                                param,
                                dto.name
                            )
                        })?;
                    args.push(conv.convert(
                        output.clone().field(&field.name),
                        &field.ty,
                        &field.name,
                        &mut body,
                    )?);
                }

                let rest = conv.domain_fields(output, dto, &init.params, "", &mut body)?;

                body.push(Stmt::define(&result, Expr::call(&init.name, args)));
                body.extend(rest.into_iter().map(|(field, value)| {
                    Stmt::assign(Expr::ident(&result).field(field), value)
                }));
            }
        }
        body.push(Stmt::Return(Expr::ident(result)));

        Ok(FuncDecl::new(name)
            .param(Param::new(OUTPUT_PARAM, self.types.dto_named(dto)))
            .returns(TypeExpr::named(&domain.name).pointer())
            .body(body))
    }

    /// `func (x *<Domain>) <MapTo>() <Dto>`
    fn map_to(&mut self, dto: &DtoType, domain: &DomainType) -> Result<FuncDecl> {
        let name = self.types.map_to_name();
        let receiver = receiver_name(&domain.name);
        let mut scope = self.scope(&[receiver.as_str()]);
        let suffix_initial = self
            .config
            .naming
            .dto_suffix
            .chars()
            .next()
            .map(|c| c.to_lowercase().to_string())
            .unwrap_or_default();
        let result = scope.fresh(&format!("{}{}", receiver, suffix_initial));

        let mut body = Vec::new();
        let mut conv = Converter::new(&mut self.types, &mut scope, Direction::ToDto);
        let fields = conv.dto_fields(Expr::ident(&receiver), dto, "", &mut body)?;

        let dto_ty = self.types.dto_named(dto);
        body.push(Stmt::define(&result, Expr::composite(dto_ty.clone(), fields)));
        body.push(Stmt::Return(Expr::ident(result)));

        Ok(FuncDecl::new(name)
            .receiver(Param::new(receiver, TypeExpr::named(&domain.name).pointer()))
            .returns(dto_ty)
            .body(body))
    }
}

#[cfg(test)]
mod tests {
    use mapgen_codegen::{
        builder::CodeBuilder,
        pipeline::phases::{bind_domain_model, build_schema},
        testing::{UUID_PATH, assert_content_eq, domain_model, restaurant_domain, test_config},
    };
    use mapgen_ir::{FieldType, InitFunc, MapBinding};

    use super::*;
    use crate::ast::Import;

    fn synthesize(config: &GenerationConfig, domain: &DomainModel) -> GoFile {
        let (schema, diagnostics) = build_schema(config, domain);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        MapperSynthesizer::new(config, domain, &schema)
            .synthesize()
            .unwrap()
    }

    fn render_decl(file: &GoFile, name: &str) -> String {
        let decl = file
            .find(name)
            .unwrap_or_else(|| panic!("no declaration named {}", name));
        let mut builder = CodeBuilder::go();
        builder.emit(decl);
        builder.build()
    }

    fn root(name: &str) -> DtoType {
        let mut dto = DtoType::new(name);
        dto.is_aggregate_root = true;
        dto
    }

    fn restaurant_file() -> GoFile {
        let mut restaurant = root("Restaurant");
        restaurant
            .ignore_domain_fields
            .insert("removedThumbnailIDs".to_string());
        let config = test_config(vec![restaurant, DtoType::new("RestaurantThumbnail")]);
        synthesize(&config, &restaurant_domain())
    }

    #[test]
    fn test_restaurant_declarations_in_order() {
        let file = restaurant_file();
        let names: Vec<_> = file.decls.iter().map(Decl::name).collect();
        assert_eq!(
            names,
            [
                "RestaurantOutput",
                "RemovedThumbnailIDs",
                "MapRestaurantFromOutput",
                "ToOutput",
                "RestaurantThumbnailOutput",
            ]
        );
        assert_eq!(file.imports, [Import::new(UUID_PATH, "uuid")]);
    }

    #[test]
    fn test_restaurant_struct_shape() {
        let file = restaurant_file();
        let Some(Decl::Struct(decl)) = file.find("RestaurantOutput") else {
            panic!("RestaurantOutput is not a struct");
        };
        let fields: Vec<_> = decl
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.ty.to_string()))
            .collect();
        assert_eq!(
            fields,
            [
                ("RestaurantID", "uuid.UUID".to_string()),
                ("PhoneNumber", "string".to_string()),
                ("Thumbnails", "[]RestaurantThumbnailOutput".to_string()),
            ]
        );
    }

    #[test]
    fn test_restaurant_map_to() {
        let file = restaurant_file();
        assert_content_eq(
            "func (r *Restaurant) ToOutput() RestaurantOutput {
\tthumbnails := make([]RestaurantThumbnailOutput, len(r.thumbnails))
\tfor i := 0; i < len(r.thumbnails); i++ {
\t\tif r.thumbnails[i] != nil {
\t\t\tthumbnails[i] = RestaurantThumbnailOutput{
\t\t\t\tThumbnailID:  r.thumbnails[i].thumbnailID,
\t\t\t\tThumbnailURL: r.thumbnails[i].thumbnailURL,
\t\t\t\tPosition:     r.thumbnails[i].position,
\t\t\t}
\t\t}
\t}
\tro := RestaurantOutput{
\t\tRestaurantID: r.restaurantID,
\t\tPhoneNumber:  r.phoneNumber,
\t\tThumbnails:   thumbnails,
\t}
\treturn ro
}
",
            &render_decl(&file, "ToOutput"),
        );
    }

    #[test]
    fn test_restaurant_map_from() {
        let file = restaurant_file();
        assert_content_eq(
            "func MapRestaurantFromOutput(output RestaurantOutput) *Restaurant {
\tthumbnails := make([]*RestaurantThumbnail, len(output.Thumbnails))
\tfor i := 0; i < len(output.Thumbnails); i++ {
\t\tthumbnails[i] = &RestaurantThumbnail{
\t\t\tthumbnailID:  output.Thumbnails[i].ThumbnailID,
\t\t\tthumbnailURL: output.Thumbnails[i].ThumbnailURL,
\t\t\tposition:     output.Thumbnails[i].Position,
\t\t}
\t}
\tr := &Restaurant{
\t\trestaurantID: output.RestaurantID,
\t\tphoneNumber:  output.PhoneNumber,
\t\tthumbnails:   thumbnails,
\t}
\treturn r
}
",
            &render_decl(&file, "MapRestaurantFromOutput"),
        );
    }

    #[test]
    fn test_accessor_for_field_without_getter() {
        let file = restaurant_file();
        assert_eq!(
            render_decl(&file, "RemovedThumbnailIDs"),
            "func (r *Restaurant) RemovedThumbnailIDs() []uuid.UUID {\n\treturn r.removedThumbnailIDs\n}\n"
        );
        assert!(file.find("PhoneNumber").is_none());
    }

    fn shop_domain() -> DomainModel {
        domain_model(vec![
            DomainType::new("Shop", "shop.go")
                .field("id", FieldType::named("string"))
                .field("owner", FieldType::named("Owner").pointer())
                .field(
                    "items",
                    FieldType::named("Item")
                        .pointer()
                        .keyed_by(FieldType::named("string")),
                ),
            DomainType::new("Owner", "shop.go").field("name", FieldType::named("string")),
            DomainType::new("Item", "shop.go").field("title", FieldType::named("string")),
        ])
    }

    fn shop_file() -> GoFile {
        let config = test_config(vec![
            root("Shop"),
            DtoType::new("Owner"),
            DtoType::new("Item"),
        ]);
        synthesize(&config, &shop_domain())
    }

    #[test]
    fn test_pointer_and_map_fields_to_dto() {
        assert_content_eq(
            "func (s *Shop) ToOutput() ShopOutput {
\tvar owner *OwnerOutput
\tif s.owner != nil {
\t\towner = &OwnerOutput{
\t\t\tName: s.owner.name,
\t\t}
\t}
\titems := make(map[string]ItemOutput, len(s.items))
\tfor key, value := range s.items {
\t\tif value != nil {
\t\t\titems[key] = ItemOutput{
\t\t\t\tTitle: value.title,
\t\t\t}
\t\t}
\t}
\tso := ShopOutput{
\t\tId:    s.id,
\t\tOwner: owner,
\t\tItems: items,
\t}
\treturn so
}
",
            &render_decl(&shop_file(), "ToOutput"),
        );
    }

    #[test]
    fn test_plain_map_field_is_copied() {
        let domain = domain_model(vec![DomainType::new("Tag", "tag.go").field(
            "labels",
            FieldType::named("int").keyed_by(FieldType::named("string")),
        )]);
        let file = synthesize(&test_config(vec![root("Tag")]), &domain);

        assert_content_eq(
            "func (t *Tag) ToOutput() TagOutput {
\tlabels := make(map[string]int, len(t.labels))
\tfor key, value := range t.labels {
\t\tlabels[key] = value
\t}
\tto := TagOutput{
\t\tLabels: labels,
\t}
\treturn to
}
",
            &render_decl(&file, "ToOutput"),
        );
        assert_content_eq(
            "func MapTagFromOutput(output TagOutput) *Tag {
\tlabels := make(map[string]int, len(output.Labels))
\tfor key, value := range output.Labels {
\t\tlabels[key] = value
\t}
\tt := &Tag{
\t\tlabels: labels,
\t}
\treturn t
}
",
            &render_decl(&file, "MapTagFromOutput"),
        );
    }

    #[test]
    fn test_renamed_field_of_nested_dto() {
        let domain = domain_model(vec![
            DomainType::new("Shelf", "shelf.go")
                .field("books", FieldType::named("Book").slice()),
            DomainType::new("Book", "shelf.go").field("isbn", FieldType::named("string")),
        ]);
        let mut book = DtoType::new("Book");
        book.map_bindings.insert(
            "Code".to_string(),
            MapBinding::parse("Book.isbn").unwrap(),
        );
        let file = synthesize(&test_config(vec![root("Shelf"), book]), &domain);

        assert_content_eq(
            "func (s *Shelf) ToOutput() ShelfOutput {
\tbooks := make([]BookOutput, len(s.books))
\tfor i := 0; i < len(s.books); i++ {
\t\tbooks[i] = BookOutput{
\t\t\tCode: s.books[i].isbn,
\t\t}
\t}
\tso := ShelfOutput{
\t\tBooks: books,
\t}
\treturn so
}
",
            &render_decl(&file, "ToOutput"),
        );
        assert!(
            render_decl(&file, "MapShelfFromOutput").contains("isbn: output.Books[i].Code,")
        );
    }

    #[test]
    fn test_pointer_and_map_fields_to_domain() {
        assert_content_eq(
            "func MapShopFromOutput(output ShopOutput) *Shop {
\tvar owner *Owner
\tif output.Owner != nil {
\t\towner = &Owner{
\t\t\tname: output.Owner.Name,
\t\t}
\t}
\titems := make(map[string]*Item, len(output.Items))
\tfor key, value := range output.Items {
\t\titems[key] = &Item{
\t\t\ttitle: value.Title,
\t\t}
\t}
\ts := &Shop{
\t\tid:    output.Id,
\t\towner: owner,
\t\titems: items,
\t}
\treturn s
}
",
            &render_decl(&shop_file(), "MapShopFromOutput"),
        );
    }

    #[test]
    fn test_nested_dto_struct_shapes() {
        let file = shop_file();
        assert_eq!(
            render_decl(&file, "ShopOutput"),
            "type ShopOutput struct {\n\tId    string\n\tOwner *OwnerOutput\n\tItems map[string]ItemOutput\n}\n"
        );
        assert!(file.find("MapOwnerFromOutput").is_none());
        assert!(file.imports.is_empty());
    }

    #[test]
    fn test_root_references_use_generated_procedures() {
        let domain = domain_model(vec![
            DomainType::new("Cart", "cart.go")
                .field("owner", FieldType::named("User").pointer())
                .field("guests", FieldType::named("User").slice()),
            DomainType::new("User", "user.go").field("name", FieldType::named("string")),
        ]);
        let config = test_config(vec![root("Cart"), root("User")]);
        let file = synthesize(&config, &domain);

        let map_to = file
            .decls
            .iter()
            .find(|d| match d {
                Decl::Func(f) => {
                    f.name == "ToOutput" && f.receiver.as_ref().is_some_and(|r| r.name == "c")
                }
                Decl::Struct(_) => false,
            })
            .unwrap();
        let mut builder = CodeBuilder::go();
        builder.emit(map_to);
        assert_content_eq(
            "func (c *Cart) ToOutput() CartOutput {
\tvar owner *UserOutput
\tif c.owner != nil {
\t\townerOut := c.owner.ToOutput()
\t\towner = &ownerOut
\t}
\tguests := make([]UserOutput, len(c.guests))
\tfor i := 0; i < len(c.guests); i++ {
\t\tguests[i] = c.guests[i].ToOutput()
\t}
\tco := CartOutput{
\t\tOwner:  owner,
\t\tGuests: guests,
\t}
\treturn co
}
",
            &builder.build(),
        );

        assert_content_eq(
            "func MapCartFromOutput(output CartOutput) *Cart {
\tvar owner *User
\tif output.Owner != nil {
\t\towner = MapUserFromOutput(*output.Owner)
\t}
\tguests := make([]User, len(output.Guests))
\tfor i := 0; i < len(output.Guests); i++ {
\t\tguests[i] = *MapUserFromOutput(output.Guests[i])
\t}
\tc := &Cart{
\t\towner:  owner,
\t\tguests: guests,
\t}
\treturn c
}
",
            &render_decl(&file, "MapCartFromOutput"),
        );
    }

    #[test]
    fn test_nested_collections_use_unique_locals() {
        let dish = FieldType::named("Dish").pointer();
        let domain = domain_model(vec![
            DomainType::new("Menu", "menu.go")
                .field("sections", FieldType::named("Section").slice())
                .field(
                    "featured",
                    dish.clone().slice().keyed_by(FieldType::named("string")),
                )
                .field("special", dish.clone()),
            DomainType::new("Section", "menu.go")
                .field("title", FieldType::named("string"))
                .field("dishes", dish.slice()),
            DomainType::new("Dish", "menu.go").field("name", FieldType::named("string")),
        ]);
        let config = test_config(vec![
            root("Menu"),
            DtoType::new("Section"),
            DtoType::new("Dish"),
        ]);
        let file = synthesize(&config, &domain);

        assert_content_eq(
            "func (m *Menu) ToOutput() MenuOutput {
\tsections := make([]SectionOutput, len(m.sections))
\tfor i := 0; i < len(m.sections); i++ {
\t\tsectionsDishes := make([]DishOutput, len(m.sections[i].dishes))
\t\tfor j := 0; j < len(m.sections[i].dishes); j++ {
\t\t\tif m.sections[i].dishes[j] != nil {
\t\t\t\tsectionsDishes[j] = DishOutput{
\t\t\t\t\tName: m.sections[i].dishes[j].name,
\t\t\t\t}
\t\t\t}
\t\t}
\t\tsections[i] = SectionOutput{
\t\t\tTitle:  m.sections[i].title,
\t\t\tDishes: sectionsDishes,
\t\t}
\t}
\tfeatured := make(map[string][]DishOutput, len(m.featured))
\tfor key, value := range m.featured {
\t\tfeatured2 := make([]DishOutput, len(value))
\t\tfor k := 0; k < len(value); k++ {
\t\t\tif value[k] != nil {
\t\t\t\tfeatured2[k] = DishOutput{
\t\t\t\t\tName: value[k].name,
\t\t\t\t}
\t\t\t}
\t\t}
\t\tfeatured[key] = featured2
\t}
\tvar special *DishOutput
\tif m.special != nil {
\t\tspecial = &DishOutput{
\t\t\tName: m.special.name,
\t\t}
\t}
\tmo := MenuOutput{
\t\tSections: sections,
\t\tFeatured: featured,
\t\tSpecial:  special,
\t}
\treturn mo
}
",
            &render_decl(&file, "ToOutput"),
        );
        assert_eq!(
            render_decl(&file, "MenuOutput"),
            "type MenuOutput struct {\n\tSections []SectionOutput\n\tFeatured map[string][]DishOutput\n\tSpecial  *DishOutput\n}\n"
        );
    }

    fn order_setup() -> (GenerationConfig, DomainModel) {
        let domain = domain_model(vec![
            DomainType::new("Order", "order.go")
                .field("id", FieldType::named("string"))
                .field("note", FieldType::named("string"))
                .field("customer", FieldType::named("Customer").pointer()),
            DomainType::new("Customer", "order.go").field("name", FieldType::named("string")),
        ]);
        let mut order = root("Order");
        order.init_func = Some(InitFunc {
            name: "NewOrder".to_string(),
            params: vec!["id".to_string()],
        });
        order.map_bindings.insert(
            "CustomerName".to_string(),
            MapBinding {
                target_type: "Customer".to_string(),
                target_field: "name".to_string(),
            },
        );
        (test_config(vec![order]), domain)
    }

    #[test]
    fn test_init_func_construction() {
        let (config, domain) = order_setup();
        let file = synthesize(&config, &domain);

        assert!(file.find("OrderOutput").is_none());
        assert_content_eq(
            "func MapOrderFromOutput(output OrderOutput) *Order {
\to := NewOrder(output.Id)
\to.note = output.Note
\to.customer = output.Customer
\treturn o
}
",
            &render_decl(&file, "MapOrderFromOutput"),
        );
    }

    #[test]
    fn test_composed_field_only_maps_to_dto() {
        let (config, domain) = order_setup();
        let file = synthesize(&config, &domain);

        assert_content_eq(
            "func (o *Order) ToOutput() OrderOutput {
\tvar customerName string
\tif o.customer != nil {
\t\tcustomerName = o.customer.name
\t}
\too := OrderOutput{
\t\tId:           o.id,
\t\tNote:         o.note,
\t\tCustomer:     o.customer,
\t\tCustomerName: customerName,
\t}
\treturn oo
}
",
            &render_decl(&file, "ToOutput"),
        );
        assert!(!render_decl(&file, "MapOrderFromOutput").contains("CustomerName"));
    }

    #[test]
    fn test_composed_field_through_value_is_read_directly() {
        let domain = domain_model(vec![
            DomainType::new("Invoice", "invoice.go")
                .field("total", FieldType::named("int"))
                .field("billing", FieldType::named("Address")),
            DomainType::new("Address", "invoice.go").field("city", FieldType::named("string")),
        ]);
        let mut invoice = root("Invoice");
        invoice.map_bindings.insert(
            "BillingCity".to_string(),
            MapBinding::parse("Address.city").unwrap(),
        );
        let file = synthesize(&test_config(vec![invoice]), &domain);

        let map_to = render_decl(&file, "ToOutput");
        assert!(map_to.contains("BillingCity: i.billing.city,"), "{}", map_to);
        assert!(!map_to.contains("!= nil"));
    }

    #[test]
    fn test_packages_sharing_an_alias_import_separately() {
        let mut invoice = DomainType::new("Invoice", "invoice.go")
            .field("total", FieldType::qualified("money", "Amount"));
        invoice.imports.insert("money".into(), "example.com/billing/money".into());
        let mut refund = DomainType::new("Refund", "refund.go")
            .field("amount", FieldType::qualified("money", "Amount"));
        refund.imports.insert("money".into(), "example.com/ledger/money".into());

        let config = test_config(vec![root("Invoice"), root("Refund")]);
        let mut diagnostics = Vec::new();
        let domain = bind_domain_model(
            domain_model(vec![invoice, refund]),
            &config.imports,
            &mut diagnostics,
        );
        assert!(diagnostics.is_empty());
        let file = synthesize(&config, &domain);

        assert_eq!(
            file.imports,
            [
                Import::new("example.com/billing/money", "money"),
                Import::new("example.com/ledger/money", "money2"),
            ]
        );
        assert_eq!(
            render_decl(&file, "RefundOutput"),
            "type RefundOutput struct {\n\tAmount money2.Amount\n}\n"
        );
    }

    #[test]
    fn test_disabled_domain_mapping_emits_only_map_to() {
        let domain = domain_model(vec![
            DomainType::new("Report", "report.go").field("Title", FieldType::named("string")),
        ]);
        let mut report = root("Report");
        report.domain_mapping_enabled = false;
        let file = synthesize(&test_config(vec![report]), &domain);

        let names: Vec<_> = file.decls.iter().map(Decl::name).collect();
        assert_eq!(names, ["ReportOutput", "ToOutput"]);
    }

    #[test]
    fn test_accessor_skipped_when_name_taken() {
        let mut tag = DomainType::new("Tag", "tag.go")
            .field("label", FieldType::named("string"))
            .field("color", FieldType::named("string"));
        tag.methods.insert("Label".to_string());
        let file = synthesize(&test_config(vec![DtoType::new("Tag")]), &domain_model(vec![tag]));

        assert!(file.find("Label").is_none());
        assert_eq!(
            render_decl(&file, "Color"),
            "func (t *Tag) Color() string {\n\treturn t.color\n}\n"
        );
    }
}
