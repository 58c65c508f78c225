//! Field value conversion between domain and DTO shapes.

use std::borrow::Cow;

use eyre::{Result, eyre};
use mapgen_ir::{DtoField, DtoType, FieldDictionary, FieldSource, FieldType};
use tracing::debug;

use super::{FnScope, TypeMapper};
use crate::ast::{Expr, Stmt, TypeExpr};

/// Which way a generated function maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Domain value to DTO.
    ToDto,
    /// DTO value back to the domain.
    ToDomain,
}

/// The DTO field a dictionary entry names.
fn dictionary_field<'d>(dto: &'d DtoType, name: &str) -> Result<&'d DtoField> {
    dto.get_field(name)
        .ok_or_else(|| eyre!("field dictionary of {} names unknown field {}", dto.name, name))
}

/// Converts values for one generated function.
///
/// Statements a conversion needs (collection allocation, loops, nil
/// guards) are pushed onto the caller's statement list; the returned
/// expression holds the converted value.
pub struct Converter<'t, 'a> {
    types: &'t mut TypeMapper<'a>,
    scope: &'t mut FnScope,
    dir: Direction,
}

impl<'t, 'a> Converter<'t, 'a> {
    pub fn new(types: &'t mut TypeMapper<'a>, scope: &'t mut FnScope, dir: Direction) -> Self {
        Self { types, scope, dir }
    }

    /// Convert `src`, of field type `ty`, to the other side.
    ///
    /// Maps are always copied into a fresh map. Other values that do not
    /// involve a generated DTO type are passed as is.
    pub fn convert(
        &mut self,
        src: Expr,
        ty: &FieldType,
        hint: &str,
        pre: &mut Vec<Stmt>,
    ) -> Result<Expr> {
        if ty.is_map {
            return self.convert_map(src, ty, hint, pre);
        }

        let schema = self.types.schema();
        let Some(dto) = schema.dto_for(ty) else {
            return Ok(src);
        };

        if ty.is_slice {
            self.convert_slice(src, ty, hint, pre)
        } else if ty.is_pointer {
            self.convert_pointer(src, dto, hint, pre)
        } else {
            self.value(src, dto, hint, pre)
        }
    }

    fn target_type(&mut self, ty: &FieldType) -> TypeExpr {
        match self.dir {
            Direction::ToDto => self.types.dto_type(ty),
            Direction::ToDomain => self.types.domain_type(ty),
        }
    }

    /// The field dictionary of `dto`, derived from its own fields when the
    /// schema holds none.
    pub fn dictionary(&self, dto: &DtoType) -> Cow<'a, FieldDictionary> {
        match self.types.schema().dictionary(&dto.name) {
            Some(dictionary) => Cow::Borrowed(dictionary),
            None => Cow::Owned(FieldDictionary::from_fields(&dto.fields)),
        }
    }

    /// DTO fields built from the domain value `src`: the forward dictionary
    /// pairs, then composed fields.
    pub fn dto_fields(
        &mut self,
        src: Expr,
        dto: &DtoType,
        prefix: &str,
        pre: &mut Vec<Stmt>,
    ) -> Result<Vec<(String, Expr)>> {
        let dictionary = self.dictionary(dto);
        let mut fields = Vec::with_capacity(dto.fields.len());

        for (name, domain_field) in &dictionary.forward {
            let field = dictionary_field(dto, name)?;
            let nested = format!("{}{}", prefix, name);
            let read = src.clone().field(domain_field);
            fields.push((name.clone(), self.convert(read, &field.ty, &nested, pre)?));
        }
        for field in dto.fields.iter().filter(|f| !f.is_own()) {
            let nested = format!("{}{}", prefix, field.name);
            let read = self.read_composed(src.clone(), field, &nested, pre);
            fields.push((field.name.clone(), self.convert(read, &field.ty, &nested, pre)?));
        }
        Ok(fields)
    }

    /// Domain fields rebuilt from the DTO value `src` through the backward
    /// dictionary. Domain fields listed in `skip` are left out.
    pub fn domain_fields(
        &mut self,
        src: Expr,
        dto: &DtoType,
        skip: &[String],
        prefix: &str,
        pre: &mut Vec<Stmt>,
    ) -> Result<Vec<(String, Expr)>> {
        let dictionary = self.dictionary(dto);
        let mut fields = Vec::with_capacity(dictionary.backward.len());

        for (domain_field, name) in &dictionary.backward {
            if skip.contains(domain_field) {
                continue;
            }
            let field = dictionary_field(dto, name)?;
            let nested = format!("{}{}", prefix, name);
            let read = src.clone().field(name);
            fields.push((domain_field.clone(), self.convert(read, &field.ty, &nested, pre)?));
        }
        Ok(fields)
    }

    /// Read a composed field through its `via` field. A nullable `via` is
    /// read into a local under a nil guard.
    fn read_composed(
        &mut self,
        src: Expr,
        field: &DtoField,
        hint: &str,
        pre: &mut Vec<Stmt>,
    ) -> Expr {
        let FieldSource::Composed { via, nullable, .. } = &field.source else {
            return src.field(&field.mapping_to);
        };
        let through = src.field(via);
        if !*nullable {
            return through.field(&field.mapping_to);
        }

        let tmp = self.scope.fresh(hint);
        let ty = self.types.domain_type(&field.ty);
        pre.push(Stmt::var(&tmp, ty));
        pre.push(Stmt::If {
            cond: through.clone().not_nil(),
            body: vec![Stmt::assign(
                Expr::ident(&tmp),
                through.field(&field.mapping_to),
            )],
        });
        Expr::ident(tmp)
    }

    /// Fresh map, keys passed through, values converted.
    fn convert_map(
        &mut self,
        src: Expr,
        ty: &FieldType,
        hint: &str,
        pre: &mut Vec<Stmt>,
    ) -> Result<Expr> {
        let dst = self.scope.fresh(hint);
        let target = self.target_type(ty);
        pre.push(Stmt::define(
            &dst,
            Expr::make(target, Expr::len_of(src.clone())),
        ));

        let key = self.scope.fresh("key");
        let value = self.scope.fresh("value");
        let mut body = Vec::new();
        self.assign_element(
            Expr::ident(&dst).index(Expr::ident(&key)),
            Expr::ident(&value),
            &ty.map_value(),
            hint,
            &mut body,
        )?;
        pre.push(Stmt::Range {
            key,
            value,
            over: src,
            body,
        });
        Ok(Expr::ident(dst))
    }

    /// Destination sized to the source, filled by an index loop.
    fn convert_slice(
        &mut self,
        src: Expr,
        ty: &FieldType,
        hint: &str,
        pre: &mut Vec<Stmt>,
    ) -> Result<Expr> {
        let dst = self.scope.fresh(hint);
        let target = self.target_type(ty);
        pre.push(Stmt::define(
            &dst,
            Expr::make(target, Expr::len_of(src.clone())),
        ));

        let index = self.scope.loop_index();
        let mut body = Vec::new();
        self.assign_element(
            Expr::ident(&dst).index(Expr::ident(&index)),
            src.clone().index(Expr::ident(&index)),
            &ty.element(),
            hint,
            &mut body,
        )?;
        pre.push(Stmt::ForIndex {
            index,
            over: src,
            body,
        });
        Ok(Expr::ident(dst))
    }

    /// A single nil-guarded pointer reference.
    fn convert_pointer(
        &mut self,
        src: Expr,
        dto: &DtoType,
        hint: &str,
        pre: &mut Vec<Stmt>,
    ) -> Result<Expr> {
        let tmp = self.scope.fresh(hint);
        let target = match self.dir {
            Direction::ToDto => self.types.dto_named(dto),
            Direction::ToDomain => self.types.domain_named(dto),
        };
        pre.push(Stmt::var(&tmp, target.pointer()));

        let mut guarded = Vec::new();
        let value = match self.dir {
            Direction::ToDomain if dto.maps_to_domain() => {
                Expr::call(self.types.map_from_name(dto), vec![src.clone().deref()])
            }
            Direction::ToDto if dto.is_aggregate_root => {
                let out = self.scope.fresh(&format!("{}Out", hint));
                guarded.push(Stmt::define(
                    &out,
                    src.clone().method(self.types.map_to_name()),
                ));
                Expr::ident(out).addr()
            }
            _ => self.value(src.clone(), dto, hint, &mut guarded)?.addr(),
        };
        guarded.push(Stmt::assign(Expr::ident(&tmp), value));
        pre.push(Stmt::If {
            cond: src.not_nil(),
            body: guarded,
        });
        Ok(Expr::ident(tmp))
    }

    /// Store the converted collection element `src` into `dst`.
    fn assign_element(
        &mut self,
        dst: Expr,
        src: Expr,
        elem: &FieldType,
        hint: &str,
        body: &mut Vec<Stmt>,
    ) -> Result<()> {
        let schema = self.types.schema();
        let dto = match schema.dto_for(elem) {
            Some(dto) if !elem.is_collection() => dto,
            _ => {
                let value = self.convert(src, elem, hint, body)?;
                body.push(Stmt::assign(dst, value));
                return Ok(());
            }
        };

        if !elem.is_pointer {
            let value = self.value(src, dto, hint, body)?;
            body.push(Stmt::assign(dst, value));
            return Ok(());
        }

        match self.dir {
            // pointer elements become values; nil leaves the zero value
            Direction::ToDto => {
                let mut guarded = Vec::new();
                let value = self.value(src.clone(), dto, hint, &mut guarded)?;
                guarded.push(Stmt::assign(dst, value));
                body.push(Stmt::If {
                    cond: src.not_nil(),
                    body: guarded,
                });
            }
            Direction::ToDomain => {
                let value = if dto.maps_to_domain() {
                    Expr::call(self.types.map_from_name(dto), vec![src])
                } else {
                    self.value(src, dto, hint, body)?.addr()
                };
                body.push(Stmt::assign(dst, value));
            }
        }
        Ok(())
    }

    /// Convert a non-nil value of `dto`'s type.
    ///
    /// Aggregate roots go through their generated procedures; every other
    /// DTO type is built inline from its fields.
    pub fn value(
        &mut self,
        src: Expr,
        dto: &DtoType,
        hint: &str,
        pre: &mut Vec<Stmt>,
    ) -> Result<Expr> {
        match self.dir {
            Direction::ToDto if dto.is_aggregate_root => {
                Ok(src.method(self.types.map_to_name()))
            }
            Direction::ToDto => {
                debug!(dto = %dto.name, "inlining DTO construction");
                let fields = self.dto_fields(src, dto, hint, pre)?;
                Ok(Expr::composite(self.types.dto_named(dto), fields))
            }
            Direction::ToDomain if dto.maps_to_domain() => {
                Ok(Expr::call(self.types.map_from_name(dto), vec![src]).deref())
            }
            Direction::ToDomain => {
                debug!(dto = %dto.name, "inlining domain construction");
                let fields = self.domain_fields(src, dto, &[], hint, pre)?;
                Ok(Expr::composite(self.types.domain_named(dto), fields))
            }
        }
    }
}
