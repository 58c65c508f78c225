//! Domain type extraction from parsed files.

use std::path::Path;

use mapgen_ir::{DomainField, DomainType, Getter};
use tracing::{debug, warn};

use crate::{Error, GoParser, ParsedFile, Result, decode_type_expr};

/// Parse `path` once and extract every type in `names` from it.
pub fn load_domain_types(
    parser: &mut GoParser,
    path: &Path,
    names: &[String],
) -> Result<Vec<DomainType>> {
    debug!(path = %path.display(), types = ?names, "parsing source file");
    let file = parser.parse_file(path)?;
    extract_domain_types(&file, names)
}

/// Build one [`DomainType`] per requested name.
///
/// Fields keep declaration order. Every method declared on the type is
/// recorded by name; those with zero parameters and one result also become
/// candidate getters.
pub fn extract_domain_types(file: &ParsedFile, names: &[String]) -> Result<Vec<DomainType>> {
    names.iter().map(|name| extract_one(file, name)).collect()
}

fn extract_one(file: &ParsedFile, name: &str) -> Result<DomainType> {
    let Some(decl) = file.find_struct(name) else {
        let err = if file.other_types.iter().any(|t| t == name) {
            Error::NotAStruct {
                name: name.to_string(),
                path: file.path.clone(),
            }
        } else {
            Error::TypeNotFound {
                name: name.to_string(),
                path: file.path.clone(),
            }
        };
        return Err(Box::new(err));
    };

    let mut domain = DomainType::new(name, &file.path);
    domain.imports = file.imports.clone();

    for raw in &decl.fields {
        let ty = decode_type_expr(&raw.type_text);
        if ty.verbatim {
            warn!(
                domain_type = name,
                field = %raw.name,
                expr = %raw.type_text,
                "unsupported field type shape, values will be copied as-is"
            );
        }
        domain
            .fields
            .insert(raw.name.clone(), DomainField::new(&raw.name, ty));
    }

    for method in file.methods_of(name) {
        domain.methods.insert(method.name.clone());
        if method.is_getter_shaped() {
            domain.getters.push(Getter {
                receiver: method.receiver.clone(),
                name: method.name.clone(),
                result: decode_type_expr(&method.results[0]),
            });
        }
    }

    debug!(
        domain_type = name,
        fields = domain.fields.len(),
        getters = domain.getters.len(),
        "extracted domain type"
    );
    Ok(domain)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mapgen_ir::FieldType;
    use tempfile::TempDir;

    use super::*;

    const SOURCE: &str = r#"package restaurant

import uuid "github.com/satori/go.uuid"

type RestaurantThumbnail struct {
	thumbnailID  uuid.UUID
	thumbnailURL string
}

func (r RestaurantThumbnail) ThumbnailID() uuid.UUID {
	return r.thumbnailID
}

type Restaurant struct {
	restaurantID uuid.UUID
	phoneNumber  string
	thumbnails   []*RestaurantThumbnail
}

func (r Restaurant) PhoneNumber() string {
	return r.phoneNumber
}

func (r *Restaurant) Rename(name string) {}

type Status int
"#;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_fields_and_getters() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("restaurant.go");
        fs::write(&path, SOURCE).unwrap();

        let mut parser = GoParser::new().unwrap();
        let types =
            load_domain_types(&mut parser, &path, &names(&["Restaurant", "RestaurantThumbnail"]))
                .unwrap();

        assert_eq!(types.len(), 2);
        let restaurant = &types[0];
        assert_eq!(restaurant.name, "Restaurant");
        assert_eq!(restaurant.file, path);
        assert_eq!(
            restaurant.fields["thumbnails"].ty,
            FieldType::named("RestaurantThumbnail").pointer().slice()
        );
        assert_eq!(restaurant.getters.len(), 1);
        assert_eq!(restaurant.getters[0].name, "PhoneNumber");
        assert_eq!(restaurant.getters[0].result, FieldType::named("string"));
        assert!(restaurant.has_method("Rename"));
        assert!(restaurant.has_method("PhoneNumber"));
        assert_eq!(
            restaurant.imports.get("uuid").map(String::as_str),
            Some("github.com/satori/go.uuid")
        );

        let thumbnail = &types[1];
        assert_eq!(thumbnail.getters[0].receiver, "RestaurantThumbnail");
    }

    #[test]
    fn test_missing_type_is_error() {
        let file = GoParser::new()
            .unwrap()
            .parse(SOURCE, Path::new("restaurant.go"))
            .unwrap();

        let err = extract_domain_types(&file, &names(&["Menu"])).unwrap_err();
        assert!(matches!(*err, Error::TypeNotFound { ref name, .. } if name == "Menu"));

        let err = extract_domain_types(&file, &names(&["Status"])).unwrap_err();
        assert!(matches!(*err, Error::NotAStruct { .. }));
    }
}
