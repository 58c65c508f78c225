//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "mapgen.toml")
    }
}

impl Manifest {
    /// Parse a mapgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a mapgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.require_non_empty("dto_suffix", &manifest.dto_suffix)?;
    ctx.require_non_empty("filename", &manifest.filename)?;
    ctx.require_non_empty("map_from_func", &manifest.map_from_func)?;
    ctx.require_non_empty("map_to_func", &manifest.map_to_func)?;
    ctx.validate_name(&manifest.package, "package")?;

    let imports = ctx.push("imports");
    for (alias, path) in &manifest.imports {
        imports.validate_name(alias, "import alias")?;
        imports.require_non_empty(alias, path)?;
    }

    let domain_types = ctx.push("domain_types");
    for (name, config) in &manifest.domain_types {
        domain_types.validate_name(name, "domain type")?;
        if config.file.as_os_str().is_empty() {
            return Err(domain_types
                .push(name)
                .error_at(name, format!("domain type '{name}' has an empty 'file'")));
        }
    }

    let dtos = ctx.push("domain_dto_types");
    for (name, dto) in &manifest.domain_dto_types {
        dtos.validate_name(name, "DTO type")?;
        dtos.push(name).validate_dto(name, dto)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESTAURANT: &str = r#"
        dir = "domain"
        package = "restaurant"
        filename = "restaurant_dto.go"
        dto_suffix = "Output"
        map_from_func = "Map{domain_type}FromOutput"
        map_to_func = "To{suffix}"

        [imports]
        uuid = "github.com/satori/go.uuid"

        [domain_types.Restaurant]
        file = "domain/restaurant.go"

        [domain_types.RestaurantThumbnail]
        file = "domain/restaurant.go"

        [domain_dto_types.Restaurant]
        is_aggregate_root = true
        ignore_domain_fields = ["removedThumbnailIDs"]

        [domain_dto_types.Restaurant.map_bindings]
        Phone = "Restaurant.phoneNumber"

        [domain_dto_types.RestaurantThumbnail]

        [domain_dto_types.Money.NewMoney]
        is_init_func = true
        param_mapping = ["amount", "currency"]
    "#;

    fn parse(content: &str) -> Result<Manifest> {
        content.parse()
    }

    fn with_base(extra: &str) -> String {
        format!(
            r#"
            dir = "."
            package = "restaurant"
            filename = "out.go"
            dto_suffix = "Output"
            map_from_func = "Map{{domain_type}}FromOutput"
            map_to_func = "To{{suffix}}"
            {extra}
            "#
        )
    }

    #[test]
    fn test_parse_full_manifest() {
        let manifest = parse(RESTAURANT).unwrap();

        assert_eq!(manifest.package, "restaurant");
        assert_eq!(manifest.dto_suffix, "Output");
        assert_eq!(manifest.domain_types.len(), 2);
        assert_eq!(
            manifest.imports.get("uuid").map(String::as_str),
            Some("github.com/satori/go.uuid")
        );

        let restaurant = &manifest.domain_dto_types["Restaurant"];
        assert!(restaurant.is_aggregate_root);
        assert!(restaurant.domain_mapping_enabled);
        assert_eq!(restaurant.ignore_domain_fields, ["removedThumbnailIDs"]);
        assert_eq!(
            restaurant.map_bindings.get("Phone").map(String::as_str),
            Some("Restaurant.phoneNumber")
        );
        assert!(restaurant.init_func().is_none());

        let thumbnail = &manifest.domain_dto_types["RestaurantThumbnail"];
        assert!(!thumbnail.is_aggregate_root);

        let money = manifest.domain_dto_types["Money"].init_func().unwrap();
        assert_eq!(money.name, "NewMoney");
        assert_eq!(money.params, ["amount", "currency"]);

        assert_eq!(manifest.aggregate_roots().collect::<Vec<_>>(), ["Restaurant"]);
    }

    #[test]
    fn test_missing_required_key_is_parse_error() {
        let result = parse(
            r#"
            dir = "."
            package = "restaurant"
            filename = "out.go"
            map_from_func = "Map{domain_type}FromOutput"
            map_to_func = "To{suffix}"
            "#,
        );
        let err = result.unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
        let Error::Parse { source, .. } = *err else {
            unreachable!()
        };
        assert!(source.message().contains("dto_suffix"));
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let content = with_base("").replace("dto_suffix = \"Output\"", "dto_suffix = \"\"");
        let err = parse(&content).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
        assert!(err.to_string().contains("dto_suffix"));
    }

    #[test]
    fn test_keyword_package_rejected() {
        let content = with_base("").replace("package = \"restaurant\"", "package = \"func\"");
        let err = parse(&content).unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { ref name, .. } if name == "func"));
    }

    #[test]
    fn test_domain_mapping_enabled_defaults_true_and_can_be_disabled() {
        let manifest = parse(&with_base(
            r#"
            [domain_dto_types.A]
            is_aggregate_root = true

            [domain_dto_types.B]
            is_aggregate_root = true
            domain_mapping_enabled = false
            "#,
        ))
        .unwrap();

        assert!(manifest.domain_dto_types["A"].domain_mapping_enabled);
        assert!(!manifest.domain_dto_types["B"].domain_mapping_enabled);
    }

    #[test]
    fn test_block_without_init_flag_is_ignored() {
        let manifest = parse(&with_base(
            r#"
            [domain_dto_types.Money.Helper]
            param_mapping = ["amount"]
            "#,
        ))
        .unwrap();

        assert!(manifest.domain_dto_types["Money"].init_func().is_none());
    }

    #[test]
    fn test_multiple_init_funcs_rejected() {
        let err = parse(&with_base(
            r#"
            [domain_dto_types.Money.NewMoney]
            is_init_func = true
            param_mapping = ["amount"]

            [domain_dto_types.Money.MakeMoney]
            is_init_func = true
            "#,
        ))
        .unwrap_err();

        assert!(matches!(*err, Error::MultipleInitFuncs { ref dto, .. } if dto == "Money"));
    }

    #[test]
    fn test_malformed_binding_rejected() {
        let err = parse(&with_base(
            r#"
            [domain_dto_types.Restaurant.map_bindings]
            Phone = "phoneNumber"
            "#,
        ))
        .unwrap_err();

        assert!(
            matches!(*err, Error::InvalidBinding { ref field, ref expr, .. } if field == "Phone" && expr == "phoneNumber")
        );
    }

    #[test]
    fn test_unknown_scalar_key_in_dto_rejected() {
        let err = parse(&with_base(
            r#"
            [domain_dto_types.Restaurant]
            is_agregate_root = true
            "#,
        ))
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let err = parse(&with_base("outdir = \"x\"")).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_ignore_field_name_rejected() {
        let err = parse(&with_base(
            r#"
            [domain_dto_types.Restaurant]
            ignore_domain_fields = ["phone-number"]
            "#,
        ))
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = Manifest::from_file("/nonexistent/mapgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
