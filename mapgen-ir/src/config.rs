//! Generation configuration handed to the pipeline.

use std::{collections::BTreeMap, path::PathBuf};

use serde::Serialize;

use crate::DtoType;

/// Where the generated file goes.
#[derive(Debug, Clone, Serialize)]
pub struct OutputTarget {
    /// Output directory.
    pub dir: PathBuf,
    /// Go package clause of the generated file.
    pub package: String,
    pub filename: String,
}

impl OutputTarget {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }
}

/// Naming templates for generated identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct NamingTemplates {
    pub dto_suffix: String,
    /// Contains the `{domain_type}` placeholder.
    pub map_from_func: String,
    /// Contains the `{suffix}` placeholder.
    pub map_to_func: String,
}

/// Fully resolved input of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub output: OutputTarget,
    /// Package alias → canonical import path.
    pub imports: BTreeMap<String, String>,
    /// Domain type name → source file.
    pub domain_sources: BTreeMap<String, PathBuf>,
    /// DTO declarations keyed by backing domain type name.
    pub dto_types: BTreeMap<String, DtoType>,
    pub naming: NamingTemplates,
}

impl GenerationConfig {
    /// Requested type names grouped by source file, so each file is read once.
    pub fn sources_by_file(&self) -> BTreeMap<PathBuf, Vec<String>> {
        let mut grouped: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();
        for (name, file) in &self.domain_sources {
            grouped.entry(file.clone()).or_default().push(name.clone());
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_grouped_by_file() {
        let config = GenerationConfig {
            output: OutputTarget {
                dir: PathBuf::from("out"),
                package: "restaurant".to_string(),
                filename: "dto.go".to_string(),
            },
            imports: BTreeMap::new(),
            domain_sources: BTreeMap::from([
                ("Restaurant".to_string(), PathBuf::from("restaurant.go")),
                ("RestaurantThumbnail".to_string(), PathBuf::from("restaurant.go")),
                ("Owner".to_string(), PathBuf::from("owner.go")),
            ]),
            dto_types: BTreeMap::new(),
            naming: NamingTemplates {
                dto_suffix: "Output".to_string(),
                map_from_func: "Map{domain_type}FromOutput".to_string(),
                map_to_func: "To{suffix}".to_string(),
            },
        };

        let grouped = config.sources_by_file();
        assert_eq!(grouped.len(), 2);
        assert_eq!(
            grouped[&PathBuf::from("restaurant.go")],
            ["Restaurant", "RestaurantThumbnail"]
        );
        assert_eq!(config.output.path(), PathBuf::from("out").join("dto.go"));
    }
}
