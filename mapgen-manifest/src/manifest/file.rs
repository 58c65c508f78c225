use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a mapgen.toml file with both raw content and parsed manifest.
pub struct MapgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl MapgenToml {
    /// Open and parse a mapgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory relative paths in the manifest are resolved against.
    pub fn root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Consume the file, keeping only the parsed manifest.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_resolves_root() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mapgen.toml");
        fs::write(
            &path,
            r#"
            dir = "out"
            package = "shop"
            filename = "dto.go"
            dto_suffix = "DTO"
            map_from_func = "{domain_type}FromDTO"
            map_to_func = "To{suffix}"
            "#,
        )
        .unwrap();

        let file = MapgenToml::open(&path).unwrap();

        assert_eq!(file.root(), temp.path());
        assert_eq!(file.manifest().package, "shop");
        assert!(file.content().contains("dto_suffix"));
        assert_eq!(file.path(), path);
    }

    #[test]
    fn test_root_of_bare_filename_is_cwd() {
        let file = MapgenToml {
            path: PathBuf::from("mapgen.toml"),
            content: String::new(),
            manifest: r#"
                dir = "."
                package = "p"
                filename = "f.go"
                dto_suffix = "Output"
                map_from_func = "M"
                map_to_func = "T"
            "#
            .parse()
            .unwrap(),
        };
        assert_eq!(file.root(), Path::new("."));
    }
}
