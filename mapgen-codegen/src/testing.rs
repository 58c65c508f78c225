//! Test utilities for mapgen backends.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use eyre::{Result, eyre};
use mapgen_ir::{
    DomainModel, DomainType, DtoType, FieldType, GenerationConfig, Getter, NamingTemplates,
    OutputTarget,
};
use mapgen_manifest::Manifest;

/// Import path of the UUID package used by the restaurant fixture.
pub const UUID_PATH: &str = "github.com/satori/go.uuid";

/// Go source of the restaurant fixture.
pub const RESTAURANT_GO: &str = r#"package restaurant

import (
	uuid "github.com/satori/go.uuid"
)

type RestaurantThumbnail struct {
	thumbnailID  uuid.UUID
	thumbnailURL string
	position     int
}

func (r RestaurantThumbnail) ThumbnailID() uuid.UUID {
	return r.thumbnailID
}

func (r RestaurantThumbnail) ThumbnailURL() string {
	return r.thumbnailURL
}

func (r RestaurantThumbnail) Position() int {
	return r.position
}

type Restaurant struct {
	restaurantID        uuid.UUID
	phoneNumber         string
	thumbnails          []*RestaurantThumbnail
	removedThumbnailIDs []uuid.UUID
}

func (r Restaurant) RestaurantID() uuid.UUID {
	return r.restaurantID
}

func (r Restaurant) PhoneNumber() string {
	return r.phoneNumber
}

func (r Restaurant) Thumbnails() []*RestaurantThumbnail {
	return r.thumbnails
}

func (r *Restaurant) ChangePhoneNumberTo(pn string) error {
	r.phoneNumber = pn
	return nil
}
"#;

/// Manifest of the restaurant fixture.
pub const RESTAURANT_TOML: &str = r#"dir = "domain"
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

[domain_dto_types.RestaurantThumbnail]
"#;

/// A throwaway project directory holding a manifest and Go sources.
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::TempDir::new()?,
        })
    }

    /// The restaurant project: `mapgen.toml` plus `domain/restaurant.go`.
    pub fn restaurant() -> Result<Self> {
        Self::new()?
            .file("mapgen.toml", RESTAURANT_TOML)?
            .file("domain/restaurant.go", RESTAURANT_GO)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn file(self, relative: impl AsRef<Path>, content: &str) -> Result<Self> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(self)
    }

    /// The fixture root, against which manifest paths resolve.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the fixture's `mapgen.toml`.
    pub fn manifest_path(&self) -> PathBuf {
        self.root().join("mapgen.toml")
    }

    /// Load and validate the fixture's `mapgen.toml`.
    pub fn manifest(&self) -> Result<Manifest> {
        Manifest::from_file(self.manifest_path()).map_err(|e| eyre::Report::new(*e))
    }
}

/// A config with the default naming templates and the given DTOs.
pub fn test_config(dtos: Vec<DtoType>) -> GenerationConfig {
    GenerationConfig {
        output: OutputTarget {
            dir: PathBuf::from("domain"),
            package: "restaurant".to_string(),
            filename: "restaurant_dto.go".to_string(),
        },
        imports: BTreeMap::from([("uuid".to_string(), UUID_PATH.to_string())]),
        domain_sources: BTreeMap::new(),
        dto_types: dtos.into_iter().map(|d| (d.name.clone(), d)).collect(),
        naming: NamingTemplates {
            dto_suffix: "Output".to_string(),
            map_from_func: "Map{domain_type}FromOutput".to_string(),
            map_to_func: "To{suffix}".to_string(),
        },
    }
}

/// A domain model holding `types`.
pub fn domain_model(types: Vec<DomainType>) -> DomainModel {
    DomainModel {
        types: types.into_iter().map(|t| (t.name.clone(), t)).collect(),
        import_aliases: BTreeMap::new(),
    }
}

/// The bound domain model of the restaurant fixture, as the bind phase
/// produces it.
pub fn restaurant_domain() -> DomainModel {
    let uuid = FieldType::qualified(UUID_PATH, "UUID");

    let mut thumbnail = DomainType::new("RestaurantThumbnail", "domain/restaurant.go")
        .field("thumbnailID", uuid.clone())
        .field("thumbnailURL", FieldType::named("string"))
        .field("position", FieldType::named("int"));
    bind_all(&mut thumbnail);

    let mut restaurant = DomainType::new("Restaurant", "domain/restaurant.go")
        .field("restaurantID", uuid.clone())
        .field("phoneNumber", FieldType::named("string"))
        .field(
            "thumbnails",
            FieldType::named("RestaurantThumbnail").pointer().slice(),
        )
        .field("removedThumbnailIDs", uuid.slice());
    bind_all(&mut restaurant);
    // removedThumbnailIDs has no getter
    if let Some(field) = restaurant.fields.get_mut("removedThumbnailIDs") {
        field.getter = None;
    }
    restaurant.methods.remove("RemovedThumbnailIDs");
    restaurant.methods.insert("ChangePhoneNumberTo".to_string());

    let mut model = domain_model(vec![restaurant, thumbnail]);
    model
        .import_aliases
        .insert(UUID_PATH.to_string(), "uuid".to_string());
    model
}

/// Give every field a getter named after it.
fn bind_all(ty: &mut DomainType) {
    let receiver = ty.name.clone();
    for field in ty.fields.values_mut() {
        let name = mapgen_core::upper_first(&field.name);
        ty.methods.insert(name.clone());
        field.getter = Some(Getter {
            receiver: receiver.clone(),
            name,
            result: field.ty.clone(),
        });
    }
}

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles/type-checks.
pub trait CompileChecker {
    /// Check that the code in the given directory compiles.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Go checker. Module requirements are resolved with `go mod tidy`, then
/// the fixture is built, or built and tested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GoChecker {
    /// `go build ./...`
    #[default]
    Build,
    /// `go test ./...`, running the fixture's own Go tests.
    Test,
}

impl GoChecker {
    fn subcommand(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Test => "test",
        }
    }
}

fn run_go(dir: &Path, args: &[&str]) -> Result<(), CompileError> {
    let output = Command::new("go")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| CompileError {
            message: format!("Failed to run go {}: {}", args.join(" "), e),
            output: String::new(),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        Err(CompileError {
            message: format!("go {} failed", args.join(" ")),
            output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
        })
    }
}

impl CompileChecker for GoChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        run_go(dir, &["mod", "tidy"])?;
        run_go(dir, &[self.subcommand(), "./..."])
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Run a generator inside a fixture and check that the result compiles.
pub fn assert_generates_valid_code<C>(
    fixture: &Fixture,
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    generate(fixture.root())?;

    checker.check(fixture.root()).map_err(|e| {
        eprintln!("Generated files in {}:", fixture.root().display());
        if let Ok(entries) = fs::read_dir(fixture.root()) {
            for entry in entries.flatten() {
                eprintln!("  {}", entry.path().display());
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}
