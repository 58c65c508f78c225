//! Checks that generated Go code compiles and maps values back unchanged.
//!
//! These need a Go toolchain and module access, so they are ignored by
//! default. Run with `cargo test -- --ignored`.

use std::path::Path;

use mapgen_codegen::{
    language::LanguageCodegen,
    pipeline::Pipeline,
    testing::{Fixture, GoChecker, assert_generates_valid_code},
};
use mapgen_codegen_go::GoGenerator;

const GO_MOD: &str = "module example.com/restaurant

go 1.21

require github.com/satori/go.uuid v1.2.0
";

const MENU_TOML: &str = r#"dir = "menu"
package = "menu"
filename = "menu_dto.go"
dto_suffix = "Output"
map_from_func = "Map{domain_type}FromOutput"
map_to_func = "To{suffix}"

[domain_types.Menu]
file = "menu/menu.go"

[domain_types.Section]
file = "menu/menu.go"

[domain_types.Dish]
file = "menu/menu.go"

[domain_dto_types.Menu]
is_aggregate_root = true

[domain_dto_types.Section]

[domain_dto_types.Dish]
"#;

const MENU_GO: &str = r#"package menu

type Dish struct {
	name  string
	price int
}

type Section struct {
	title  string
	dishes []*Dish
}

type Menu struct {
	sections []Section
	featured map[string][]*Dish
	special  *Dish
	tags     map[string]int
}
"#;

const RESTAURANT_ROUND_TRIP_GO: &str = r#"package restaurant

import (
	"reflect"
	"testing"

	uuid "github.com/satori/go.uuid"
)

func TestRestaurantRoundTrip(t *testing.T) {
	r := &Restaurant{
		restaurantID: uuid.FromStringOrNil("6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
		phoneNumber:  "555-0100",
		thumbnails: []*RestaurantThumbnail{
			{thumbnailID: uuid.FromStringOrNil("6ba7b811-9dad-11d1-80b4-00c04fd430c8"), thumbnailURL: "front.png", position: 1},
			{thumbnailID: uuid.FromStringOrNil("6ba7b812-9dad-11d1-80b4-00c04fd430c8"), thumbnailURL: "patio.png", position: 2},
		},
	}

	got := MapRestaurantFromOutput(r.ToOutput())
	if !reflect.DeepEqual(got, r) {
		t.Fatalf("round trip changed the restaurant:\n got %+v\nwant %+v", got, r)
	}
}
"#;

const MENU_ROUND_TRIP_GO: &str = r#"package menu

import (
	"reflect"
	"testing"
)

func TestMenuRoundTrip(t *testing.T) {
	soup := &Dish{name: "soup", price: 4}
	m := &Menu{
		sections: []Section{
			{title: "starters", dishes: []*Dish{soup, {name: "bread", price: 2}}},
			{title: "mains", dishes: []*Dish{{name: "stew", price: 11}}},
		},
		featured: map[string][]*Dish{
			"today": {soup},
			"chef":  {{name: "tart", price: 6}, {name: "stew", price: 11}},
		},
		special: &Dish{name: "pie", price: 7},
		tags:    map[string]int{"vegan": 2},
	}

	out := m.ToOutput()
	got := MapMenuFromOutput(out)
	if !reflect.DeepEqual(got, m) {
		t.Fatalf("round trip changed the menu:\n got %+v\nwant %+v", got, m)
	}

	out.Tags["vegan"] = 3
	if m.tags["vegan"] != 2 {
		t.Fatalf("DTO shares its tags map with the domain value")
	}
}
"#;

fn generate(fixture: &Fixture, root: &Path) -> eyre::Result<()> {
    let manifest = fixture.manifest()?;
    let mut ctx = Pipeline::new().run(manifest, root)?;
    GoGenerator::from_context(&mut ctx)?.generate(root)?;
    Ok(())
}

fn menu_fixture() -> Fixture {
    Fixture::new()
        .unwrap()
        .file("go.mod", "module example.com/menu\n\ngo 1.21\n")
        .unwrap()
        .file("mapgen.toml", MENU_TOML)
        .unwrap()
        .file("menu/menu.go", MENU_GO)
        .unwrap()
}

#[test]
#[ignore = "requires the go toolchain"]
fn test_restaurant_compiles() {
    let fixture = Fixture::restaurant()
        .unwrap()
        .file("go.mod", GO_MOD)
        .unwrap();

    assert_generates_valid_code(&fixture, |root| generate(&fixture, root), &GoChecker::Build)
        .unwrap();
}

#[test]
#[ignore = "requires the go toolchain"]
fn test_nested_collections_compile() {
    let fixture = menu_fixture();

    assert_generates_valid_code(&fixture, |root| generate(&fixture, root), &GoChecker::Build)
        .unwrap();
}

#[test]
#[ignore = "requires the go toolchain"]
fn test_restaurant_round_trips() {
    let fixture = Fixture::restaurant()
        .unwrap()
        .file("go.mod", GO_MOD)
        .unwrap()
        .file("domain/restaurant_roundtrip_test.go", RESTAURANT_ROUND_TRIP_GO)
        .unwrap();

    assert_generates_valid_code(&fixture, |root| generate(&fixture, root), &GoChecker::Test)
        .unwrap();
}

#[test]
#[ignore = "requires the go toolchain"]
fn test_nested_collections_round_trip() {
    let fixture = menu_fixture().file("menu/menu_roundtrip_test.go", MENU_ROUND_TRIP_GO).unwrap();

    assert_generates_valid_code(&fixture, |root| generate(&fixture, root), &GoChecker::Test)
        .unwrap();
}
