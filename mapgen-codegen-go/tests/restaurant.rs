//! End-to-end generation for the restaurant project.

use mapgen_codegen::{
    language::LanguageCodegen,
    pipeline::Pipeline,
    testing::{Fixture, RESTAURANT_GO},
};
use mapgen_codegen_go::GoGenerator;

fn generator(fixture: &Fixture) -> GoGenerator {
    let mut ctx = Pipeline::new()
        .run(fixture.manifest().unwrap(), fixture.root())
        .unwrap();
    assert_eq!(ctx.warning_count(), 0, "{:?}", ctx.diagnostics);
    GoGenerator::from_context(&mut ctx).unwrap()
}

#[test]
fn test_restaurant_output() {
    let fixture = Fixture::restaurant().unwrap();
    let output = generator(&fixture).render().unwrap();

    insta::assert_snapshot!(output, @r#"
    // Code generated by mapgen. DO NOT EDIT.

    package restaurant

    import uuid "github.com/satori/go.uuid"

    type RestaurantOutput struct {
    	RestaurantID uuid.UUID
    	PhoneNumber  string
    	Thumbnails   []RestaurantThumbnailOutput
    }

    func (r *Restaurant) RemovedThumbnailIDs() []uuid.UUID {
    	return r.removedThumbnailIDs
    }

    func MapRestaurantFromOutput(output RestaurantOutput) *Restaurant {
    	thumbnails := make([]*RestaurantThumbnail, len(output.Thumbnails))
    	for i := 0; i < len(output.Thumbnails); i++ {
    		thumbnails[i] = &RestaurantThumbnail{
    			thumbnailID:  output.Thumbnails[i].ThumbnailID,
    			thumbnailURL: output.Thumbnails[i].ThumbnailURL,
    			position:     output.Thumbnails[i].Position,
    		}
    	}
    	r := &Restaurant{
    		restaurantID: output.RestaurantID,
    		phoneNumber:  output.PhoneNumber,
    		thumbnails:   thumbnails,
    	}
    	return r
    }

    func (r *Restaurant) ToOutput() RestaurantOutput {
    	thumbnails := make([]RestaurantThumbnailOutput, len(r.thumbnails))
    	for i := 0; i < len(r.thumbnails); i++ {
    		if r.thumbnails[i] != nil {
    			thumbnails[i] = RestaurantThumbnailOutput{
    				ThumbnailID:  r.thumbnails[i].thumbnailID,
    				ThumbnailURL: r.thumbnails[i].thumbnailURL,
    				Position:     r.thumbnails[i].position,
    			}
    		}
    	}
    	ro := RestaurantOutput{
    		RestaurantID: r.restaurantID,
    		PhoneNumber:  r.phoneNumber,
    		Thumbnails:   thumbnails,
    	}
    	return ro
    }

    type RestaurantThumbnailOutput struct {
    	ThumbnailID  uuid.UUID
    	ThumbnailURL string
    	Position     int
    }
    "#);
}

#[test]
fn test_generate_writes_next_to_domain_sources() {
    let fixture = Fixture::restaurant().unwrap();
    let generator = generator(&fixture);

    let result = generator.generate(fixture.root()).unwrap();
    let path = fixture.root().join("domain").join("restaurant_dto.go");
    assert_eq!(result.written, [path.clone()]);

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, generator.render().unwrap());

    // the domain source is left alone
    let source = std::fs::read_to_string(fixture.root().join("domain/restaurant.go")).unwrap();
    assert_eq!(source, RESTAURANT_GO);
}

#[test]
fn test_ignored_field_excluded_from_dto() {
    let fixture = Fixture::restaurant().unwrap();
    let generator = generator(&fixture);

    let restaurant = generator.schema().get("Restaurant").unwrap();
    assert!(restaurant.get_field("RemovedThumbnailIDs").is_none());

    let output = generator.render().unwrap();
    assert!(!output.contains("RemovedThumbnailIDs:"));
    assert!(!output.contains("removedThumbnailIDs:"));
}

#[test]
fn test_renamed_binding() {
    let manifest = mapgen_codegen::testing::RESTAURANT_TOML.replace(
        "[domain_dto_types.RestaurantThumbnail]",
        "[domain_dto_types.Restaurant.map_bindings]\n\
         Phone = \"Restaurant.phoneNumber\"\n\n\
         [domain_dto_types.RestaurantThumbnail]",
    );
    let fixture = Fixture::restaurant()
        .unwrap()
        .file("mapgen.toml", &manifest)
        .unwrap();
    let output = generator(&fixture).render().unwrap();

    assert!(output.contains("\tPhone        string\n"));
    assert!(output.contains("\t\tphoneNumber:  output.Phone,\n"));
    assert!(output.contains("\t\tPhone:        r.phoneNumber,\n"));
}
