use shapelab_core::{Color, Point};
use shapelab_designer::canvas::Canvas;
use shapelab_designer::serialization::{from_json, load_design, save_design, to_json};

fn sample_canvas() -> Canvas {
    let mut canvas = Canvas::new();
    let circle_id = canvas
        .add_circle(Point::new(10.0, 10.0), 4.0, Color::CYAN, true)
        .unwrap();
    canvas.add_line(
        Point::new(0.0, 0.0),
        Point::new(4.0, 2.0),
        Color::RED,
        false,
    );
    canvas.add_triangle(
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(0.0, 3.0),
        Color::WHITE,
        true,
    );
    let obj = canvas.get_mut(circle_id).unwrap();
    obj.set_translation(5.0, -2.0).unwrap();
    obj.set_rotation_degrees(45.0).unwrap();
    obj.set_rotate_around_centroid(true);
    canvas
}

#[test]
fn test_json_round_trip_preserves_state() {
    let canvas = sample_canvas();
    let json = to_json(&canvas).unwrap();
    let loaded = from_json(&json).unwrap();

    assert_eq!(loaded.shape_count(), canvas.shape_count());
    for (orig, back) in canvas.shapes().zip(loaded.shapes()) {
        assert_eq!(back.id(), orig.id());
        assert_eq!(back.shape(), orig.shape());
        assert_eq!(back.color(), orig.color());
        assert_eq!(back.filled(), orig.filled());
        assert_eq!(back.params(), orig.params());
        // Derived state is rebuilt, not stored: it must still match.
        assert!(back.matrix().approx_eq(orig.matrix(), 1e-12));
        assert_eq!(back.vertices(), orig.vertices());
    }
}

#[test]
fn test_save_and_load_design_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.shapelab.json");

    let canvas = sample_canvas();
    save_design(&canvas, &path).unwrap();
    let loaded = load_design(&path).unwrap();

    assert_eq!(loaded.shape_count(), canvas.shape_count());
    assert_eq!(loaded.scene_labels(), canvas.scene_labels());
}

#[test]
fn test_load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_design(&dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read design file"));
}

#[test]
fn test_load_rejects_malformed_geometry() {
    // A circle with a negative radius must fail fast on load rather
    // than entering the transform pipeline.
    let json = r#"{
        "version": "1.0",
        "shapes": [{
            "id": { "shape_type": "Circle", "index": 1 },
            "shape": { "Circle": { "center": { "x": 0.0, "y": 0.0, "z": 0.0 }, "radius": -2.0 } },
            "color": { "r": 1.0, "g": 1.0, "b": 1.0 },
            "filled": true
        }]
    }"#;
    let err = from_json(json).unwrap_err();
    assert!(err.to_string().contains("invalid geometry"));
}

#[test]
fn test_load_rejects_degenerate_slice_count() {
    // The builder clamps slice counts to at least 3; a design file must
    // not be able to smuggle a smaller value past validation and load a
    // circle with an empty vertex cache.
    let json = r#"{
        "version": "1.0",
        "shapes": [{
            "id": { "shape_type": "Circle", "index": 1 },
            "shape": { "Circle": { "center": { "x": 0.0, "y": 0.0, "z": 0.0 }, "radius": 2.0, "slices": 0 } },
            "color": { "r": 1.0, "g": 1.0, "b": 1.0 },
            "filled": true
        }]
    }"#;
    let err = from_json(json).unwrap_err();
    assert!(err.to_string().contains("invalid geometry"));
}

#[test]
fn test_load_rejects_garbage() {
    assert!(from_json("not json at all").is_err());
}

#[test]
fn test_ids_stay_unique_after_load() {
    let canvas = sample_canvas();
    let json = to_json(&canvas).unwrap();
    let mut loaded = from_json(&json).unwrap();

    let max_circle_index = loaded
        .shapes()
        .filter(|o| o.id().shape_type == shapelab_designer::model::ShapeType::Circle)
        .map(|o| o.id().index)
        .max()
        .unwrap();

    let fresh = loaded
        .add_circle(Point::ORIGIN, 1.0, Color::WHITE, true)
        .unwrap();
    assert!(fresh.index > max_circle_index);
}
