use shapelab_core::{Color, Point};
use shapelab_designer::canvas::{Canvas, DrawingMode, ToolSettings};
use shapelab_designer::model::ShapeType;

#[test]
fn test_canvas_add_shapes() {
    let mut canvas = Canvas::new();
    let circle_id = canvas
        .add_circle(Point::new(20.0, 20.0), 5.0, Color::WHITE, true)
        .unwrap();
    let line_id = canvas.add_line(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Color::RED,
        false,
    );

    assert_eq!(canvas.shape_count(), 2);
    assert_eq!(circle_id.shape_type, ShapeType::Circle);
    assert_eq!(line_id.shape_type, ShapeType::Line);
    assert!(canvas.get(circle_id).is_some());
    assert!(canvas.get(line_id).is_some());
}

#[test]
fn test_ids_increase_per_variant_type() {
    let mut canvas = Canvas::new();
    let c1 = canvas
        .add_circle(Point::ORIGIN, 1.0, Color::WHITE, true)
        .unwrap();
    let c2 = canvas
        .add_circle(Point::ORIGIN, 2.0, Color::WHITE, true)
        .unwrap();
    let t1 = canvas.add_triangle(
        Point::ORIGIN,
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Color::WHITE,
        true,
    );

    // Each variant draws from its own counter; ids are never reused.
    assert!(c2.index > c1.index);
    assert_eq!(t1.shape_type, ShapeType::Triangle);
}

#[test]
fn test_remove_shape() {
    let mut canvas = Canvas::new();
    let id = canvas.add_line(
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Color::WHITE,
        false,
    );
    let removed = canvas.remove_shape(id).unwrap();
    assert_eq!(removed.id(), id);
    assert_eq!(canvas.shape_count(), 0);
    assert!(canvas.remove_shape(id).is_none());
}

#[test]
fn test_canvas_clear() {
    let mut canvas = Canvas::new();
    canvas
        .add_circle(Point::ORIGIN, 1.0, Color::WHITE, true)
        .unwrap();
    canvas.clear();
    assert_eq!(canvas.shape_count(), 0);
    assert!(canvas.pending_points().is_empty());
}

#[test]
fn test_place_point_circle_completes_on_first_click() {
    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Circle);
    let settings = ToolSettings {
        radius: 10.0,
        ..ToolSettings::default()
    };
    let id = canvas
        .place_point(Point::new(5.0, 5.0), &settings)
        .unwrap()
        .expect("circle needs one click");
    assert_eq!(id.shape_type, ShapeType::Circle);
    assert_eq!(canvas.shape_count(), 1);
    assert!(canvas.pending_points().is_empty());
}

#[test]
fn test_place_point_triangle_accumulates_three_clicks() {
    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Triangle);
    let settings = ToolSettings::default();

    assert!(canvas
        .place_point(Point::new(0.0, 0.0), &settings)
        .unwrap()
        .is_none());
    assert!(canvas
        .place_point(Point::new(4.0, 0.0), &settings)
        .unwrap()
        .is_none());
    assert_eq!(canvas.pending_points().len(), 2);

    let id = canvas
        .place_point(Point::new(0.0, 4.0), &settings)
        .unwrap()
        .expect("third click completes the triangle");
    assert_eq!(id.shape_type, ShapeType::Triangle);
    assert!(canvas.pending_points().is_empty());
}

#[test]
fn test_mode_change_discards_pending_clicks() {
    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Line);
    canvas
        .place_point(Point::new(0.0, 0.0), &ToolSettings::default())
        .unwrap();
    assert_eq!(canvas.pending_points().len(), 1);

    canvas.set_mode(DrawingMode::Triangle);
    assert!(canvas.pending_points().is_empty());
}

#[test]
fn test_place_point_rejects_non_finite_click() {
    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Line);
    let settings = ToolSettings::default();
    canvas.place_point(Point::new(1.0, 1.0), &settings).unwrap();

    assert!(canvas
        .place_point(Point::new(f64::NAN, 0.0), &settings)
        .is_err());
    // The bad click is dropped; the good one is still pending.
    assert_eq!(canvas.pending_points().len(), 1);
    assert_eq!(canvas.shape_count(), 0);
}

#[test]
fn test_place_point_bad_radius_keeps_click_count() {
    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Circle);
    let settings = ToolSettings {
        radius: -4.0,
        ..ToolSettings::default()
    };
    assert!(canvas.place_point(Point::new(1.0, 1.0), &settings).is_err());
    assert_eq!(canvas.shape_count(), 0);
}

#[test]
fn test_scene_labels_in_insertion_order() {
    let mut canvas = Canvas::new();
    let c = canvas
        .add_circle(Point::ORIGIN, 1.0, Color::WHITE, true)
        .unwrap();
    let l = canvas.add_line(Point::ORIGIN, Point::new(1.0, 0.0), Color::WHITE, false);

    let labels = canvas.scene_labels();
    assert_eq!(labels, vec![c.to_string(), l.to_string()]);
    assert!(labels[0].starts_with("circle-"));
    assert!(labels[1].starts_with("line-"));
}
