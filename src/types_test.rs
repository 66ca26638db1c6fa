#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// FrameBuffer
// =============================================================

#[test]
fn filled_buffer_has_every_pixel_set() {
    let fb = FrameBuffer::filled(4, 3, WHITE);
    assert_eq!(fb.pixels.len(), 12);
    assert!(fb.pixels.iter().all(|&p| p == WHITE));
}

#[test]
fn pixel_lookup_is_row_major_and_bounded() {
    let mut fb = FrameBuffer::filled(4, 3, 0);
    fb.pixels[2 * 4 + 1] = 0x00_12_34_56;
    assert_eq!(fb.pixel(1, 2), Some(0x00_12_34_56));
    assert_eq!(fb.pixel(4, 0), None);
    assert_eq!(fb.pixel(0, 3), None);
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn distance_is_euclidean() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn circle_radius_reaches_the_current_point() {
    assert_eq!(circle_radius(Point::new(100.0, 100.0), Point::new(150.0, 100.0)), 50.0);
}

#[test]
fn triangle_third_vertex_mirrors_across_start_x() {
    let [a, b, c] = triangle_vertices(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
    assert_eq!(a, Point::new(0.0, 0.0));
    assert_eq!(b, Point::new(10.0, 20.0));
    assert_eq!(c, Point::new(-10.0, 20.0));
}

#[test]
fn triangle_base_is_horizontal_at_current_y() {
    let [_, b, c] = triangle_vertices(Point::new(50.0, 40.0), Point::new(80.0, 90.0));
    assert_eq!(b.y, c.y);
    assert_eq!(c, Point::new(20.0, 90.0));
}

// =============================================================
// ShapeKind / Brush / Shape
// =============================================================

#[test]
fn only_circle_and_triangle_are_parametric() {
    assert!(!ShapeKind::Freehand.is_parametric());
    assert!(ShapeKind::Circle.is_parametric());
    assert!(ShapeKind::Triangle.is_parametric());
}

#[test]
fn default_brush_is_black_freehand() {
    let b = Brush::default();
    assert_eq!(b.color, "#000000");
    assert_eq!(b.width, 5.0);
    assert_eq!(b.opacity, 1.0);
    assert_eq!(b.kind, ShapeKind::Freehand);
}

#[test]
fn shape_reports_its_brush() {
    let shape = Shape {
        kind: ShapeKind::Circle,
        color: "#ff0000".into(),
        width: 3.0,
        opacity: 0.5,
        start: Point::new(1.0, 1.0),
        end: Point::new(2.0, 2.0),
        path: Vec::new(),
    };
    assert_eq!(
        shape.brush(),
        Brush { color: "#ff0000".into(), width: 3.0, opacity: 0.5, kind: ShapeKind::Circle }
    );
}
