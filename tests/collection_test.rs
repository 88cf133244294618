//! End-to-end tests of the shape collection: positional access,
//! ownership-moving removal, sentinels, and bulk transforms.

use planar::{Circle, Point, Rectangle, Shape, ShapeCollection, Square, Triangle};

fn populated() -> ShapeCollection {
    let mut collection = ShapeCollection::new();
    collection.add(Shape::from(Rectangle::new(
        Point::from_coords(1.0, 1.0),
        3.0,
        4.0,
    )));
    collection.add(Shape::from(Square::new(Point::from_coords(2.0, 2.0), 5.0)));
    collection.add(Shape::from(Circle::new(Point::from_coords(3.0, 3.0), 2.0)));
    collection.add(Shape::from(Triangle::new(
        Point::from_coords(0.0, 0.0),
        Point::from_coords(4.0, 0.0),
        Point::from_coords(0.0, 3.0),
    )));
    collection
}

#[test]
fn test_positions_follow_insertion_order() {
    let collection = populated();
    assert_eq!(collection.len(), 4);
    for pos in 1..=4 {
        assert!(collection.get(pos).is_some(), "position {} should exist", pos);
    }
    assert!(matches!(collection.get(1), Some(Shape::Rectangle(_))));
    assert!(matches!(collection.get(4), Some(Shape::Triangle(_))));
    // 0 and len+1 are out of range
    assert!(collection.get(0).is_none());
    assert!(collection.get(5).is_none());
}

#[test]
fn test_remove_transfers_ownership_and_shifts() {
    let mut collection = populated();

    let removed = collection.remove(2).expect("position 2 should exist");
    // the caller now owns the removed shape and can keep using it
    assert_eq!(removed.area(), 25.0);

    assert_eq!(collection.len(), 3);
    // everything after position 2 shifted down by one
    assert!(matches!(collection.get(2), Some(Shape::Circle(_))));
    assert!(matches!(collection.get(3), Some(Shape::Triangle(_))));
    assert!(collection.get(4).is_none());
}

#[test]
fn test_remove_then_get_same_position() {
    let mut collection = populated();
    collection.remove(4);
    assert!(collection.get(4).is_none());
    collection.remove(1);
    collection.remove(1);
    collection.remove(1);
    assert!(collection.is_empty());
    assert!(collection.remove(1).is_none());
}

#[test]
fn test_area_perimeter_sentinel_out_of_range() {
    let collection = populated();
    for pos in [0, 5, 100] {
        assert_eq!(collection.area(pos), -1.0);
        assert_eq!(collection.perimeter(pos), -1.0);
    }
    // in-range values come straight from the shapes
    assert_eq!(collection.area(1), 12.0);
    assert_eq!(collection.perimeter(2), 20.0);
}

#[test]
fn test_translate_all_round_trip() {
    let mut collection = populated();
    let before: Vec<Point> = collection.iter().map(Shape::reference_point).collect();

    collection.translate_all(10.0, -5.0);
    collection.translate_all(-10.0, 5.0);

    for (shape, original) in collection.iter().zip(&before) {
        assert!(
            shape.reference_point().is_equal(original, 1e-9),
            "reference point should be restored for {}",
            shape
        );
    }
}

#[test]
fn test_scale_all_round_trip() {
    let mut collection = populated();
    let before: Vec<f64> = collection.iter().map(Shape::area).collect();

    collection.scale_all(3.0, true);
    collection.scale_all(3.0, false);

    for (shape, original) in collection.iter().zip(&before) {
        assert!(
            (shape.area() - original).abs() < 1e-9,
            "area should be restored for {}",
            shape
        );
    }
}

#[test]
fn test_scale_all_changes_dimensions_not_positions() {
    let mut collection = populated();
    collection.scale_all(2.0, true);

    // rectangle/square/circle positions are untouched by scaling
    assert_eq!(
        collection.get(1).unwrap().reference_point().coords(),
        (1.0, 1.0)
    );
    // areas grew by factor^2
    assert_eq!(collection.area(1), 48.0);
    assert_eq!(collection.area(2), 100.0);
}

#[test]
fn test_describe_all_listing() {
    let collection = populated();
    let listing = collection.describe_all();
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Shape 1: Rectangle:"));
    assert!(lines[1].starts_with("Shape 2: Square:"));
    assert!(lines[2].starts_with("Shape 3: Circle:"));
    assert!(lines[3].starts_with("Shape 4: Triangle:"));
    assert!(lines[0].contains("Area = 12"));
    assert!(lines[1].contains("Perimeter = 20"));
}

#[test]
fn test_describe_all_empty_collection() {
    assert_eq!(ShapeCollection::new().describe_all(), "");
}
