use egui::{Pos2, pos2};
use raster_paint::primitive::geometry::{polygon_vertices, rectangle_vertices};
use raster_paint::PolygonSides;

#[test]
fn test_pentagon_fractions() {
    // dx = 100, dy = 50
    let points = polygon_vertices(PolygonSides::Pentagon, pos2(0.0, 0.0), pos2(100.0, 50.0));
    assert_eq!(
        points,
        vec![
            pos2(19.0, 0.0),
            pos2(0.0, 30.0),
            pos2(50.0, 50.0),
            pos2(100.0, 30.0),
            pos2(81.0, 0.0),
        ]
    );
}

#[test]
fn test_hexagon_fractions() {
    let points = polygon_vertices(PolygonSides::Hexagon, pos2(10.0, 20.0), pos2(50.0, 100.0));
    assert_eq!(
        points,
        vec![
            pos2(30.0, 20.0),
            pos2(10.0, 40.0),
            pos2(10.0, 80.0),
            pos2(30.0, 100.0),
            pos2(50.0, 80.0),
            pos2(50.0, 40.0),
        ]
    );
}

#[test]
fn test_octagon_fractions() {
    let points = polygon_vertices(PolygonSides::Octagon, pos2(0.0, 0.0), pos2(40.0, 20.0));
    assert_eq!(
        points,
        vec![
            pos2(10.0, 0.0),
            pos2(0.0, 5.0),
            pos2(0.0, 15.0),
            pos2(10.0, 20.0),
            pos2(30.0, 20.0),
            pos2(40.0, 15.0),
            pos2(40.0, 5.0),
            pos2(30.0, 0.0),
        ]
    );
}

#[test]
fn test_fractions_truncate_toward_zero() {
    // dx = 7: 0.19 * 7 = 1.33 -> 1, 0.81 * 7 = 5.67 -> 5; dy = 9: 0.61 * 9 = 5.49 -> 5
    let points = polygon_vertices(PolygonSides::Pentagon, pos2(0.0, 0.0), pos2(7.0, 9.0));
    assert_eq!(points[0], pos2(1.0, 0.0));
    assert_eq!(points[1], pos2(0.0, 5.0));
    assert_eq!(points[2], pos2(3.0, 9.0));
    assert_eq!(points[4], pos2(5.0, 0.0));
}

#[test]
fn test_rectangle_corners() {
    let points = rectangle_vertices(pos2(10.0, 10.0), pos2(50.0, 40.0));
    assert_eq!(
        points,
        vec![pos2(10.0, 10.0), pos2(50.0, 10.0), pos2(50.0, 40.0), pos2(10.0, 40.0)]
    );
}

#[test]
fn test_degenerate_drag_collapses_to_point() {
    for sides in [
        PolygonSides::Triangle,
        PolygonSides::Pentagon,
        PolygonSides::Hexagon,
        PolygonSides::Octagon,
    ] {
        let points = polygon_vertices(sides, pos2(5.0, 5.0), pos2(5.0, 5.0));
        assert!(points.iter().all(|p| *p == Pos2::new(5.0, 5.0)));
    }
}
