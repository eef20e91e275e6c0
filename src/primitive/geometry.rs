use egui::{Pos2, Rect, Vec2, pos2};

/// Number of sides of the polygon shapes offered by the toolbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonSides {
    Triangle,
    Pentagon,
    Hexagon,
    Octagon,
}

/// Integer view of the box spanned by a drag, with helpers matching the
/// truncating arithmetic the vertex tables are defined with.
struct DragBox {
    sx: i32,
    sy: i32,
    x: i32,
    y: i32,
}

impl DragBox {
    fn new(start: Pos2, end: Pos2) -> Self {
        Self {
            sx: start.x as i32,
            sy: start.y as i32,
            x: end.x as i32,
            y: end.y as i32,
        }
    }

    fn dx(&self) -> i32 {
        self.x - self.sx
    }

    fn dy(&self) -> i32 {
        self.y - self.sy
    }

    /// `sx + trunc(dx * frac)`
    fn at_x(&self, frac: f64) -> i32 {
        self.sx + (f64::from(self.dx()) * frac) as i32
    }

    /// `sy + trunc(dy * frac)`
    fn at_y(&self, frac: f64) -> i32 {
        self.sy + (f64::from(self.dy()) * frac) as i32
    }

    /// `sx + floor(dx / 2)`
    fn mid_x(&self) -> i32 {
        self.sx + self.dx().div_euclid(2)
    }
}

fn pt(x: i32, y: i32) -> Pos2 {
    pos2(x as f32, y as f32)
}

/// Vertices of a polygon shape drawn from `start` to `end`.
///
/// The offsets are fixed fractions of the drag box rather than a true regular
/// polygon, so the shapes stretch with the box the way classic raster editors
/// draw them.
pub fn polygon_vertices(sides: PolygonSides, start: Pos2, end: Pos2) -> Vec<Pos2> {
    let b = DragBox::new(start, end);
    match sides {
        PolygonSides::Triangle => vec![pt(b.sx, b.sy), pt(b.mid_x(), b.y), pt(b.x, b.sy)],
        PolygonSides::Pentagon => vec![
            pt(b.at_x(0.19), b.sy),
            pt(b.sx, b.at_y(0.61)),
            pt(b.mid_x(), b.y),
            pt(b.x, b.at_y(0.61)),
            pt(b.at_x(0.81), b.sy),
        ],
        PolygonSides::Hexagon => vec![
            pt(b.mid_x(), b.sy),
            pt(b.sx, b.at_y(0.25)),
            pt(b.sx, b.at_y(0.75)),
            pt(b.mid_x(), b.y),
            pt(b.x, b.at_y(0.75)),
            pt(b.x, b.at_y(0.25)),
        ],
        PolygonSides::Octagon => vec![
            pt(b.at_x(0.25), b.sy),
            pt(b.sx, b.at_y(0.25)),
            pt(b.sx, b.at_y(0.75)),
            pt(b.at_x(0.25), b.y),
            pt(b.at_x(0.75), b.y),
            pt(b.x, b.at_y(0.75)),
            pt(b.x, b.at_y(0.25)),
            pt(b.at_x(0.75), b.sy),
        ],
    }
}

/// Corners of the axis-aligned rectangle spanned by `start` and `end`
pub fn rectangle_vertices(start: Pos2, end: Pos2) -> Vec<Pos2> {
    vec![start, pos2(end.x, start.y), end, pos2(start.x, end.y)]
}

/// Closed polygon approximating the ellipse inscribed in `rect`
pub fn ellipse_vertices(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;

    // Roughly one vertex every four pixels of circumference.
    let circumference = std::f32::consts::PI * (radius.x + radius.y);
    let segments = ((circumference / 4.0).ceil() as usize).clamp(16, 256);

    (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            let (sin, cos) = angle.sin_cos();
            center + Vec2::new(radius.x * cos, radius.y * sin)
        })
        .collect()
}

/// Quad covering a segment of the given width with square caps
pub fn segment_quad(start: Pos2, end: Pos2, width: f32) -> [Pos2; 4] {
    let half = width / 2.0;
    let delta = end - start;
    let length = delta.length();
    let (dir, normal) = if length > f32::EPSILON {
        let dir = delta / length;
        (dir, Vec2::new(-dir.y, dir.x))
    } else {
        (Vec2::X, Vec2::Y)
    };
    let along = dir * half;
    let across = normal * half;
    [
        start - along - across,
        end + along - across,
        end + along + across,
        start - along + across,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_apex_follows_end_row() {
        let points = polygon_vertices(PolygonSides::Triangle, pos2(10.0, 10.0), pos2(31.0, 40.0));
        // floor(21 / 2) = 10
        assert_eq!(points, vec![pos2(10.0, 10.0), pos2(20.0, 40.0), pos2(31.0, 10.0)]);
    }

    #[test]
    fn test_mirrored_drag_uses_floor_and_trunc() {
        // Dragging up-left gives negative extents: halves floor, fractions truncate.
        let points = polygon_vertices(PolygonSides::Hexagon, pos2(10.0, 10.0), pos2(7.0, 2.0));
        // dx = -3 -> floor(-1.5) = -2 ; dy = -8 -> trunc(-2.0) = -2, trunc(-6.0) = -6
        assert_eq!(points[0], pos2(8.0, 10.0));
        assert_eq!(points[1], pos2(10.0, 8.0));
        assert_eq!(points[2], pos2(10.0, 4.0));
    }

    #[test]
    fn test_vertex_counts() {
        for (sides, count) in [
            (PolygonSides::Triangle, 3),
            (PolygonSides::Pentagon, 5),
            (PolygonSides::Hexagon, 6),
            (PolygonSides::Octagon, 8),
        ] {
            let points = polygon_vertices(sides, Pos2::ZERO, pos2(100.0, 100.0));
            assert_eq!(points.len(), count);
        }
    }

    #[test]
    fn test_ellipse_stays_in_box() {
        let points = ellipse_vertices(Rect::from_two_pos(pos2(50.0, 40.0), pos2(10.0, 10.0)));
        let bounds = Rect::from_points(&points);
        assert!(bounds.min.x >= 10.0 - 0.01 && bounds.max.x <= 50.0 + 0.01);
        assert!(bounds.min.y >= 10.0 - 0.01 && bounds.max.y <= 40.0 + 0.01);
        assert!(points.len() >= 16);
    }

    #[test]
    fn test_degenerate_segment_quad_is_square() {
        let quad = segment_quad(pos2(5.0, 5.0), pos2(5.0, 5.0), 4.0);
        let bounds = Rect::from_points(&quad);
        assert_eq!(bounds, Rect::from_min_max(pos2(3.0, 3.0), pos2(7.0, 7.0)));
    }
}
