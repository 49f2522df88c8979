//! Vertex math: the regular-polygon walker and the hand-built polygons

use std::f64::consts::{PI, SQRT_2};

use crate::types::{Point, Size};

use super::defaults;

/// Vertices of a regular polygon, walking outward from `first`.
///
/// The walk starts at the interior angle and turns by the exterior angle after
/// each side. Every vertex after the first is truncated toward zero before the
/// next step, so rounding error accumulates; drawn output depends on it.
///
/// # Panics
///
/// If `sides < 3`. No grammar asks for fewer, so this is a programming error.
pub fn regular_polygon(sides: usize, side_length: u32, first: Point) -> Vec<Point> {
    assert!(sides >= 3, "polygons can't have less than 3 sides, got {sides}");

    let n = sides as f64;
    let len = f64::from(side_length);
    let step = 360.0 / n;
    let mut deg = 180.0 * (n - 2.0) / n;

    let mut vertices = Vec::with_capacity(sides);
    vertices.push(first);

    let mut prev = first;
    for _ in 1..sides {
        let rad = deg * (PI / 180.0);
        let x = f64::from(prev.x) - rad.cos() * len;
        let y = f64::from(prev.y) - rad.sin() * len;
        prev = Point::new(x.trunc() as f32, y.trunc() as f32);
        vertices.push(prev);
        deg -= step;
    }

    vertices
}

/// Regular octagon with `length` as its circumradius, centered on the canvas.
pub fn octagon(canvas: Size, length: u32) -> Vec<Point> {
    let c = canvas.center();
    let l = length as f32;
    let r2 = (f64::from(length) / SQRT_2) as f32;

    vec![
        Point::new(c.x, c.y - l),
        Point::new(c.x + r2, c.y - r2),
        Point::new(c.x + l, c.y),
        Point::new(c.x + r2, c.y + r2),
        Point::new(c.x, c.y + l),
        Point::new(c.x - r2, c.y + r2),
        Point::new(c.x - l, c.y),
        Point::new(c.x - r2, c.y - r2),
    ]
}

/// Equilateral triangle inscribed in a circle of radius `length` about the
/// canvas center.
pub fn equilateral_triangle(canvas: Size, length: u32) -> Vec<Point> {
    let c = canvas.center();
    let l = length as f32;

    (0..3_i32)
        .map(|i| {
            let angle = defaults::TRIANGLE_START_ANGLE + f64::from(i) * 2.0 * PI / 3.0;
            Point::new(c.x + l * angle.cos() as f32, c.y + l * angle.sin() as f32)
        })
        .collect()
}

/// Isosceles triangle with its apex centered on the top edge.
pub fn isosceles_triangle(width: u32, height: u32) -> Vec<Point> {
    vec![
        Point::new((width / 2) as f32, 0.0),
        Point::new(0.0, height as f32),
        Point::new(width as f32, height as f32),
    ]
}

/// Parallelogram whose top edge is the middle third of the bottom edge.
pub fn parallelogram(width: u32, height: u32) -> Vec<Point> {
    let third = width / 3;
    vec![
        Point::new(third as f32, 0.0),
        Point::new(0.0, height as f32),
        Point::new(width as f32, height as f32),
        Point::new((third * 2) as f32, 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt_points(points: &[Point]) -> String {
        points
            .iter()
            .map(|p| format!("({}, {})", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn first_vertex_is_kept() {
        for sides in 3..=12 {
            for length in [1, 7, 100, 333] {
                let first = Point::new(12.5, 40.25);
                let v = regular_polygon(sides, length, first);
                assert_eq!(v.len(), sides);
                assert_eq!(v[0], first);
            }
        }
    }

    #[test]
    #[should_panic(expected = "less than 3 sides")]
    fn two_sides_is_a_bug() {
        regular_polygon(2, 10, Point::ZERO);
    }

    #[test]
    fn triangle_walk_truncates_toward_zero() {
        // raw second vertex is (-5.000000000000001, -8.66...)
        let v = regular_polygon(3, 10, Point::ZERO);
        insta::assert_snapshot!(fmt_points(&v), @"(0, 0) (-5, -8) (-10, 0)");
    }

    #[test]
    fn pentagon_vertices() {
        let v = regular_polygon(5, 200, Point::new(300.0, 360.0));
        insta::assert_snapshot!(fmt_points(&v), @"(300, 360) (361, 169) (199, 51) (37, 168) (98, 358)");
    }

    #[test]
    fn heptagon_vertices() {
        let v = regular_polygon(7, 100, Point::new(200.0, 280.0));
        insta::assert_snapshot!(
            fmt_points(&v),
            @"(200, 280) (262, 201) (239, 103) (148, 59) (57, 102) (34, 199) (96, 277)"
        );
    }

    #[test]
    fn octagon_points() {
        let v = octagon(Size::new(401, 401), 200);
        assert_eq!(v.len(), 8);
        assert_eq!(v[0], Point::new(200.0, 0.0));
        assert_eq!(v[2], Point::new(400.0, 200.0));
        assert_eq!(v[4], Point::new(200.0, 400.0));
        assert_eq!(v[6], Point::new(0.0, 200.0));
        assert!((v[1].x - 341.42136).abs() < 1e-3);
        assert!((v[1].y - 58.57864).abs() < 1e-3);
    }

    #[test]
    fn equilateral_points() {
        let v = equilateral_triangle(Size::new(401, 401), 200);
        let expected = [(373.06479, 300.24261), (26.65497, 299.75720), (200.28024, 0.00018)];
        for (p, (x, y)) in v.iter().zip(expected) {
            assert!((p.x - x).abs() < 1e-3, "{p:?}");
            assert!((p.y - y).abs() < 1e-3, "{p:?}");
        }
        // every vertex sits on the circle around the center
        let center = Point::new(200.0, 200.0);
        for p in &v {
            assert!((p.distance(center) - 200.0).abs() < 1e-2);
        }
    }

    #[test]
    fn parallelogram_uses_integer_thirds() {
        let v = parallelogram(200, 100);
        insta::assert_snapshot!(fmt_points(&v), @"(66, 0) (0, 100) (200, 100) (132, 0)");
    }

    #[test]
    fn isosceles_apex() {
        let v = isosceles_triangle(101, 200);
        insta::assert_snapshot!(fmt_points(&v), @"(50, 0) (0, 200) (101, 200)");
    }
}
