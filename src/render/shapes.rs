//! Shape handlers
//!
//! Each shape is its own type that knows:
//! - the sentence grammar that selects and sizes it
//! - the canvas it needs
//! - the outline it draws on that canvas
//!
//! [`ShapeKind`] wraps them all and dispatches through [`ShapeHandler`].

use enum_dispatch::enum_dispatch;

use crate::grammar::{Measurement, ShapeSpec};
use crate::types::{Point, Size};

use super::geometry;
use super::types::Outline;

/// Common behavior for all shapes
///
/// `amounts` always holds one positive value per entry of
/// `spec().measurements`, in the same order.
#[enum_dispatch]
pub trait ShapeHandler {
    /// Grammar and template for this shape
    fn spec(&self) -> &'static ShapeSpec;

    /// Canvas width and height in pixels, before any size limit is applied
    fn canvas(&self, amounts: &[u32]) -> (u64, u64);

    /// The outline to draw on `canvas`
    ///
    /// Only called once `canvas` has passed the size limit, so every extent
    /// derived from `amounts` fits in a `u32`.
    fn outline(&self, amounts: &[u32], canvas: Size) -> Outline;
}

/// `(factor * amount + 1)` pixels on each side
fn square_canvas(factor: u64, amount: u32) -> (u64, u64) {
    let side = factor * u64::from(amount) + 1;
    (side, side)
}

/// A `width` x `height` box plus the margin pixel
fn boxed_canvas(width: u32, height: u32) -> (u64, u64) {
    (u64::from(width) + 1, u64::from(height) + 1)
}

// ============================================================================
// Shape Types
// ============================================================================

static CIRCLE: ShapeSpec = ShapeSpec {
    name: "circle",
    keywords: &["circle"],
    measurements: &[Measurement::new("radius", "radius", 1, 2)],
    template: "Draw a circle with a radius of 100",
};

/// Circle, drawn as the ellipse inscribed in the whole canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle;

impl ShapeHandler for Circle {
    fn spec(&self) -> &'static ShapeSpec {
        &CIRCLE
    }

    fn canvas(&self, amounts: &[u32]) -> (u64, u64) {
        square_canvas(2, amounts[0])
    }

    fn outline(&self, amounts: &[u32], _canvas: Size) -> Outline {
        let diameter = (amounts[0] * 2) as f32;
        Outline::Ellipse {
            origin: Point::ZERO,
            extent: Point::splat(diameter),
        }
    }
}

static SQUARE: ShapeSpec = ShapeSpec {
    name: "square",
    keywords: &["square"],
    measurements: &[Measurement::new("length", "side length", 2, 3)],
    template: "Draw a square with a side length of 200",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square;

impl ShapeHandler for Square {
    fn spec(&self) -> &'static ShapeSpec {
        &SQUARE
    }

    fn canvas(&self, amounts: &[u32]) -> (u64, u64) {
        square_canvas(1, amounts[0])
    }

    fn outline(&self, amounts: &[u32], _canvas: Size) -> Outline {
        Outline::rect(amounts[0], amounts[0])
    }
}

static RECTANGLE: ShapeSpec = ShapeSpec {
    name: "rectangle",
    keywords: &["rectangle"],
    measurements: &[
        Measurement::new("width", "width", 1, 2),
        Measurement::new("height", "height", 3, 4),
    ],
    template: "Draw a rectangle with a width of 250 and a height of 400",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle;

impl ShapeHandler for Rectangle {
    fn spec(&self) -> &'static ShapeSpec {
        &RECTANGLE
    }

    fn canvas(&self, amounts: &[u32]) -> (u64, u64) {
        boxed_canvas(amounts[0], amounts[1])
    }

    fn outline(&self, amounts: &[u32], _canvas: Size) -> Outline {
        Outline::rect(amounts[0], amounts[1])
    }
}

static OCTAGON: ShapeSpec = ShapeSpec {
    name: "octagon",
    keywords: &["octagon"],
    measurements: &[Measurement::new("length", "side length", 2, 3)],
    template: "Draw an octagon with a side length of 200",
};

/// Octagon built from its eight compass points; the length is the distance
/// from the center to each vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Octagon;

impl ShapeHandler for Octagon {
    fn spec(&self) -> &'static ShapeSpec {
        &OCTAGON
    }

    fn canvas(&self, amounts: &[u32]) -> (u64, u64) {
        square_canvas(2, amounts[0])
    }

    fn outline(&self, amounts: &[u32], canvas: Size) -> Outline {
        Outline::Polygon(geometry::octagon(canvas, amounts[0]))
    }
}

static ISOSCELES_TRIANGLE: ShapeSpec = ShapeSpec {
    name: "isosceles triangle",
    keywords: &["isosceles", "triangle"],
    measurements: &[
        Measurement::new("height", "height", 2, 3),
        Measurement::new("width", "width", 4, 5),
    ],
    template: "Draw an isosceles triangle with a height of 200 and a width of 100",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoscelesTriangle;

impl ShapeHandler for IsoscelesTriangle {
    fn spec(&self) -> &'static ShapeSpec {
        &ISOSCELES_TRIANGLE
    }

    fn canvas(&self, amounts: &[u32]) -> (u64, u64) {
        let [height, width] = [amounts[0], amounts[1]];
        boxed_canvas(width, height)
    }

    fn outline(&self, amounts: &[u32], _canvas: Size) -> Outline {
        let [height, width] = [amounts[0], amounts[1]];
        Outline::Polygon(geometry::isosceles_triangle(width, height))
    }
}

static EQUILATERAL_TRIANGLE: ShapeSpec = ShapeSpec {
    name: "equilateral triangle",
    keywords: &["equilateral", "triangle"],
    measurements: &[Measurement::new("length", "side length", 3, 4)],
    template: "Draw a equilateral triangle with a side length of 200",
};

/// Equilateral triangle; the length is its circumradius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquilateralTriangle;

impl ShapeHandler for EquilateralTriangle {
    fn spec(&self) -> &'static ShapeSpec {
        &EQUILATERAL_TRIANGLE
    }

    fn canvas(&self, amounts: &[u32]) -> (u64, u64) {
        square_canvas(2, amounts[0])
    }

    fn outline(&self, amounts: &[u32], canvas: Size) -> Outline {
        Outline::Polygon(geometry::equilateral_triangle(canvas, amounts[0]))
    }
}

static PARALLELOGRAM: ShapeSpec = ShapeSpec {
    name: "parallelogram",
    keywords: &["parallelogram"],
    measurements: &[
        Measurement::new("width", "width", 1, 2),
        Measurement::new("height", "height", 3, 4),
    ],
    template: "Draw a parallelogram with a width of 200 and a height of 100",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parallelogram;

impl ShapeHandler for Parallelogram {
    fn spec(&self) -> &'static ShapeSpec {
        &PARALLELOGRAM
    }

    fn canvas(&self, amounts: &[u32]) -> (u64, u64) {
        boxed_canvas(amounts[0], amounts[1])
    }

    fn outline(&self, amounts: &[u32], _canvas: Size) -> Outline {
        Outline::Polygon(geometry::parallelogram(amounts[0], amounts[1]))
    }
}

static PENTAGON: ShapeSpec = ShapeSpec {
    name: "pentagon",
    keywords: &["pentagon"],
    measurements: &[Measurement::new("length", "side length", 2, 3)],
    template: "Draw a pentagon with a side length of 200",
};

/// Start of the pentagon and hexagon walks: right of center, near the bottom
fn lower_right_start(length: u32) -> Point {
    Point::new((length + length / 2) as f32, (length * 2 - length / 5) as f32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pentagon;

impl ShapeHandler for Pentagon {
    fn spec(&self) -> &'static ShapeSpec {
        &PENTAGON
    }

    fn canvas(&self, amounts: &[u32]) -> (u64, u64) {
        square_canvas(2, amounts[0])
    }

    fn outline(&self, amounts: &[u32], _canvas: Size) -> Outline {
        let length = amounts[0];
        Outline::Polygon(geometry::regular_polygon(5, length, lower_right_start(length)))
    }
}

static HEXAGON: ShapeSpec = ShapeSpec {
    name: "hexagon",
    keywords: &["hexagon"],
    measurements: &[Measurement::new("length", "side length", 2, 3)],
    template: "Draw a hexagon with a side length of 200",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hexagon;

impl ShapeHandler for Hexagon {
    fn spec(&self) -> &'static ShapeSpec {
        &HEXAGON
    }

    fn canvas(&self, amounts: &[u32]) -> (u64, u64) {
        square_canvas(2, amounts[0])
    }

    fn outline(&self, amounts: &[u32], _canvas: Size) -> Outline {
        let length = amounts[0];
        Outline::Polygon(geometry::regular_polygon(6, length, lower_right_start(length)))
    }
}

static HEPTAGON: ShapeSpec = ShapeSpec {
    name: "heptagon",
    keywords: &["heptagon"],
    measurements: &[Measurement::new("length", "side length", 2, 3)],
    template: "Draw a heptagon with a side length of 200",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heptagon;

impl ShapeHandler for Heptagon {
    fn spec(&self) -> &'static ShapeSpec {
        &HEPTAGON
    }

    fn canvas(&self, amounts: &[u32]) -> (u64, u64) {
        square_canvas(3, amounts[0])
    }

    fn outline(&self, amounts: &[u32], _canvas: Size) -> Outline {
        let length = amounts[0];
        let start = Point::new((length * 2) as f32, (length * 3 - length / 5) as f32);
        Outline::Polygon(geometry::regular_polygon(7, length, start))
    }
}

// ============================================================================
// Shape Enum
// ============================================================================

/// A shape enum wrapping all shape types
#[enum_dispatch(ShapeHandler)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Octagon,
    IsoscelesTriangle,
    EquilateralTriangle,
    Parallelogram,
    Pentagon,
    Hexagon,
    Heptagon,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn template(&self) -> &'static str {
        self.spec().template
    }
}

/// Every shape, in matching order
pub static CATALOG: [ShapeKind; 10] = [
    ShapeKind::Circle(Circle),
    ShapeKind::Square(Square),
    ShapeKind::Rectangle(Rectangle),
    ShapeKind::Octagon(Octagon),
    ShapeKind::IsoscelesTriangle(IsoscelesTriangle),
    ShapeKind::EquilateralTriangle(EquilateralTriangle),
    ShapeKind::Parallelogram(Parallelogram),
    ShapeKind::Pentagon(Pentagon),
    ShapeKind::Hexagon(Hexagon),
    ShapeKind::Heptagon(Heptagon),
];

// ============================================================================
// Tests
// ============================================================================
