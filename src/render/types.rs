//! What a shape handler hands to the rasterizer

use crate::types::{Point, Size};

/// A single closed outline in pixel space
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Ellipse inscribed in the box at `origin` with the given extent
    Ellipse { origin: Point, extent: Point },
    /// Closed polygon through the vertices in order
    Polygon(Vec<Point>),
}

impl Outline {
    /// Axis-aligned box from `(0, 0)` to `(width, height)` as a polygon.
    pub fn rect(width: u32, height: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        Outline::Polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
        ])
    }

    pub fn vertices(&self) -> Option<&[Point]> {
        match self {
            Outline::Polygon(points) => Some(points),
            Outline::Ellipse { .. } => None,
        }
    }
}

/// A complete shape description: one outline on a canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub canvas: Size,
    pub outline: Outline,
}
