//! Rasterize a [`Drawing`] to compressed image bytes

use tiny_skia::{Color, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::config::Config;
use crate::errors::RenderError;
use crate::types::EncodedImage;

use super::defaults;
use super::types::{Drawing, Outline};

/// Turns a shape description into an encoded image
///
/// The engine only ever talks to this trait, so the drawing backend can be
/// replaced without touching grammars or geometry.
pub trait Rasterizer {
    fn rasterize(&self, drawing: &Drawing) -> Result<EncodedImage, RenderError>;
}

/// CPU rasterizer backed by tiny-skia, producing PNG
#[derive(Debug, Clone, PartialEq)]
pub struct TinySkiaRasterizer {
    stroke_width: f32,
    anti_alias: bool,
}

impl Default for TinySkiaRasterizer {
    fn default() -> Self {
        Self {
            stroke_width: defaults::STROKE_WIDTH,
            anti_alias: defaults::ANTI_ALIAS,
        }
    }
}

impl TinySkiaRasterizer {
    pub fn new(config: &Config) -> Self {
        Self {
            stroke_width: config.stroke_width,
            anti_alias: config.anti_alias,
        }
    }
}

impl Rasterizer for TinySkiaRasterizer {
    fn rasterize(&self, drawing: &Drawing) -> Result<EncodedImage, RenderError> {
        let (width, height) = (drawing.canvas.width, drawing.canvas.height);
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::CanvasAllocation { width, height })?;
        pixmap.fill(Color::WHITE);

        let path = outline_path(&drawing.outline).ok_or(RenderError::InvalidGeometry)?;

        let mut paint = Paint::default();
        paint.set_color(Color::BLACK);
        paint.anti_alias = self.anti_alias;

        let stroke = Stroke {
            width: self.stroke_width,
            ..Stroke::default()
        };

        // Integer coordinates name pixels; their centers are half a pixel in.
        let transform = Transform::from_translate(0.5, 0.5);
        pixmap.stroke_path(&path, &paint, &stroke, transform, None);

        let bytes = pixmap.encode_png().map_err(|e| RenderError::Encode {
            message: e.to_string(),
        })?;
        Ok(EncodedImage::png(bytes))
    }
}

fn outline_path(outline: &Outline) -> Option<Path> {
    match outline {
        Outline::Ellipse { origin, extent } => {
            let bounds = Rect::from_xywh(origin.x, origin.y, extent.x, extent.y)?;
            PathBuilder::from_oval(bounds)
        }
        Outline::Polygon(points) => {
            let (first, rest) = points.split_first()?;
            let mut pb = PathBuilder::new();
            pb.move_to(first.x, first.y);
            for p in rest {
                pb.line_to(p.x, p.y);
            }
            pb.close();
            pb.finish()
        }
    }
}
