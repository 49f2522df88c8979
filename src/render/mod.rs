//! Shape rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Fixed drawing settings
//! - `types`: `Outline` and `Drawing`, the hand-off to the rasterizer
//! - `shapes`: One handler per supported shape, plus the catalog
//! - `geometry`: Vertex math
//! - `raster`: The `Rasterizer` capability and its tiny-skia backend

pub mod defaults;
pub mod geometry;
pub mod raster;
pub mod shapes;
pub mod types;

pub use raster::{Rasterizer, TinySkiaRasterizer};
pub use types::*;

use crate::config::Config;
use crate::errors::{RenderError, ShapeError};
use crate::grammar::{ACCEPTANCE_PREFIX, CRITERIA_TEMPLATE};
use crate::log::{debug, warn};
use crate::parse;
use crate::types::{EncodedImage, RenderResult, Size};

use shapes::{ShapeHandler, ShapeKind};

/// Parses criteria and renders shapes
///
/// Holds no per-request state; one engine can serve any number of requests,
/// from any number of threads when the rasterizer allows it.
#[derive(Debug, Clone)]
pub struct Engine<R = TinySkiaRasterizer> {
    config: Config,
    rasterizer: R,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let rasterizer = TinySkiaRasterizer::new(&config);
        Self { config, rasterizer }
    }
}

impl<R: Rasterizer> Engine<R> {
    pub fn with_rasterizer(config: Config, rasterizer: R) -> Self {
        Self { config, rasterizer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tokenize `criteria`, pick the shape it names and render it.
    ///
    /// Never fails outright: anything wrong with the input comes back as a
    /// failed [`RenderResult`] carrying a usage message.
    pub fn process(&self, criteria: &str) -> RenderResult {
        let tokens = match parse::tokenize(criteria) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(error = %e, "criteria could not be tokenized");
                return RenderResult::failure(CRITERIA_TEMPLATE);
            }
        };
        debug!(?tokens, "tokenized criteria");

        match parse::identify(&tokens) {
            Some(shape) => self.render(shape, &tokens),
            None => {
                debug!("no shape matched");
                RenderResult::failure(CRITERIA_TEMPLATE)
            }
        }
    }

    /// Render `shape` from a full token sequence (shape name included).
    pub fn render(&self, shape: ShapeKind, tokens: &[String]) -> RenderResult {
        match self.try_render(shape, tokens) {
            Ok(image) => RenderResult::success(image),
            Err(err) => RenderResult::failure(failure_message(shape, &err)),
        }
    }

    /// Validate `tokens` against `shape`'s grammar and lay out its outline.
    pub fn drawing(&self, shape: ShapeKind, tokens: &[String]) -> Result<Drawing, ShapeError> {
        let spec = shape.spec();
        let amounts = spec.amounts(tokens)?;

        let (width, height) = shape.canvas(&amounts);
        let limit = self.config.max_canvas_side;
        let canvas = Size::within(width, height, limit).ok_or(RenderError::CanvasTooLarge {
            shape: spec.name,
            width,
            height,
            limit,
        })?;
        debug!(shape = spec.name, ?amounts, %canvas, "laying out shape");

        Ok(Drawing {
            canvas,
            outline: shape.outline(&amounts, canvas),
        })
    }

    fn try_render(&self, shape: ShapeKind, tokens: &[String]) -> Result<EncodedImage, ShapeError> {
        let drawing = self.drawing(shape, tokens)?;
        Ok(self.rasterizer.rasterize(&drawing)?)
    }
}

/// The caller-facing text for a failed render: the shape's template, preceded
/// by the error itself when it says something the template does not.
fn failure_message(shape: ShapeKind, err: &ShapeError) -> String {
    let spec = shape.spec();
    match err {
        ShapeError::Render(e) if !e.is_reported() => {
            warn!(shape = spec.name, error = %e, "rendering failed");
        }
        _ => {
            debug!(shape = spec.name, error = %err, "criteria rejected");
        }
    }

    if err.is_reported() {
        format!("{err}. {ACCEPTANCE_PREFIX}{}", spec.template)
    } else {
        spec.acceptance_message()
    }
}
