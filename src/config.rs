//! Engine settings

use crate::render::defaults;

/// Limits and stroke settings for an [`Engine`](crate::Engine)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Requests needing a wider or taller canvas are refused
    pub max_canvas_side: u32,
    /// Outline width in pixels
    pub stroke_width: f32,
    /// Smooth outline edges
    pub anti_alias: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_canvas_side: defaults::MAX_CANVAS_SIDE,
            stroke_width: defaults::STROKE_WIDTH,
            anti_alias: defaults::ANTI_ALIAS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_canvas_side(mut self, side: u32) -> Self {
        self.max_canvas_side = side;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}
