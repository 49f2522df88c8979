//! Fixed drawing settings (all in pixels)

/// Width of every outline
pub const STROKE_WIDTH: f32 = 1.0;
/// Largest canvas side the default engine will allocate
pub const MAX_CANVAS_SIDE: u32 = 8192;
/// Outlines are drawn crisp, one pixel wide, without smoothing
pub const ANTI_ALIAS: bool = false;

/// Equilateral triangle: angle of the first vertex, in radians
pub const TRIANGLE_START_ANGLE: f64 = 0.525;
