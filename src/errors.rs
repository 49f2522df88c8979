//! Error types with diagnostic codes using miette
//!
//! None of these cross the public `process` boundary: the engine folds each one
//! into a failed [`RenderResult`](crate::RenderResult). They exist so handlers
//! can use `?` and so logs and the CLI can name what went wrong.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Grammar Errors
// ============================================================================

/// The token sequence does not fit a shape's grammar
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("expected at least {expected} tokens, found {found}")]
    #[diagnostic(code(shapecraft::grammar::too_few_tokens))]
    TooFewTokens { expected: usize, found: usize },

    #[error("expected `{expected}` at position {position}, found `{found}`")]
    #[diagnostic(code(shapecraft::grammar::unexpected_keyword))]
    UnexpectedKeyword {
        position: usize,
        expected: &'static str,
        found: String,
    },

    #[error("`{token}` is not a whole number")]
    #[diagnostic(code(shapecraft::grammar::invalid_amount))]
    InvalidAmount { token: String },

    #[error("The {measurement} must be greater than zero")]
    #[diagnostic(
        code(shapecraft::grammar::non_positive_amount),
        help("shapes need a positive size to be drawn")
    )]
    NonPositiveAmount {
        measurement: &'static str,
        amount: i32,
    },
}

impl GrammarError {
    /// Whether the caller should hear about this error specifically, rather
    /// than only seeing the shape's template.
    pub fn is_reported(&self) -> bool {
        matches!(self, GrammarError::NonPositiveAmount { .. })
    }
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur after the grammar matched
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("The {shape} would need a {width}x{height} canvas, larger than the {limit} pixel limit")]
    #[diagnostic(
        code(shapecraft::render::canvas_too_large),
        help("use a smaller measurement or raise `Config::max_canvas_side`")
    )]
    CanvasTooLarge {
        shape: &'static str,
        width: u64,
        height: u64,
        limit: u32,
    },

    #[error("could not allocate a {width}x{height} canvas")]
    #[diagnostic(code(shapecraft::render::canvas_allocation))]
    CanvasAllocation { width: u32, height: u32 },

    #[error("outline could not be turned into a path")]
    #[diagnostic(code(shapecraft::render::invalid_geometry))]
    InvalidGeometry,

    #[error("image encoding failed: {message}")]
    #[diagnostic(code(shapecraft::render::encode))]
    Encode { message: String },
}

impl RenderError {
    /// Whether the caller should hear about this error specifically.
    ///
    /// Backend faults are logged and answered with the plain template.
    pub fn is_reported(&self) -> bool {
        matches!(self, RenderError::CanvasTooLarge { .. })
    }
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Anything that can stop a shape handler
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}

impl ShapeError {
    pub fn is_reported(&self) -> bool {
        match self {
            ShapeError::Grammar(e) => e.is_reported(),
            ShapeError::Render(e) => e.is_reported(),
        }
    }
}
