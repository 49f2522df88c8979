//! Turn plain-English shape descriptions into PNG images.
//!
//! ```
//! let result = shapecraft::process("Draw a circle with a radius of 100");
//! assert!(result.is_success());
//! assert!(result.image.unwrap().data_uri().starts_with("data:image/png;base64,"));
//! ```
//!
//! Ten shapes are understood, each with its own fixed sentence pattern. Anything
//! that does not fit is answered with a failure whose message is the sentence
//! the caller should have written; see [`catalog`].

use pest_derive::Parser;

pub mod config;
pub mod errors;
pub mod grammar;
pub mod log;
pub mod parse;
pub mod render;
pub mod types;

pub use config::Config;
pub use errors::{GrammarError, RenderError, ShapeError};
pub use grammar::{CRITERIA_TEMPLATE, ShapeSpec};
pub use render::shapes::{ShapeHandler, ShapeKind};
pub use render::{Drawing, Engine, Outline, Rasterizer, TinySkiaRasterizer};
pub use types::{EncodedImage, RenderResult, Status};

#[derive(Parser)]
#[grammar = "criteria.pest"]
pub struct CriteriaParser;

/// Parse `criteria` and render the shape it describes with a default [`Engine`].
pub fn process(criteria: &str) -> RenderResult {
    Engine::new().process(criteria)
}

/// Every supported shape, in the order shape keywords are matched.
pub fn catalog() -> &'static [ShapeKind] {
    &render::shapes::CATALOG
}
