//! Tokenize criteria text and pick the shape it names

use pest::Parser;

use crate::render::shapes::{CATALOG, ShapeHandler, ShapeKind};
use crate::{CriteriaParser, Rule};

/// Lowercase `criteria` and split it into tokens, dropping filler phrases.
///
/// Filler phrases ("draw a", "draw an", "with a", "of", "and a", "and an") only
/// match whole words, so "draw anvil" keeps "anvil" and "offset" stays intact.
pub fn tokenize(criteria: &str) -> Result<Vec<String>, miette::Report> {
    let lowered = criteria.to_lowercase();
    let pairs = CriteriaParser::parse(Rule::criteria, &lowered)
        .map_err(|e| miette::miette!("Parse error: {}", e))?;

    let mut tokens = Vec::new();
    for pair in pairs {
        if pair.as_rule() == Rule::criteria {
            for inner in pair.into_inner() {
                if inner.as_rule() == Rule::token {
                    tokens.push(inner.as_str().to_string());
                }
            }
        }
    }

    Ok(tokens)
}

/// The first catalog shape whose name starts `tokens`.
pub fn identify(tokens: &[String]) -> Option<ShapeKind> {
    CATALOG
        .iter()
        .find(|shape| shape.spec().matches(tokens))
        .copied()
}
