//! Per-shape sentence grammars.
//!
//! After filler phrases are dropped, every supported sentence is a fixed row of
//! tokens: the shape name, then measurement keywords and whole-number amounts
//! at known positions. A [`ShapeSpec`] records those positions and the template
//! sentence shown back to the caller when the row does not match.

use crate::errors::GrammarError;

/// Usage hint for text that names no known shape.
pub const CRITERIA_TEMPLATE: &str =
    "Draw a(n) <shape> with a <measurement> of <amount> [and a(n) <measurement> of <amount>] ";

/// Prefix of every shape-specific failure message.
pub const ACCEPTANCE_PREFIX: &str = "Acceptance Criteria is: ";

/// A keyword token and the amount token that goes with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Token that must appear at `keyword_at`
    pub keyword: &'static str,
    /// Name used in messages ("side length" where the keyword is "length")
    pub label: &'static str,
    pub keyword_at: usize,
    pub amount_at: usize,
}

impl Measurement {
    pub const fn new(
        keyword: &'static str,
        label: &'static str,
        keyword_at: usize,
        amount_at: usize,
    ) -> Self {
        Self {
            keyword,
            label,
            keyword_at,
            amount_at,
        }
    }
}

/// Grammar for one shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSpec {
    /// Display name, e.g. "isosceles triangle"
    pub name: &'static str,
    /// Leading tokens that select this shape
    pub keywords: &'static [&'static str],
    /// In the order the handler reads the amounts
    pub measurements: &'static [Measurement],
    pub template: &'static str,
}

impl ShapeSpec {
    /// Whether `tokens` starts with this shape's name.
    pub fn matches(&self, tokens: &[String]) -> bool {
        tokens.len() >= self.keywords.len()
            && self
                .keywords
                .iter()
                .zip(tokens)
                .all(|(keyword, token)| *keyword == token.as_str())
    }

    /// Fewest tokens a well-formed sentence can have.
    pub fn min_tokens(&self) -> usize {
        self.measurements
            .iter()
            .map(|m| m.keyword_at.max(m.amount_at) + 1)
            .max()
            .unwrap_or(self.keywords.len())
    }

    /// The shape-specific failure message.
    pub fn acceptance_message(&self) -> String {
        format!("{ACCEPTANCE_PREFIX}{}", self.template)
    }

    /// Check keyword positions and read every amount.
    ///
    /// Amounts come back in `measurements` order and are always positive.
    /// Tokens past the last amount are ignored.
    pub fn amounts(&self, tokens: &[String]) -> Result<Vec<u32>, GrammarError> {
        let expected = self.min_tokens();
        if tokens.len() < expected {
            return Err(GrammarError::TooFewTokens {
                expected,
                found: tokens.len(),
            });
        }

        for m in self.measurements {
            let found = &tokens[m.keyword_at];
            if found.as_str() != m.keyword {
                return Err(GrammarError::UnexpectedKeyword {
                    position: m.keyword_at,
                    expected: m.keyword,
                    found: found.clone(),
                });
            }
        }

        self.measurements
            .iter()
            .map(|m| parse_amount(m, &tokens[m.amount_at]))
            .collect()
    }
}

fn parse_amount(measurement: &Measurement, token: &str) -> Result<u32, GrammarError> {
    let amount: i32 = token.parse().map_err(|_| GrammarError::InvalidAmount {
        token: token.to_string(),
    })?;
    if amount <= 0 {
        return Err(GrammarError::NonPositiveAmount {
            measurement: measurement.label,
            amount,
        });
    }
    Ok(amount.unsigned_abs())
}
