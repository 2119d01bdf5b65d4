//! Per-factor scoring rules.
//!
//! Every factor starts from the [`NEUTRAL`] midpoint and each attribute
//! that is present nudges it up or down. Missing attributes contribute
//! nothing, so an empty sub-bundle scores exactly neutral. Suggestions are
//! emitted in rule order; the engine sorts them by priority afterwards.

pub mod condition;
pub mod facilities;
pub mod licenses;
pub mod location;
pub mod price_quality;

use horeca_map_score_models::{Factor, Priority, Suggestion};

/// Score of a factor with no information.
pub const NEUTRAL: f64 = 50.0;

/// Result of evaluating one factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorOutcome {
    /// 0-100.
    pub score: u8,
    /// Suggestions in rule order.
    pub suggestions: Vec<Suggestion>,
}

/// Accumulates score adjustments and suggestions for one factor.
pub(crate) struct Tally {
    factor: Factor,
    score: f64,
    suggestions: Vec<Suggestion>,
}

impl Tally {
    pub(crate) const fn new(factor: Factor, start: f64) -> Self {
        Self {
            factor,
            score: start,
            suggestions: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, delta: f64) {
        self.score += delta;
    }

    pub(crate) fn suggest(&mut self, priority: Priority, text: impl Into<String>) {
        self.suggestions.push(Suggestion {
            factor: self.factor,
            text: text.into(),
            priority,
        });
    }

    pub(crate) fn finish(self) -> FactorOutcome {
        FactorOutcome {
            score: clamp_score(self.score),
            suggestions: self.suggestions,
        }
    }
}

/// Rounds and clamps a raw score into 0-100. Non-finite input is neutral.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_score(raw: f64) -> u8 {
    let raw = if raw.is_finite() { raw } else { NEUTRAL };
    raw.round().clamp(0.0, 100.0) as u8
}
