//! The strategy every catalog concept implements.

use horeca_map_concept_models::ConceptInput;

/// Scores one business concept against a property and its neighborhood.
///
/// Implementors supply the raw additive score and their specific
/// opportunity and risk rules; clamping and the opportunity fallback are
/// shared.
pub trait ConceptScorer: Send + Sync {
    /// Display name, e.g. "Restaurant".
    fn name(&self) -> &'static str;

    /// Display emoji.
    fn emoji(&self) -> &'static str;

    /// Unclamped score: a base value adjusted by the context.
    fn raw_score(&self, input: &ConceptInput) -> i32;

    /// Opportunities triggered by the context. May be empty.
    fn specific_opportunities(&self, input: &ConceptInput) -> Vec<String>;

    /// Risks triggered by the context. May be empty.
    fn risks(&self, input: &ConceptInput) -> Vec<String>;

    /// Fit score clamped to 0-100.
    fn score(&self, input: &ConceptInput) -> u8 {
        u8::try_from(self.raw_score(input).clamp(0, 100)).unwrap_or_default()
    }

    /// Opportunities, never empty.
    fn opportunities(&self, input: &ConceptInput) -> Vec<String> {
        let opportunities = self.specific_opportunities(input);
        if opportunities.is_empty() {
            vec![format!("Solide basis voor een {} op deze locatie.", self.name())]
        } else {
            opportunities
        }
    }
}
