//! Condition factor: building age, renovation, installations and energy
//! label.
//!
//! Ages are measured against a reference year passed in by the engine
//! (the year of the result timestamp), which keeps the factor a pure
//! function of its inputs.

use horeca_map_score_models::{ConditionFeatures, EnergyLabel, Factor, Priority};

use super::{FactorOutcome, NEUTRAL, Tally};

/// Ratings below this count as poor.
const POOR_RATING: f64 = 5.0;

/// Scores the condition sub-bundle as of `reference_year`.
#[must_use]
pub fn evaluate(features: Option<&ConditionFeatures>, reference_year: i32) -> FactorOutcome {
    let mut tally = Tally::new(Factor::Condition, NEUTRAL);
    let Some(f) = features else {
        return tally.finish();
    };

    if let Some(build_year) = f.build_year {
        let age = reference_year.saturating_sub(build_year);
        tally.add(match age {
            ..=10 => 10.0,
            11..=30 => 5.0,
            31..=60 => 0.0,
            61..=100 => -5.0,
            _ => -10.0,
        });
    }

    if let Some(rating) = f.overall_condition_rating {
        tally.add(3.0 * (rating - POOR_RATING));
        if rating < POOR_RATING {
            tally.suggest(
                Priority::High,
                format!(
                    "Overall condition is poor ({rating}/10): budget for a renovation before \
                     opening."
                ),
            );
        }
    }

    if let Some(rating) = f.electrical_rating {
        tally.add(1.5 * (rating - POOR_RATING));
        if rating < POOR_RATING {
            tally.suggest(
                Priority::High,
                format!(
                    "Electrical installation rated {rating}/10: have it inspected, commercial \
                     kitchens need heavy-duty power."
                ),
            );
        }
    }

    if let Some(rating) = f.plumbing_rating {
        tally.add(1.5 * (rating - POOR_RATING));
        if rating < POOR_RATING {
            tally.suggest(
                Priority::Medium,
                format!("Plumbing rated {rating}/10: check drains and grease traps."),
            );
        }
    }

    if let Some(rating) = f.hvac_rating {
        tally.add(1.5 * (rating - POOR_RATING));
        if rating < POOR_RATING {
            tally.suggest(
                Priority::Medium,
                format!(
                    "HVAC rated {rating}/10: improve heating and ventilation for guest comfort."
                ),
            );
        }
    }

    if let Some(label) = f.energy_label {
        tally.add(energy_label_points(label));
        if matches!(label, EnergyLabel::E | EnergyLabel::F | EnergyLabel::G) {
            tally.suggest(
                Priority::Medium,
                format!(
                    "Energy label {label}: insulation and efficient equipment lower running costs."
                ),
            );
        }
    }

    if let Some(renovated) = f.last_renovation_year {
        let since = reference_year.saturating_sub(renovated);
        tally.add(match since {
            ..=5 => 12.0,
            6..=10 => 6.0,
            11..=20 => 0.0,
            _ => -10.0,
        });
        if since > 20 {
            tally.suggest(
                Priority::Medium,
                format!("Last renovated in {renovated}: a refresh of the interior is due."),
            );
        }
    }

    tally.finish()
}

/// Score adjustment for an energy label.
#[must_use]
pub const fn energy_label_points(label: EnergyLabel) -> f64 {
    match label {
        EnergyLabel::A => 10.0,
        EnergyLabel::B => 6.0,
        EnergyLabel::C => 2.0,
        EnergyLabel::D => 0.0,
        EnergyLabel::E => -4.0,
        EnergyLabel::F => -7.0,
        EnergyLabel::G => -10.0,
    }
}
