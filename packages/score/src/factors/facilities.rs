//! Facilities factor: kitchen, extraction, storage, seating and floor
//! area.

use horeca_map_score_models::{EquipmentGrade, Factor, FacilityFeatures, Priority};

use super::{FactorOutcome, NEUTRAL, Tally};

/// Scores the facilities sub-bundle.
#[must_use]
pub fn evaluate(features: Option<&FacilityFeatures>) -> FactorOutcome {
    let mut tally = Tally::new(Factor::Facilities, NEUTRAL);
    let Some(f) = features else {
        return tally.finish();
    };

    if let Some(kitchen) = f.kitchen_type {
        tally.add(match kitchen {
            EquipmentGrade::None => -15.0,
            EquipmentGrade::Basic => -5.0,
            EquipmentGrade::Standard => 5.0,
            EquipmentGrade::Professional => 12.0,
        });
        match kitchen {
            EquipmentGrade::None => tally.suggest(
                Priority::High,
                "No kitchen present: installing a kitchen is required for most food concepts.",
            ),
            EquipmentGrade::Basic => tally.suggest(
                Priority::Medium,
                "Basic kitchen: upgrading to a standard or professional kitchen widens the range \
                 of viable concepts.",
            ),
            EquipmentGrade::Standard | EquipmentGrade::Professional => {}
        }
    }

    if let Some(extraction) = f.extraction_type {
        tally.add(match extraction {
            EquipmentGrade::None => -10.0,
            EquipmentGrade::Basic => -3.0,
            EquipmentGrade::Standard => 4.0,
            EquipmentGrade::Professional => 8.0,
        });
        if matches!(extraction, EquipmentGrade::None | EquipmentGrade::Basic) {
            tally.suggest(
                Priority::Medium,
                "Upgrade the extraction system: frying and grilling need adequate ventilation.",
            );
        }
    }

    flag(&mut tally, f.cold_storage, 5.0, -3.0);
    flag(&mut tally, f.cellar, 3.0, 0.0);
    flag(&mut tally, f.accessible_toilets, 4.0, -4.0);
    flag(&mut tally, f.staff_area, 3.0, 0.0);
    flag(&mut tally, f.storage_space, 3.0, 0.0);

    if f.accessible_toilets == Some(false) {
        tally.suggest(
            Priority::Medium,
            "Add accessible toilets: they are often required for a permit and widen the audience.",
        );
    }
    if f.cold_storage == Some(false) {
        tally.suggest(
            Priority::Low,
            "Consider cold storage to buy fresh produce in larger quantities.",
        );
    }

    if let Some(seats) = f.seating_capacity_inside {
        tally.add(match seats {
            60.. => 8.0,
            30..=59 => 4.0,
            15..=29 => 0.0,
            _ => -8.0,
        });
    }

    if let Some(seats) = f.seating_capacity_terrace {
        tally.add(match seats {
            30.. => 5.0,
            10..=29 => 3.0,
            1..=9 => 1.0,
            0 => -2.0,
        });
    }

    if let Some(area) = f.square_meters {
        tally.add(if area >= 200.0 {
            6.0
        } else if area >= 100.0 {
            3.0
        } else if area >= 50.0 {
            0.0
        } else {
            -6.0
        });
    }

    tally.finish()
}

fn flag(tally: &mut Tally, value: Option<bool>, present: f64, absent: f64) {
    match value {
        Some(true) => tally.add(present),
        Some(false) => tally.add(absent),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn professional_setup_scores_at_least_75() {
        let outcome = evaluate(Some(&FacilityFeatures {
            kitchen_type: Some(EquipmentGrade::Professional),
            extraction_type: Some(EquipmentGrade::Professional),
            cold_storage: Some(true),
            storage_space: Some(true),
            seating_capacity_inside: Some(80),
            seating_capacity_terrace: Some(40),
            square_meters: Some(250.0),
            ..FacilityFeatures::default()
        }));
        assert!(outcome.score >= 75, "got {}", outcome.score);
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn bare_setup_scores_at_most_40() {
        let outcome = evaluate(Some(&FacilityFeatures {
            kitchen_type: Some(EquipmentGrade::None),
            extraction_type: Some(EquipmentGrade::None),
            seating_capacity_inside: Some(8),
            seating_capacity_terrace: Some(0),
            square_meters: Some(30.0),
            ..FacilityFeatures::default()
        }));
        assert!(outcome.score <= 40, "got {}", outcome.score);
        assert_eq!(outcome.suggestions[0].priority, Priority::High);
    }

    #[test]
    fn basic_kitchen_suggests_kitchen_upgrade() {
        let outcome = evaluate(Some(&FacilityFeatures {
            kitchen_type: Some(EquipmentGrade::Basic),
            ..FacilityFeatures::default()
        }));
        assert!(
            outcome
                .suggestions
                .iter()
                .any(|s| s.text.contains("kitchen") && s.priority == Priority::Medium)
        );
    }

    #[test]
    fn absent_bundle_is_neutral() {
        assert_eq!(evaluate(None).score, 50);
        assert_eq!(evaluate(Some(&FacilityFeatures::default())).score, 50);
    }
}
