//! Location factor: footfall, neighborhood rating, accessibility and
//! visibility.

use horeca_map_score_models::{Factor, LocationFeatures, Priority};

use super::{FactorOutcome, NEUTRAL, Tally};

/// Scores the location sub-bundle.
#[must_use]
pub fn evaluate(features: Option<&LocationFeatures>) -> FactorOutcome {
    let mut tally = Tally::new(Factor::Location, NEUTRAL);
    let Some(f) = features else {
        return tally.finish();
    };

    if let Some(footfall) = f.footfall_estimate {
        tally.add(match footfall {
            5000.. => 15.0,
            2000..=4999 => 10.0,
            1000..=1999 => 5.0,
            500..=999 => 0.0,
            _ => -10.0,
        });
        if footfall < 500 {
            tally.suggest(
                Priority::High,
                format!(
                    "Low footfall estimate ({footfall} passers-by per day): invest in signage, \
                     online presence and destination marketing."
                ),
            );
        }
    }

    if let Some(rating) = f.neighborhood_rating {
        tally.add(3.0 * (rating - 5.0));
    }

    if let Some(distance) = f.public_transport_distance {
        tally.add(if distance <= 100.0 {
            10.0
        } else if distance <= 300.0 {
            5.0
        } else if distance <= 800.0 {
            0.0
        } else {
            -10.0
        });
        if distance > 800.0 {
            tally.suggest(
                Priority::Medium,
                format!(
                    "Public transport is {distance:.0} m away: consider delivery or a concept \
                     that works as a destination."
                ),
            );
        }
    }

    if let Some(distance) = f.parking_distance {
        tally.add(if distance <= 100.0 {
            5.0
        } else if distance <= 300.0 {
            2.0
        } else if distance <= 500.0 {
            0.0
        } else {
            -5.0
        });
        if distance > 500.0 {
            tally.suggest(
                Priority::Low,
                format!(
                    "Nearest parking is {distance:.0} m away: point guests to bike parking or \
                     nearby garages."
                ),
            );
        }
    }

    if f.tourist_area == Some(true) {
        tally.add(5.0);
    }

    match f.high_visibility {
        Some(true) => tally.add(8.0),
        Some(false) => tally.suggest(
            Priority::Low,
            "Limited street visibility: improve signage and façade lighting.",
        ),
        None => {}
    }

    tally.finish()
}

#[cfg(test)]
mod tests {
    use horeca_map_score_models::Grade;

    use super::*;

    fn strong() -> LocationFeatures {
        LocationFeatures {
            footfall_estimate: Some(5000),
            neighborhood_rating: Some(9.0),
            public_transport_distance: Some(50.0),
            parking_distance: Some(100.0),
            tourist_area: Some(true),
            high_visibility: Some(true),
        }
    }

    fn weak() -> LocationFeatures {
        LocationFeatures {
            footfall_estimate: Some(100),
            neighborhood_rating: Some(3.0),
            public_transport_distance: Some(2000.0),
            parking_distance: Some(800.0),
            tourist_area: Some(false),
            high_visibility: Some(false),
        }
    }

    #[test]
    fn strong_location_scores_at_least_80() {
        let outcome = evaluate(Some(&strong()));
        assert!(outcome.score >= 80, "got {}", outcome.score);
        assert!(matches!(
            Grade::from_score(outcome.score),
            Grade::A | Grade::APlus
        ));
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn weak_location_scores_at_most_50() {
        let outcome = evaluate(Some(&weak()));
        assert!(outcome.score <= 50, "got {}", outcome.score);
        assert_eq!(outcome.suggestions.len(), 4);
        assert_eq!(outcome.suggestions[0].priority, Priority::High);
    }

    #[test]
    fn missing_bundle_and_empty_bundle_are_neutral() {
        assert_eq!(evaluate(None).score, 50);
        assert_eq!(evaluate(Some(&LocationFeatures::default())).score, 50);
    }

    #[test]
    fn closer_transport_scores_higher() {
        let near = LocationFeatures {
            public_transport_distance: Some(80.0),
            ..LocationFeatures::default()
        };
        let far = LocationFeatures {
            public_transport_distance: Some(1500.0),
            ..LocationFeatures::default()
        };
        assert!(evaluate(Some(&near)).score > evaluate(Some(&far)).score);
    }

    #[test]
    fn extreme_values_stay_in_range() {
        let extreme = LocationFeatures {
            footfall_estimate: Some(u32::MAX),
            neighborhood_rating: Some(1e9),
            public_transport_distance: Some(0.0),
            parking_distance: Some(f64::MAX),
            tourist_area: Some(true),
            high_visibility: Some(true),
        };
        assert_eq!(evaluate(Some(&extreme)).score, 100);
    }
}
