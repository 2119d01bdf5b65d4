//! Licenses factor.
//!
//! The score is the sum of the weights of the licenses the property
//! holds. Alcohol and food service dominate; gaming, catering and event
//! permits are minor.
//!
//! Defaults are asymmetric: an absent sub-bundle scores
//! neutral (nothing is known), while a present sub-bundle with a flag left
//! out treats that flag as `false` (the license is not held).

use horeca_map_score_models::{Factor, LicenseFeatures, Priority};

use super::{FactorOutcome, NEUTRAL, Tally};

/// Points per license. Sums to 100.
pub const ALCOHOL: f64 = 25.0;
/// Food service license points.
pub const FOOD_SERVICE: f64 = 25.0;
/// Terrace permit points.
pub const TERRACE: f64 = 15.0;
/// Late-night permit points.
pub const LATE_NIGHT: f64 = 12.0;
/// Catering license points.
pub const CATERING: f64 = 8.0;
/// Event permit points.
pub const EVENT: f64 = 8.0;
/// Gaming permit points.
pub const GAMING: f64 = 7.0;

/// Scores the licenses sub-bundle.
#[must_use]
pub fn evaluate(features: Option<&LicenseFeatures>) -> FactorOutcome {
    let Some(f) = features else {
        return Tally::new(Factor::Licenses, NEUTRAL).finish();
    };

    let held = |flag: Option<bool>| flag.unwrap_or(false);
    let alcohol = held(f.alcohol_license);
    let food_service = held(f.food_service_license);
    let terrace = held(f.terrace_license);
    let late_night = held(f.late_night_license);

    let mut tally = Tally::new(Factor::Licenses, 0.0);
    for (has, points) in [
        (alcohol, ALCOHOL),
        (food_service, FOOD_SERVICE),
        (terrace, TERRACE),
        (late_night, LATE_NIGHT),
        (held(f.catering_license), CATERING),
        (held(f.event_license), EVENT),
        (held(f.gaming_license), GAMING),
    ] {
        if has {
            tally.add(points);
        }
    }

    match (alcohol, food_service) {
        (false, true) => tally.suggest(
            Priority::High,
            "Apply for an alcohol license: it complements the food service license and raises \
             the average spend per guest.",
        ),
        (false, false) => tally.suggest(
            Priority::High,
            "Neither an alcohol nor a food service license is in place: secure these before \
             opening.",
        ),
        _ => {}
    }
    if !terrace {
        tally.suggest(
            Priority::Medium,
            "Request a terrace permit to add seating capacity in good weather.",
        );
    }
    if !late_night {
        tally.suggest(
            Priority::Low,
            "A late-night permit would allow evening and night concepts.",
        );
    }

    tally.finish()
}

#[cfg(test)]
mod tests {
    use horeca_map_score_models::Grade;

    use super::*;

    fn all(value: bool) -> LicenseFeatures {
        LicenseFeatures {
            alcohol_license: Some(value),
            terrace_license: Some(value),
            late_night_license: Some(value),
            food_service_license: Some(value),
            gaming_license: Some(value),
            catering_license: Some(value),
            event_license: Some(value),
        }
    }

    #[test]
    fn weights_sum_to_100() {
        let total = ALCOHOL + FOOD_SERVICE + TERRACE + LATE_NIGHT + CATERING + EVENT + GAMING;
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_true_is_perfect() {
        let outcome = evaluate(Some(&all(true)));
        assert_eq!(outcome.score, 100);
        assert_eq!(Grade::from_score(outcome.score), Grade::APlus);
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn all_false_is_zero() {
        let outcome = evaluate(Some(&all(false)));
        assert_eq!(outcome.score, 0);
        assert_eq!(Grade::from_score(outcome.score), Grade::F);
    }

    #[test]
    fn alcohol_outweighs_gaming() {
        let alcohol = LicenseFeatures {
            alcohol_license: Some(true),
            ..all(false)
        };
        let gaming = LicenseFeatures {
            gaming_license: Some(true),
            ..all(false)
        };
        assert!(evaluate(Some(&alcohol)).score > evaluate(Some(&gaming)).score);
    }

    #[test]
    fn absent_bundle_is_neutral_but_omitted_flags_are_false() {
        assert_eq!(evaluate(None).score, 50);
        assert_eq!(evaluate(Some(&LicenseFeatures::default())).score, 0);
    }

    #[test]
    fn missing_alcohol_with_food_service_is_high_priority() {
        let outcome = evaluate(Some(&LicenseFeatures {
            alcohol_license: Some(false),
            food_service_license: Some(true),
            ..LicenseFeatures::default()
        }));
        let first = &outcome.suggestions[0];
        assert_eq!(first.priority, Priority::High);
        assert!(first.text.contains("alcohol"));
    }
}
