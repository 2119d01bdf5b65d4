#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Weighted multi-factor quality score for hospitality properties.
//!
//! Five factors are scored independently on 0-100 from the matching
//! sub-bundle of a [`PropertyFeatureBundle`]:
//!
//! | Factor | Weight |
//! |---|---|
//! | location | 0.30 |
//! | licenses | 0.20 |
//! | facilities | 0.20 |
//! | condition | 0.15 |
//! | price/quality | 0.15 |
//!
//! The overall score is the weighted sum rounded half up, computed on
//! integer percentages. Factor scores and the
//! overall score share one grade table ([`Grade::from_score`]). Every
//! factor also emits improvement suggestions, which are returned ordered
//! high → medium → low priority.
//!
//! Scoring is total: missing sub-bundles and missing attributes are
//! neutral contributions, never errors.

pub mod factors;
pub mod presentation;

use chrono::{DateTime, Datelike, Utc};
use horeca_map_score_models::{
    Factor, FactorScore, Grade, PropertyFeatureBundle, ScoreBreakdown, ScoreResult, Suggestion,
};

/// Scores a property, stamped with the current time.
#[must_use]
pub fn score_property(property_id: &str, bundle: &PropertyFeatureBundle) -> ScoreResult {
    score_property_at(property_id, bundle, Utc::now())
}

/// Scores a property as of `timestamp`.
///
/// Building and renovation ages are measured against the year of
/// `timestamp`, so identical inputs always produce identical results.
#[must_use]
pub fn score_property_at(
    property_id: &str,
    bundle: &PropertyFeatureBundle,
    timestamp: DateTime<Utc>,
) -> ScoreResult {
    let location = factors::location::evaluate(bundle.location.as_ref());
    let licenses = factors::licenses::evaluate(bundle.licenses.as_ref());
    let facilities = factors::facilities::evaluate(bundle.facilities.as_ref());
    let condition = factors::condition::evaluate(bundle.condition.as_ref(), timestamp.year());
    let price_quality = factors::price_quality::evaluate(bundle.price_quality.as_ref());

    let breakdown = ScoreBreakdown {
        location: FactorScore::new(Factor::Location, location.score),
        licenses: FactorScore::new(Factor::Licenses, licenses.score),
        facilities: FactorScore::new(Factor::Facilities, facilities.score),
        condition: FactorScore::new(Factor::Condition, condition.score),
        price_quality: FactorScore::new(Factor::PriceQuality, price_quality.score),
    };

    let numeric_score = breakdown.overall_score();

    let outcomes = [location, licenses, facilities, condition, price_quality];
    let mut suggestions: Vec<Suggestion> = outcomes
        .into_iter()
        .flat_map(|outcome| outcome.suggestions)
        .collect();
    // Stable: rule order is kept within each priority.
    suggestions.sort_by_key(|s| s.priority);

    log::debug!(
        "Scored property {property_id}: {numeric_score} ({} suggestions)",
        suggestions.len()
    );

    ScoreResult {
        property_id: property_id.to_string(),
        grade: Grade::from_score(numeric_score),
        numeric_score,
        breakdown,
        suggestions,
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use horeca_map_score_models::{
        ConditionFeatures, EnergyLabel, EquipmentGrade, FacilityFeatures, LicenseFeatures,
        LocationFeatures, PriceQualityFeatures, Priority,
    };

    use super::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn mixed_bundle() -> PropertyFeatureBundle {
        PropertyFeatureBundle {
            location: Some(LocationFeatures {
                footfall_estimate: Some(300),
                high_visibility: Some(false),
                ..LocationFeatures::default()
            }),
            licenses: Some(LicenseFeatures {
                alcohol_license: Some(false),
                food_service_license: Some(true),
                ..LicenseFeatures::default()
            }),
            facilities: Some(FacilityFeatures {
                kitchen_type: Some(EquipmentGrade::Basic),
                cold_storage: Some(false),
                ..FacilityFeatures::default()
            }),
            condition: Some(ConditionFeatures {
                build_year: Some(1920),
                last_renovation_year: Some(1990),
                overall_condition_rating: Some(4.0),
                electrical_rating: Some(3.0),
                plumbing_rating: Some(4.0),
                hvac_rating: Some(3.0),
                energy_label: Some(EnergyLabel::G),
            }),
            price_quality: Some(PriceQualityFeatures {
                price_per_sqm: Some(400.0),
                market_average_price_per_sqm: Some(300.0),
                key_money: Some(150_000.0),
                ..PriceQualityFeatures::default()
            }),
        }
    }

    #[test]
    fn empty_bundle_is_mid_range() {
        let result = score_property_at("empty", &PropertyFeatureBundle::default(), at());
        assert!((40..=60).contains(&result.numeric_score));
        assert_eq!(result.numeric_score, 50);
        assert_eq!(result.grade, Grade::CPlus);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn numeric_score_is_rounded_weighted_sum() {
        let result = score_property_at("p1", &mixed_bundle(), at());
        let percent: u32 = Factor::all()
            .iter()
            .map(|f| u32::from(result.breakdown.get(*f).score) * u32::from(f.weight_percent()))
            .sum();
        assert_eq!(u32::from(result.numeric_score), (percent + 50) / 100);
        assert_eq!(result.grade, Grade::from_score(result.numeric_score));
    }

    #[test]
    fn breakdown_grades_match_scores() {
        let result = score_property_at("p1", &mixed_bundle(), at());
        for factor in Factor::all() {
            let entry = result.breakdown.get(*factor);
            assert_eq!(entry.grade, Grade::from_score(entry.score));
            assert!((entry.weight - factor.weight()).abs() < f64::EPSILON);
        }
        assert!(result.breakdown.condition.score <= 40);
    }

    #[test]
    fn suggestions_are_ordered_by_priority() {
        let result = score_property_at("p1", &mixed_bundle(), at());
        assert!(result.suggestions.len() > 5);
        for pair in result.suggestions.windows(2) {
            assert!(pair[0].priority <= pair[1].priority);
        }

        let last_high = result
            .suggestions
            .iter()
            .rposition(|s| s.priority == Priority::High)
            .unwrap();
        let first_low = result
            .suggestions
            .iter()
            .position(|s| s.priority == Priority::Low)
            .unwrap();
        assert!(last_high < first_low);
    }

    #[test]
    fn high_priority_group_keeps_factor_order() {
        let result = score_property_at("p1", &mixed_bundle(), at());
        let high_factors: Vec<Factor> = result
            .suggestions
            .iter()
            .filter(|s| s.priority == Priority::High)
            .map(|s| s.factor)
            .collect();
        let mut sorted = high_factors.clone();
        sorted.sort();
        assert_eq!(high_factors, sorted);
    }

    #[test]
    fn missing_alcohol_license_is_flagged() {
        let bundle = PropertyFeatureBundle {
            licenses: Some(LicenseFeatures {
                alcohol_license: Some(false),
                food_service_license: Some(true),
                ..LicenseFeatures::default()
            }),
            ..PropertyFeatureBundle::default()
        };
        let result = score_property_at("p2", &bundle, at());
        assert!(
            result
                .suggestions
                .iter()
                .any(|s| s.priority == Priority::High && s.text.contains("alcohol"))
        );
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let a = score_property_at("p3", &mixed_bundle(), at());
        let b = score_property_at("p3", &mixed_bundle(), at());
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_camel_case() {
        let result = score_property_at("p4", &PropertyFeatureBundle::default(), at());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["propertyId"], "p4");
        assert_eq!(json["numericScore"], 50);
        assert_eq!(json["grade"], "C+");
        assert_eq!(json["breakdown"]["priceQuality"]["weight"], 0.15);
        assert_eq!(json["breakdown"]["location"]["grade"], "C+");
    }
}
