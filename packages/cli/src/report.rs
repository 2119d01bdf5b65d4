//! Combined location report produced by the `analyze` command.

use horeca_map_concept_models::{ConceptAnalysis, ConceptInput};
use horeca_map_neighborhood_models::BuurtAnalysis;
use horeca_map_score_models::{
    EquipmentGrade, GradeColors, PropertyFeatureBundle, ScoreResult,
};
use serde::Serialize;

/// Property facts given on the command line. Each one overrides the
/// value derived from the feature bundle.
#[derive(Debug, Clone, Default)]
pub struct PropertyOverrides {
    pub surface: Option<f64>,
    pub has_kitchen: Option<bool>,
    pub has_terrace: Option<bool>,
    pub seating_capacity: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub location: Coordinates,
    pub buurt_analysis: BuurtAnalysis,
    pub score: ScoreResult,
    pub grade_colors: GradeColors,
    pub score_background: &'static str,
    pub concepts: ConceptAnalysis,
}

/// Builds the recommender input from the neighborhood analysis, the
/// feature bundle and any command-line overrides.
#[must_use]
pub fn concept_input(
    buurt_analysis: BuurtAnalysis,
    bundle: &PropertyFeatureBundle,
    overrides: &PropertyOverrides,
) -> ConceptInput {
    let facilities = bundle.facilities.as_ref();

    let surface = overrides
        .surface
        .or_else(|| facilities.and_then(|f| f.square_meters))
        .unwrap_or(0.0);

    let has_kitchen = overrides.has_kitchen.or_else(|| {
        facilities
            .and_then(|f| f.kitchen_type)
            .map(|kitchen| kitchen != EquipmentGrade::None)
    });

    let has_terrace = overrides.has_terrace.or_else(|| {
        facilities
            .and_then(|f| f.seating_capacity_terrace)
            .map(|seats| seats > 0)
            .or_else(|| bundle.licenses.as_ref().and_then(|l| l.terrace_license))
    });

    let seating_capacity = overrides.seating_capacity.or_else(|| {
        facilities.and_then(|f| match (f.seating_capacity_inside, f.seating_capacity_terrace) {
            (None, None) => None,
            (inside, terrace) => Some(inside.unwrap_or(0).saturating_add(terrace.unwrap_or(0))),
        })
    });

    ConceptInput {
        surface,
        buurt_analysis,
        has_kitchen,
        has_terrace,
        seating_capacity,
    }
}

#[cfg(test)]
mod tests {
    use horeca_map_neighborhood::analyze_neighborhood;
    use horeca_map_score_models::{FacilityFeatures, LicenseFeatures};

    use super::*;

    fn bundle() -> PropertyFeatureBundle {
        PropertyFeatureBundle {
            facilities: Some(FacilityFeatures {
                kitchen_type: Some(EquipmentGrade::Basic),
                seating_capacity_inside: Some(30),
                seating_capacity_terrace: Some(12),
                square_meters: Some(110.0),
                ..FacilityFeatures::default()
            }),
            ..PropertyFeatureBundle::default()
        }
    }

    #[test]
    fn derives_context_from_bundle() {
        let input = concept_input(
            analyze_neighborhood(&[], 500),
            &bundle(),
            &PropertyOverrides::default(),
        );
        assert!((input.surface - 110.0).abs() < f64::EPSILON);
        assert_eq!(input.has_kitchen, Some(true));
        assert_eq!(input.has_terrace, Some(true));
        assert_eq!(input.seating_capacity, Some(42));
    }

    #[test]
    fn overrides_win() {
        let overrides = PropertyOverrides {
            surface: Some(60.0),
            has_kitchen: Some(false),
            has_terrace: None,
            seating_capacity: Some(20),
        };
        let input = concept_input(analyze_neighborhood(&[], 500), &bundle(), &overrides);
        assert!((input.surface - 60.0).abs() < f64::EPSILON);
        assert_eq!(input.has_kitchen, Some(false));
        assert_eq!(input.has_terrace, Some(true));
        assert_eq!(input.seating_capacity, Some(20));
    }

    #[test]
    fn terrace_license_implies_terrace_without_seat_count() {
        let bundle = PropertyFeatureBundle {
            licenses: Some(LicenseFeatures {
                terrace_license: Some(true),
                ..LicenseFeatures::default()
            }),
            ..PropertyFeatureBundle::default()
        };
        let input = concept_input(
            analyze_neighborhood(&[], 500),
            &bundle,
            &PropertyOverrides::default(),
        );
        assert_eq!(input.has_terrace, Some(true));
        assert_eq!(input.has_kitchen, None);
        assert!(input.surface.abs() < f64::EPSILON);
    }
}
