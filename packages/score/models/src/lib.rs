#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Property feature bundles, grades and score result types.
//!
//! A property is described by five independent, optional feature
//! sub-bundles (location, licenses, facilities, condition and
//! price/quality). Each attribute inside a sub-bundle is optional as well;
//! the scoring engine treats anything missing as a neutral contribution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

// ── Grades, factors and priorities ──────────────────────────────────

/// Letter grade for a 0-100 score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Grade {
    /// 90 and up.
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    /// 80-89.
    A,
    /// 70-79.
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPlus,
    /// 60-69.
    B,
    /// 50-59.
    #[serde(rename = "C+")]
    #[strum(serialize = "C+")]
    CPlus,
    /// 40-49.
    C,
    /// 25-39.
    D,
    /// Below 25.
    F,
}

impl Grade {
    /// Band table, best grade first.
    const BANDS: &'static [(u8, Self)] = &[
        (90, Self::APlus),
        (80, Self::A),
        (70, Self::BPlus),
        (60, Self::B),
        (50, Self::CPlus),
        (40, Self::C),
        (25, Self::D),
    ];

    /// Grades a 0-100 score. The same table applies to factor scores and
    /// to the overall score.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        Self::BANDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(Self::F, |(_, grade)| *grade)
    }

    /// Lowest score that still earns this grade.
    #[must_use]
    pub const fn min_score(self) -> u8 {
        match self {
            Self::APlus => 90,
            Self::A => 80,
            Self::BPlus => 70,
            Self::B => 60,
            Self::CPlus => 50,
            Self::C => 40,
            Self::D => 25,
            Self::F => 0,
        }
    }

    /// Returns all variants of this enum, best first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::APlus,
            Self::A,
            Self::BPlus,
            Self::B,
            Self::CPlus,
            Self::C,
            Self::D,
            Self::F,
        ]
    }
}

/// One of the five independently weighted score factors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Factor {
    /// Footfall, neighborhood, accessibility and visibility.
    Location,
    /// Operating licenses and permits.
    Licenses,
    /// Kitchen, extraction, storage, seating and floor area.
    Facilities,
    /// Building age, renovation, installations and energy label.
    Condition,
    /// Rent, key money, revenue potential and lease terms.
    PriceQuality,
}

impl Factor {
    /// Weight as a whole percentage. The five percentages sum to 100.
    #[must_use]
    pub const fn weight_percent(self) -> u8 {
        match self {
            Self::Location => 30,
            Self::Licenses | Self::Facilities => 20,
            Self::Condition | Self::PriceQuality => 15,
        }
    }

    /// Weight as a fraction of the overall score.
    #[must_use]
    pub fn weight(self) -> f64 {
        f64::from(self.weight_percent()) / 100.0
    }

    /// Returns all variants of this enum, in evaluation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Location,
            Self::Licenses,
            Self::Facilities,
            Self::Condition,
            Self::PriceQuality,
        ]
    }
}

/// Urgency of an improvement suggestion. Orders `High` first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Priority {
    /// Address before anything else.
    High,
    /// Worth doing.
    Medium,
    /// Nice to have.
    Low,
}

// ── Feature bundles ─────────────────────────────────────────────────

/// Quality grade of kitchen or extraction equipment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentGrade {
    /// Not present.
    None,
    /// Minimal, e.g. a pantry kitchen.
    Basic,
    /// Adequate for a regular menu.
    Standard,
    /// Full commercial installation.
    Professional,
}

/// EU building energy label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum EnergyLabel {
    /// Most efficient.
    A,
    /// Label B.
    B,
    /// Label C.
    C,
    /// Label D.
    D,
    /// Label E.
    E,
    /// Label F.
    F,
    /// Least efficient.
    G,
}

/// Location attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationFeatures {
    /// Estimated passers-by per day.
    pub footfall_estimate: Option<u32>,
    /// Neighborhood rating, 0-10.
    pub neighborhood_rating: Option<f64>,
    /// Distance to the nearest public transport stop in meters.
    pub public_transport_distance: Option<f64>,
    /// Distance to the nearest parking in meters.
    pub parking_distance: Option<f64>,
    /// Located in a tourist area.
    pub tourist_area: Option<bool>,
    /// Highly visible from the street.
    pub high_visibility: Option<bool>,
}

/// License and permit flags.
///
/// When this whole sub-bundle is present, a flag that is left out counts
/// as `false`. When the sub-bundle itself is absent the licenses factor is
/// neutral instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenseFeatures {
    /// Alcohol license (drank- en horecavergunning).
    pub alcohol_license: Option<bool>,
    /// Terrace permit.
    pub terrace_license: Option<bool>,
    /// Late-night opening permit.
    pub late_night_license: Option<bool>,
    /// Food service license.
    pub food_service_license: Option<bool>,
    /// Gaming machine permit.
    pub gaming_license: Option<bool>,
    /// Catering license.
    pub catering_license: Option<bool>,
    /// Event permit.
    pub event_license: Option<bool>,
}

/// Facility attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacilityFeatures {
    /// Kitchen grade.
    pub kitchen_type: Option<EquipmentGrade>,
    /// Extraction (afzuiging) grade.
    pub extraction_type: Option<EquipmentGrade>,
    /// Walk-in cold storage.
    pub cold_storage: Option<bool>,
    /// Cellar.
    pub cellar: Option<bool>,
    /// Accessible toilets.
    pub accessible_toilets: Option<bool>,
    /// Staff area.
    pub staff_area: Option<bool>,
    /// Dry storage space.
    pub storage_space: Option<bool>,
    /// Indoor seats.
    pub seating_capacity_inside: Option<u32>,
    /// Terrace seats.
    pub seating_capacity_terrace: Option<u32>,
    /// Floor area in square meters.
    pub square_meters: Option<f64>,
}

/// Building condition attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionFeatures {
    /// Construction year.
    pub build_year: Option<i32>,
    /// Year of the last major renovation.
    pub last_renovation_year: Option<i32>,
    /// Overall condition, 0-10.
    pub overall_condition_rating: Option<f64>,
    /// Electrical installation, 0-10.
    pub electrical_rating: Option<f64>,
    /// Plumbing, 0-10.
    pub plumbing_rating: Option<f64>,
    /// Heating, ventilation and air conditioning, 0-10.
    pub hvac_rating: Option<f64>,
    /// Energy label.
    pub energy_label: Option<EnergyLabel>,
}

/// Price and lease attributes. Amounts in euros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceQualityFeatures {
    /// Monthly rent.
    pub monthly_rent: Option<f64>,
    /// Key money (overnamesom) payable to the previous tenant.
    pub key_money: Option<f64>,
    /// Expected annual revenue.
    pub revenue_potential: Option<f64>,
    /// Annual rent per square meter.
    pub price_per_sqm: Option<f64>,
    /// Market average annual rent per square meter.
    pub market_average_price_per_sqm: Option<f64>,
    /// Lease term in years.
    pub lease_duration_years: Option<f64>,
    /// Rent is below market level.
    pub below_market_rent: Option<bool>,
}

/// Everything known about a property, grouped per factor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFeatureBundle {
    /// Location attributes.
    pub location: Option<LocationFeatures>,
    /// License flags.
    pub licenses: Option<LicenseFeatures>,
    /// Facility attributes.
    pub facilities: Option<FacilityFeatures>,
    /// Building condition.
    pub condition: Option<ConditionFeatures>,
    /// Price and lease terms.
    pub price_quality: Option<PriceQualityFeatures>,
}

// ── Results ─────────────────────────────────────────────────────────

/// Score of a single factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    /// 0-100.
    pub score: u8,
    /// Fixed weight, 0-1.
    pub weight: f64,
    /// Grade for `score`.
    pub grade: Grade,
}

impl FactorScore {
    /// Builds the score entry for `factor`, deriving weight and grade.
    #[must_use]
    pub fn new(factor: Factor, score: u8) -> Self {
        let score = score.min(100);
        Self {
            score,
            weight: factor.weight(),
            grade: Grade::from_score(score),
        }
    }
}

/// Per-factor scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Location factor.
    pub location: FactorScore,
    /// Licenses factor.
    pub licenses: FactorScore,
    /// Facilities factor.
    pub facilities: FactorScore,
    /// Condition factor.
    pub condition: FactorScore,
    /// Price/quality factor.
    pub price_quality: FactorScore,
}

impl ScoreBreakdown {
    /// Returns the score for one factor.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> &FactorScore {
        match factor {
            Factor::Location => &self.location,
            Factor::Licenses => &self.licenses,
            Factor::Facilities => &self.facilities,
            Factor::Condition => &self.condition,
            Factor::PriceQuality => &self.price_quality,
        }
    }

    /// Weighted sum of all factor scores in hundredths of a point.
    ///
    /// Computed on integer percentages so band edges such as 49.5 are exact.
    #[must_use]
    pub fn weighted_percent_total(&self) -> u32 {
        Factor::all()
            .iter()
            .map(|f| u32::from(self.get(*f).score) * u32::from(f.weight_percent()))
            .sum()
    }

    /// Overall 0-100 score: the weighted sum rounded half up.
    #[must_use]
    pub fn overall_score(&self) -> u8 {
        let rounded = (self.weighted_percent_total() + 50) / 100;
        u8::try_from(rounded.min(100)).unwrap_or(100)
    }
}

/// An improvement suggestion tied to a factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Factor the suggestion improves.
    pub factor: Factor,
    /// Human-readable advice.
    pub text: String,
    /// Urgency.
    pub priority: Priority,
}

/// Complete score for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Opaque identifier supplied by the caller.
    pub property_id: String,
    /// Grade for `numeric_score`.
    pub grade: Grade,
    /// Weighted overall score, 0-100.
    pub numeric_score: u8,
    /// Per-factor scores.
    pub breakdown: ScoreBreakdown,
    /// Suggestions, high priority first.
    pub suggestions: Vec<Suggestion>,
    /// When the score was computed.
    pub timestamp: DateTime<Utc>,
}

/// Presentation colors for a grade badge (Tailwind class tokens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeColors {
    /// Background class.
    pub background: &'static str,
    /// Text class.
    pub text: &'static str,
    /// Border class.
    pub border: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn weights_sum_to_one() {
        let percent: u32 = Factor::all()
            .iter()
            .map(|f| u32::from(f.weight_percent()))
            .sum();
        assert_eq!(percent, 100);

        let total: f64 = Factor::all().iter().map(|f| f.weight()).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((Factor::Location.weight() - 0.30).abs() < f64::EPSILON);
        assert!((Factor::Licenses.weight() - 0.20).abs() < f64::EPSILON);
    }

    fn breakdown(scores: [u8; 5]) -> ScoreBreakdown {
        let [location, licenses, facilities, condition, price_quality] = scores;
        ScoreBreakdown {
            location: FactorScore::new(Factor::Location, location),
            licenses: FactorScore::new(Factor::Licenses, licenses),
            facilities: FactorScore::new(Factor::Facilities, facilities),
            condition: FactorScore::new(Factor::Condition, condition),
            price_quality: FactorScore::new(Factor::PriceQuality, price_quality),
        }
    }

    #[test]
    fn weighted_percent_total_is_exact() {
        assert_eq!(breakdown([0, 81, 7, 1, 5]).weighted_percent_total(), 1850);
        assert_eq!(breakdown([100; 5]).weighted_percent_total(), 10_000);
        assert_eq!(breakdown([0; 5]).weighted_percent_total(), 0);
    }

    #[test]
    fn overall_score_rounds_half_up() {
        // 18.5 exactly; a float sum lands just below the half.
        assert_eq!(breakdown([0, 81, 7, 1, 5]).overall_score(), 19);
        // 49.5 exactly, on the C/C+ band edge.
        let edge = breakdown([55, 45, 45, 50, 50]);
        assert_eq!(edge.weighted_percent_total(), 4950);
        assert_eq!(edge.overall_score(), 50);
        assert_eq!(Grade::from_score(edge.overall_score()), Grade::CPlus);
        assert_eq!(breakdown([100; 5]).overall_score(), 100);
        assert_eq!(breakdown([0; 5]).overall_score(), 0);
    }

    #[test]
    fn grade_bands() {
        assert_eq!(Grade::from_score(100), Grade::APlus);
        assert_eq!(Grade::from_score(90), Grade::APlus);
        assert_eq!(Grade::from_score(89), Grade::A);
        assert_eq!(Grade::from_score(70), Grade::BPlus);
        assert_eq!(Grade::from_score(60), Grade::B);
        assert_eq!(Grade::from_score(50), Grade::CPlus);
        assert_eq!(Grade::from_score(40), Grade::C);
        assert_eq!(Grade::from_score(25), Grade::D);
        assert_eq!(Grade::from_score(24), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn grade_min_score_consistent_with_bands() {
        for grade in Grade::all() {
            assert_eq!(Grade::from_score(grade.min_score()), *grade);
        }
    }

    #[test]
    fn grade_string_forms() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::from_str("C+").unwrap(), Grade::CPlus);
        assert_eq!(serde_json::to_string(&Grade::BPlus).unwrap(), "\"B+\"");
    }

    #[test]
    fn high_priority_sorts_first() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn bundle_deserializes_camel_case_with_gaps() {
        let bundle: PropertyFeatureBundle = serde_json::from_value(serde_json::json!({
            "location": { "footfallEstimate": 5000, "touristArea": true },
            "facilities": { "kitchenType": "professional" },
            "condition": { "energyLabel": "G" },
            "priceQuality": { "belowMarketRent": true }
        }))
        .unwrap();

        let location = bundle.location.unwrap();
        assert_eq!(location.footfall_estimate, Some(5000));
        assert!(location.parking_distance.is_none());
        assert!(bundle.licenses.is_none());
        assert_eq!(
            bundle.facilities.unwrap().kitchen_type,
            Some(EquipmentGrade::Professional)
        );
        assert_eq!(bundle.condition.unwrap().energy_label, Some(EnergyLabel::G));
        assert_eq!(bundle.price_quality.unwrap().below_market_rent, Some(true));
    }

    #[test]
    fn empty_json_is_empty_bundle() {
        let bundle: PropertyFeatureBundle = serde_json::from_str("{}").unwrap();
        assert_eq!(bundle, PropertyFeatureBundle::default());
    }
}
