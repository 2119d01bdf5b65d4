#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Neighborhood ("buurt") statistics and buzz index result types.
//!
//! A [`BuurtAnalysis`] is derived fresh from one list of nearby places and
//! is never mutated afterwards.

use horeca_map_place_models::NearbyPlace;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Lowest possible buzz index.
pub const MIN_BUZZ_INDEX: u8 = 1;
/// Highest possible buzz index.
pub const MAX_BUZZ_INDEX: u8 = 10;

/// Density band of hospitality venues around the property.
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
pub enum HorecaDensity {
    /// Five or fewer venues.
    Laag,
    /// Six to fifteen venues.
    Gemiddeld,
    /// More than fifteen venues.
    Hoog,
}

/// Aggregate statistics for the places around a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuurtStats {
    /// Competing plus complementary hospitality venues.
    pub horeca_count: u32,
    /// Density band derived from `horeca_count`.
    pub horeca_density: HorecaDensity,
    /// Public transport accessibility, 0-10.
    pub transport_score: u8,
    /// Shops, education and culture nearby, 0-10.
    pub voorzieningen_score: u8,
    /// Number of offices nearby.
    pub kantoren_nabij: u32,
    /// Radius (meters) the places were fetched with.
    pub concurrent_radius: u32,
}

/// Full neighborhood analysis for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuurtAnalysis {
    /// Directly competing hospitality venues.
    pub concurrenten: Vec<NearbyPlace>,
    /// Complementary hospitality venues.
    pub complementair: Vec<NearbyPlace>,
    /// Transit stops, stations and parking.
    pub transport: Vec<NearbyPlace>,
    /// Shops, education and culture.
    pub voorzieningen: Vec<NearbyPlace>,
    /// Aggregate statistics.
    pub stats: BuurtStats,
    /// Composite activity measure, always within
    /// [`MIN_BUZZ_INDEX`]..=[`MAX_BUZZ_INDEX`].
    pub buzz_index: u8,
    /// Templated narrative summary.
    pub summary: String,
}

impl BuurtAnalysis {
    /// Counts hospitality venues (competing and complementary) whose raw
    /// type is one of `types`.
    #[must_use]
    pub fn horeca_of_type(&self, types: &[&str]) -> usize {
        self.concurrenten
            .iter()
            .chain(&self.complementair)
            .filter(|p| types.iter().any(|t| p.place_type.eq_ignore_ascii_case(t)))
            .count()
    }

    /// Number of railway or public-transport stations nearby.
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.transport
            .iter()
            .filter(|p| p.place_type == "station")
            .count()
    }
}
