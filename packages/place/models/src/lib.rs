#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Point-of-interest category taxonomy and place record types.
//!
//! Raw records from the map-data provider carry a loose bag of tags. The
//! categorizer collapses those tags into the closed [`PlaceCategory`] set
//! defined here, and the analyzer works exclusively on [`NearbyPlace`]
//! values that have already been categorized and distance-stamped.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Closed set of categories every nearby place is sorted into.
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
pub enum PlaceCategory {
    /// Direct competitors: restaurants, fast food, bars and pubs.
    HorecaConcurrent,
    /// Hospitality that draws visitors without competing head-on (cafés,
    /// ice cream parlours).
    HorecaComplementair,
    /// Supermarkets and convenience stores.
    Supermarkt,
    /// Public transport stops, stations and parking.
    Transport,
    /// Offices of any kind.
    Kantoor,
    /// Schools, colleges and universities.
    Onderwijs,
    /// Shops and every place no other rule claims.
    Winkel,
    /// Theatres, cinemas and museums.
    Cultuur,
}

impl PlaceCategory {
    /// Returns `true` for both hospitality categories.
    #[must_use]
    pub const fn is_horeca(self) -> bool {
        matches!(self, Self::HorecaConcurrent | Self::HorecaComplementair)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::HorecaConcurrent,
            Self::HorecaComplementair,
            Self::Supermarkt,
            Self::Transport,
            Self::Kantoor,
            Self::Onderwijs,
            Self::Winkel,
            Self::Cultuur,
        ]
    }
}

/// The category-indicating tags of a raw place record.
///
/// Every field is optional; an entirely empty bag is valid input and
/// classifies to the default category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlaceTags {
    /// `amenity=*` (e.g. `"restaurant"`, `"cafe"`, `"parking"`).
    #[serde(default)]
    pub amenity: Option<String>,
    /// `shop=*` (e.g. `"supermarket"`, `"mall"`).
    #[serde(default)]
    pub shop: Option<String>,
    /// `office=*`; any value marks the place as an office.
    #[serde(default)]
    pub office: Option<String>,
    /// `railway=*` (only `"station"` is significant).
    #[serde(default)]
    pub railway: Option<String>,
    /// `public_transport=*`; any value marks a transit stop.
    #[serde(default)]
    pub public_transport: Option<String>,
}

/// A place record as returned by the map-data provider, before
/// categorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    /// Display name, when the provider knows one.
    pub name: Option<String>,
    /// Category-indicating tags.
    #[serde(default)]
    pub tags: PlaceTags,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
}

/// A categorized place near the analyzed property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPlace {
    /// Display name (falls back to the category label).
    pub name: String,
    /// The raw tag value that decided the category (e.g. `"restaurant"`,
    /// `"station"`, `"bus_stop"`).
    #[serde(rename = "type")]
    pub place_type: String,
    /// Category the place was sorted into.
    pub category: PlaceCategory,
    /// Human-readable label for the category (e.g. `"Restaurant"`).
    pub label: String,
    /// Great-circle distance from the property in meters.
    pub distance: f64,
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lng: f64,
}
