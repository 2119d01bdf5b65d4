#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Place categorization, great-circle distance and the nearby-POI client.
//!
//! The pipeline from coordinates to analyzable places is:
//!
//! 1. [`overpass::fetch_raw_places`] asks the map-data provider for raw
//!    records around a point. Every failure degrades to an empty list.
//! 2. [`to_nearby_places`] runs each record through the
//!    [`categorize`] rules and stamps its [`distance::haversine_distance`]
//!    from the property.
//!
//! The provider endpoint is configured in `services/overpass.toml` and
//! loaded through the [`registry`].

pub mod categorize;
pub mod distance;
pub mod overpass;
pub mod registry;

use horeca_map_place_models::{NearbyPlace, RawPlace};
use thiserror::Error;

pub use categorize::{Classification, categorize};
pub use distance::haversine_distance;

/// Errors from the POI fetch boundary.
///
/// Returned by [`overpass::try_fetch_raw_places`].
/// [`overpass::fetch_raw_places`] logs them and degrades to an empty list.
#[derive(Debug, Error)]
pub enum PlaceError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider answered with a non-success status.
    #[error("POI provider returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Response was valid JSON but not in the expected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },
}

/// Categorizes raw records and stamps their distance from `(lat, lng)`.
///
/// Records without a name get their category label as display name. The
/// result is ordered nearest-first; records at equal distance keep their
/// input order.
#[must_use]
pub fn to_nearby_places(lat: f64, lng: f64, raws: &[RawPlace]) -> Vec<NearbyPlace> {
    let mut places: Vec<NearbyPlace> = raws
        .iter()
        .map(|raw| {
            let classification = categorize(&raw.tags);
            let distance = haversine_distance(lat, lng, raw.latitude, raw.longitude);
            NearbyPlace {
                name: raw
                    .name
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| classification.label.to_string()),
                place_type: classification.place_type,
                category: classification.category,
                label: classification.label.to_string(),
                distance,
                lat: raw.latitude,
                lng: raw.longitude,
            }
        })
        .collect();

    places.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    log::debug!("Categorized {} nearby places", places.len());

    places
}

#[cfg(test)]
mod tests {
    use horeca_map_place_models::{PlaceCategory, PlaceTags};

    use super::*;

    fn raw(name: Option<&str>, amenity: &str, lat: f64, lng: f64) -> RawPlace {
        RawPlace {
            name: name.map(String::from),
            tags: PlaceTags {
                amenity: Some(amenity.to_string()),
                ..PlaceTags::default()
            },
            latitude: lat,
            longitude: lng,
        }
    }

    #[test]
    fn sorts_nearest_first_and_stamps_distance() {
        let raws = vec![
            raw(Some("Far"), "restaurant", 52.3800, 4.9000),
            raw(Some("Near"), "cafe", 52.3701, 4.9000),
        ];
        let places = to_nearby_places(52.37, 4.90, &raws);

        assert_eq!(places[0].name, "Near");
        assert_eq!(places[0].category, PlaceCategory::HorecaComplementair);
        assert!(places[0].distance < places[1].distance);
        assert!((places[1].distance - 1112.0).abs() < 5.0);
    }

    #[test]
    fn unnamed_places_use_label() {
        let places = to_nearby_places(52.37, 4.90, &[raw(None, "pub", 52.37, 4.90)]);
        assert_eq!(places[0].name, "Bar");
        assert_eq!(places[0].place_type, "pub");
        assert!(places[0].distance.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(to_nearby_places(0.0, 0.0, &[]).is_empty());
    }
}
