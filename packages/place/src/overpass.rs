//! `OpenStreetMap` Overpass API client for nearby points of interest.
//!
//! Sends a single Overpass QL query for every `amenity`, `shop`, `office`,
//! `public_transport` and `railway=station` feature within a radius of
//! the property. Ways and relations are requested with `out center` so
//! every element carries a single coordinate.
//!
//! [`fetch_raw_places`] is the boundary of the analysis core: timeouts,
//! non-success statuses and malformed payloads are logged and turned into
//! an empty list. No retries.
//!
//! See <https://wiki.openstreetmap.org/wiki/Overpass_API/Overpass_QL>

use std::time::Duration;

use horeca_map_place_models::{NearbyPlace, PlaceTags, RawPlace};

use crate::{PlaceError, registry::PoiService};

/// Builds an HTTP client with the service's timeout and user agent.
///
/// # Errors
///
/// Returns [`PlaceError::Http`] if the TLS backend cannot be initialized.
pub fn build_client(service: &PoiService) -> Result<reqwest::Client, PlaceError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(service.timeout_secs))
        .user_agent(service.user_agent.clone())
        .build()?)
}

/// Builds the Overpass QL query for all relevant features around a point.
#[must_use]
pub fn build_query(lat: f64, lng: f64, radius_meters: u32, timeout_secs: u64) -> String {
    let around = format!("(around:{radius_meters},{lat},{lng})");
    let selectors = [
        "[\"amenity\"]",
        "[\"shop\"]",
        "[\"office\"]",
        "[\"public_transport\"]",
        "[\"railway\"=\"station\"]",
    ];

    let mut query = format!("[out:json][timeout:{timeout_secs}];(");
    for selector in selectors {
        query.push_str("nwr");
        query.push_str(selector);
        query.push_str(&around);
        query.push(';');
    }
    query.push_str(");out center;");
    query
}

/// Fetches raw place records, surfacing every failure as an error.
///
/// # Errors
///
/// Returns [`PlaceError`] if the request fails or times out, the provider
/// answers with a non-success status, or the body is not an Overpass JSON
/// document.
pub async fn try_fetch_raw_places(
    client: &reqwest::Client,
    service: &PoiService,
    lat: f64,
    lng: f64,
    radius_meters: u32,
) -> Result<Vec<RawPlace>, PlaceError> {
    let query = build_query(lat, lng, radius_meters, service.timeout_secs);

    let resp = client
        .get(&service.endpoint)
        .query(&[("data", query.as_str())])
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(PlaceError::Status {
            status: resp.status().as_u16(),
        });
    }

    let body = resp.text().await?;
    let json: serde_json::Value = serde_json::from_str(&body)?;
    parse_response(&json)
}

/// Fetches raw place records around `(lat, lng)`.
///
/// Never fails: any error is logged at `warn` and an empty list is
/// returned so the analyzer always receives well-formed input.
pub async fn fetch_raw_places(
    client: &reqwest::Client,
    service: &PoiService,
    lat: f64,
    lng: f64,
    radius_meters: u32,
) -> Vec<RawPlace> {
    match try_fetch_raw_places(client, service, lat, lng, radius_meters).await {
        Ok(places) => {
            log::debug!(
                "{} returned {} places within {radius_meters}m of ({lat}, {lng})",
                service.name,
                places.len()
            );
            places
        }
        Err(e) => {
            log::warn!(
                "POI fetch from {} failed, continuing without nearby places: {e}",
                service.name
            );
            Vec::new()
        }
    }
}

/// Fetches, categorizes and distance-stamps the places around a point.
///
/// Uses the service's default radius when `radius_meters` is `None`.
/// Degrades to an empty list on any failure, including client
/// construction.
pub async fn fetch_nearby_places(
    service: &PoiService,
    lat: f64,
    lng: f64,
    radius_meters: Option<u32>,
) -> Vec<NearbyPlace> {
    let radius = radius_meters.unwrap_or(service.default_radius_meters);

    let client = match build_client(service) {
        Ok(client) => client,
        Err(e) => {
            log::warn!("Could not build POI client: {e}");
            return Vec::new();
        }
    };

    let raws = fetch_raw_places(&client, service, lat, lng, radius).await;
    crate::to_nearby_places(lat, lng, &raws)
}

/// Parses an Overpass JSON document into raw place records.
///
/// Elements without any usable coordinate are skipped.
fn parse_response(body: &serde_json::Value) -> Result<Vec<RawPlace>, PlaceError> {
    let elements = body["elements"]
        .as_array()
        .ok_or_else(|| PlaceError::Parse {
            message: "Overpass response has no elements array".to_string(),
        })?;

    let mut places = Vec::with_capacity(elements.len());

    for element in elements {
        let Some((latitude, longitude)) = coordinates(element) else {
            log::trace!("Skipping element without coordinates: {}", element["id"]);
            continue;
        };

        let tags = &element["tags"];
        places.push(RawPlace {
            name: tag(tags, "name"),
            tags: PlaceTags {
                amenity: tag(tags, "amenity"),
                shop: tag(tags, "shop"),
                office: tag(tags, "office"),
                railway: tag(tags, "railway"),
                public_transport: tag(tags, "public_transport"),
            },
            latitude,
            longitude,
        });
    }

    Ok(places)
}

/// Node coordinates, or the `center` Overpass adds for ways and relations.
fn coordinates(element: &serde_json::Value) -> Option<(f64, f64)> {
    let point = if element.get("lat").is_some() {
        element
    } else {
        element.get("center")?
    };
    Some((point["lat"].as_f64()?, point["lon"].as_f64()?))
}

fn tag(tags: &serde_json::Value, key: &str) -> Option<String> {
    tags.get(key).and_then(serde_json::Value::as_str).map(String::from)
}
