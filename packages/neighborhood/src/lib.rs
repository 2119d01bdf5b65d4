#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Neighborhood statistics, buzz index and narrative summary.
//!
//! Turns a list of categorized, distance-stamped places into a
//! [`BuurtAnalysis`]: the places partitioned by role, a handful of 0-10
//! sub-scores, the composite buzz index and a templated summary. The
//! analysis is total; an empty place list yields the lowest bands
//! everywhere.

pub mod summary;

use horeca_map_neighborhood_models::{
    BuurtAnalysis, BuurtStats, HorecaDensity, MAX_BUZZ_INDEX, MIN_BUZZ_INDEX,
};
use horeca_map_place_models::{NearbyPlace, PlaceCategory};

/// Transit within this distance (meters) counts towards the transport score.
pub const TRANSPORT_WALKING_DISTANCE: f64 = 300.0;

/// Maximum value of the transport and facilities sub-scores.
const MAX_SUB_SCORE: u32 = 10;

/// Analyzes the places found within `radius_meters` of a property.
#[must_use]
pub fn analyze_neighborhood(places: &[NearbyPlace], radius_meters: u32) -> BuurtAnalysis {
    let of = |category: PlaceCategory| -> Vec<NearbyPlace> {
        places
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    };

    let concurrenten = of(PlaceCategory::HorecaConcurrent);
    let complementair = of(PlaceCategory::HorecaComplementair);
    let transport = of(PlaceCategory::Transport);
    let kantoren = count(places, PlaceCategory::Kantoor);
    let winkels = count(places, PlaceCategory::Winkel);
    let onderwijs = count(places, PlaceCategory::Onderwijs);
    let cultuur = count(places, PlaceCategory::Cultuur);

    let voorzieningen: Vec<NearbyPlace> = places
        .iter()
        .filter(|p| {
            matches!(
                p.category,
                PlaceCategory::Winkel | PlaceCategory::Onderwijs | PlaceCategory::Cultuur
            )
        })
        .cloned()
        .collect();

    let horeca_count = to_u32(concurrenten.len() + complementair.len());
    let transport_score = transport_score(&transport);
    let voorzieningen_score = voorzieningen_score(winkels, onderwijs, cultuur);

    let stats = BuurtStats {
        horeca_count,
        horeca_density: horeca_density(horeca_count),
        transport_score,
        voorzieningen_score,
        kantoren_nabij: kantoren,
        concurrent_radius: radius_meters,
    };

    let buzz_index = buzz_index(&stats);
    let stations = stations(&transport);

    let summary = summary::build(&summary::SummaryInput {
        buzz_index,
        concurrenten: concurrenten.len(),
        stations,
        transport: transport.len(),
        kantoren: kantoren as usize,
    });

    log::debug!(
        "Neighborhood within {radius_meters}m: horeca={horeca_count} transport={transport_score} \
         voorzieningen={voorzieningen_score} kantoren={kantoren} buzz={buzz_index}"
    );

    BuurtAnalysis {
        concurrenten,
        complementair,
        transport,
        voorzieningen,
        stats,
        buzz_index,
        summary,
    }
}

/// Density band: more than 15 venues is high, more than 5 is average.
#[must_use]
pub const fn horeca_density(horeca_count: u32) -> HorecaDensity {
    if horeca_count > 15 {
        HorecaDensity::Hoog
    } else if horeca_count > 5 {
        HorecaDensity::Gemiddeld
    } else {
        HorecaDensity::Laag
    }
}

/// Two points per transit place within walking distance plus three per
/// station, capped at 10.
#[must_use]
pub fn transport_score(transport: &[NearbyPlace]) -> u8 {
    let walkable = to_u32(
        transport
            .iter()
            .filter(|p| p.distance <= TRANSPORT_WALKING_DISTANCE)
            .count(),
    );
    let stations = to_u32(stations(transport));

    cap(walkable.saturating_mul(2).saturating_add(stations.saturating_mul(3)))
}

/// 1.5 per shop, 2 per school and 1.5 per cultural venue, rounded and
/// capped at 10.
#[must_use]
pub fn voorzieningen_score(winkels: u32, onderwijs: u32, cultuur: u32) -> u8 {
    let raw = 1.5f64.mul_add(
        f64::from(winkels),
        2.0f64.mul_add(f64::from(onderwijs), 1.5 * f64::from(cultuur)),
    );
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = raw.round().min(f64::from(MAX_SUB_SCORE)) as u32;
    cap(rounded)
}

/// Composite 1-10 activity index from horeca, transport, facilities and
/// office presence.
#[must_use]
pub fn buzz_index(stats: &BuurtStats) -> u8 {
    let horeca = if stats.horeca_count > 10 {
        3
    } else if stats.horeca_count > 5 {
        2
    } else {
        1
    };
    let transport = if stats.transport_score > 5 { 2 } else { 1 };
    let voorzieningen = if stats.voorzieningen_score > 5 { 2 } else { 1 };
    let kantoren = if stats.kantoren_nabij > 3 {
        2
    } else if stats.kantoren_nabij > 0 {
        1
    } else {
        0
    };

    (horeca + transport + voorzieningen + kantoren).clamp(MIN_BUZZ_INDEX, MAX_BUZZ_INDEX)
}

fn stations(transport: &[NearbyPlace]) -> usize {
    transport.iter().filter(|p| p.place_type == "station").count()
}

fn count(places: &[NearbyPlace], category: PlaceCategory) -> u32 {
    to_u32(places.iter().filter(|p| p.category == category).count())
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn cap(score: u32) -> u8 {
    u8::try_from(score.min(MAX_SUB_SCORE)).unwrap_or(u8::MAX)
}
