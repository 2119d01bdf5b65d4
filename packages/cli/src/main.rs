#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the horeca location analysis.
//!
//! Every command prints JSON to stdout; progress goes through `log`
//! (`RUST_LOG=info` to see it).

mod report;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use horeca_map_place::registry::{PoiService, all_services, default_service};
use horeca_map_place_models::{NearbyPlace, PlaceTags, RawPlace};
use horeca_map_score_models::PropertyFeatureBundle;
use report::{Coordinates, PropertyOverrides, Report};
use serde::de::DeserializeOwned;

#[derive(Parser)]
#[command(name = "horeca_map", about = "Horeca location analysis tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a location: nearby places, property score and concept ranking
    Analyze {
        /// Latitude of the property
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude of the property
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Search radius in meters (defaults to the POI service setting)
        #[arg(long)]
        radius: Option<u32>,
        /// POI service id from the registry
        #[arg(long)]
        service: Option<String>,
        /// Override the POI service endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
        /// Override the POI request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Read raw places from a JSON file instead of querying the POI service
        #[arg(long)]
        places: Option<PathBuf>,
        /// Property feature bundle (JSON). Without it every factor is neutral.
        #[arg(long)]
        features: Option<PathBuf>,
        /// Identifier echoed in the score result
        #[arg(long, default_value = "property")]
        property_id: String,
        /// Floor area in m² (defaults to `facilities.squareMeters`)
        #[arg(long)]
        surface: Option<f64>,
        /// Whether the property has a kitchen
        #[arg(long)]
        has_kitchen: Option<bool>,
        /// Whether the property has a terrace
        #[arg(long)]
        has_terrace: Option<bool>,
        /// Number of seats
        #[arg(long)]
        seating: Option<u32>,
    },
    /// Score a property feature bundle
    Score {
        /// Property feature bundle (JSON)
        features: PathBuf,
        /// Identifier echoed in the score result
        #[arg(long, default_value = "property")]
        property_id: String,
    },
    /// Categorize raw places from a JSON file
    Categorize {
        /// JSON array of raw places, or a single tag object
        file: PathBuf,
        /// Latitude to measure distances from
        #[arg(long, allow_negative_numbers = true, requires = "lng")]
        lat: Option<f64>,
        /// Longitude to measure distances from
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lng: Option<f64>,
    },
    /// List the configured POI services
    Services,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            lat,
            lng,
            radius,
            service,
            endpoint,
            timeout,
            places,
            features,
            property_id,
            surface,
            has_kitchen,
            has_terrace,
            seating,
        } => {
            let start = Instant::now();
            let mut poi = resolve_service(service.as_deref())?;
            if let Some(endpoint) = endpoint {
                poi.endpoint = endpoint;
            }
            if let Some(timeout) = timeout {
                poi.timeout_secs = timeout;
            }
            let radius = radius.unwrap_or(poi.default_radius_meters);

            let nearby: Vec<NearbyPlace> = if let Some(path) = places {
                let raws: Vec<RawPlace> = read_json(&path)?;
                log::info!("Loaded {} raw places from {}", raws.len(), path.display());
                horeca_map_place::to_nearby_places(lat, lng, &raws)
            } else {
                log::info!("Fetching places within {radius}m of ({lat}, {lng}) from {}", poi.name);
                horeca_map_place::overpass::fetch_nearby_places(&poi, lat, lng, Some(radius)).await
            };

            let bundle: PropertyFeatureBundle = match features {
                Some(path) => read_json(&path)?,
                None => PropertyFeatureBundle::default(),
            };

            let buurt_analysis = horeca_map_neighborhood::analyze_neighborhood(&nearby, radius);
            let score = horeca_map_score::score_property(&property_id, &bundle);
            let overrides = PropertyOverrides {
                surface,
                has_kitchen,
                has_terrace,
                seating_capacity: seating,
            };
            let concepts = horeca_map_concept::recommend_concepts(&report::concept_input(
                buurt_analysis.clone(),
                &bundle,
                &overrides,
            ));

            let report = Report {
                location: Coordinates {
                    latitude: lat,
                    longitude: lng,
                    radius_meters: radius,
                },
                grade_colors: horeca_map_score::presentation::grade_colors(score.grade),
                score_background: horeca_map_score::presentation::score_background(
                    score.numeric_score,
                ),
                buurt_analysis,
                score,
                concepts,
            };

            log::info!(
                "Analysis complete in {:.1}s: {} places, buzz {}/10, grade {}",
                start.elapsed().as_secs_f64(),
                nearby.len(),
                report.buurt_analysis.buzz_index,
                report.score.grade
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Score {
            features,
            property_id,
        } => {
            let bundle: PropertyFeatureBundle = read_json(&features)?;
            let result = horeca_map_score::score_property(&property_id, &bundle);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Categorize { file, lat, lng } => {
            let value: serde_json::Value = read_json(&file)?;
            let output = match (lat, lng) {
                (Some(lat), Some(lng)) => {
                    let raws: Vec<RawPlace> = serde_json::from_value(value)?;
                    serde_json::to_value(horeca_map_place::to_nearby_places(lat, lng, &raws))?
                }
                _ => categorize_value(value)?,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Services => {
            println!("{:<12} {:<8} ENDPOINT", "ID", "RADIUS");
            println!("{}", "-".repeat(60));
            for service in all_services() {
                println!(
                    "{:<12} {:<8} {}",
                    service.id, service.default_radius_meters, service.endpoint
                );
            }
        }
    }

    Ok(())
}

fn resolve_service(id: Option<&str>) -> Result<PoiService, Box<dyn std::error::Error>> {
    let Some(id) = id else {
        return Ok(default_service());
    };
    all_services()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| format!("Unknown POI service: {id}").into())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}

/// Classifies either an array of raw places or a single tag object.
fn categorize_value(
    value: serde_json::Value,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let classify = |tags: &PlaceTags| {
        let c = horeca_map_place::categorize(tags);
        serde_json::json!({
            "category": c.category,
            "label": c.label,
            "type": c.place_type,
        })
    };

    if value.is_array() {
        let raws: Vec<RawPlace> = serde_json::from_value(value)?;
        Ok(serde_json::Value::Array(
            raws.iter()
                .map(|raw| {
                    let mut entry = classify(&raw.tags);
                    entry["name"] = serde_json::json!(raw.name);
                    entry
                })
                .collect(),
        ))
    } else {
        let tags: PlaceTags = serde_json::from_value(value)?;
        Ok(classify(&tags))
    }
}
