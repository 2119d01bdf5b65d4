#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Business concept recommendation input and result types.

use horeca_map_neighborhood_models::BuurtAnalysis;
use serde::{Deserialize, Serialize};

/// Maximum number of suggestions in a [`ConceptAnalysis`].
pub const MAX_SUGGESTIONS: usize = 5;

/// Property and neighborhood context concepts are scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptInput {
    /// Floor area in square meters.
    pub surface: f64,
    /// Neighborhood analysis for the property.
    pub buurt_analysis: BuurtAnalysis,
    /// Whether the property has a kitchen, when known.
    #[serde(default)]
    pub has_kitchen: Option<bool>,
    /// Whether the property has a terrace, when known.
    #[serde(default)]
    pub has_terrace: Option<bool>,
    /// Number of seats, when known.
    #[serde(default)]
    pub seating_capacity: Option<u32>,
}

/// One ranked concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptSuggestion {
    /// Concept name, e.g. "Specialty Coffee Bar".
    pub concept: String,
    /// Display emoji.
    pub emoji: String,
    /// Fit score, 0-100.
    pub score: u8,
    /// One-sentence verdict.
    pub reasoning: String,
    /// Reasons this concept could work here. Never empty.
    pub opportunities: Vec<String>,
    /// Reasons it might not.
    pub risks: Vec<String>,
}

/// Ranked concepts plus a narrative location profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptAnalysis {
    /// At most [`MAX_SUGGESTIONS`] concepts, best first.
    pub suggestions: Vec<ConceptSuggestion>,
    /// Short description of the location.
    pub location_profile: String,
}
