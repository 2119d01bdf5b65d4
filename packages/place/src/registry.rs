//! Compile-time registry of POI provider configurations.
//!
//! Each provider is defined in a TOML file under `services/`. The registry
//! embeds these at compile time and exposes them via [`all_services`] and
//! [`default_service`].

use serde::Deserialize;

/// A POI provider configuration loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PoiService {
    /// Unique identifier (e.g., `"overpass"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Query endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Search radius used when the caller does not pass one.
    #[serde(default = "default_radius")]
    pub default_radius_meters: u32,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

const fn default_radius() -> u32 {
    500
}

// ── Compile-time embedded TOML files ────────────────────────────────

const SERVICE_TOMLS: &[(&str, &str)] = &[("overpass", include_str!("../services/overpass.toml"))];

#[cfg(test)]
const EXPECTED_SERVICE_COUNT: usize = 1;

/// Returns all POI provider configurations.
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time guarantee
/// since the configs are embedded).
#[must_use]
pub fn all_services() -> Vec<PoiService> {
    SERVICE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse POI service '{name}': {e}"))
        })
        .collect()
}

/// Returns the provider used when none is selected explicitly.
///
/// # Panics
///
/// Panics if the registry is empty or an embedded config is malformed.
#[must_use]
pub fn default_service() -> PoiService {
    all_services()
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("No POI services registered"))
}
