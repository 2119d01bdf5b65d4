//! Place tag categorization.
//!
//! Maps the loose tag bag of a raw POI record to the closed
//! [`PlaceCategory`] set. Rules are evaluated in a fixed priority order and
//! the first rule that matches wins, so a `cafe` that also carries an
//! `office` tag is still a café. Tag values are compared
//! case-insensitively.

use horeca_map_place_models::{PlaceCategory, PlaceTags};

/// Outcome of categorizing one tag bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Category the place belongs to.
    pub category: PlaceCategory,
    /// Display label for the category.
    pub label: &'static str,
    /// The (lowercased) tag value that decided the category.
    pub place_type: String,
}

impl Classification {
    fn new(category: PlaceCategory, label: &'static str, place_type: &str) -> Self {
        Self {
            category,
            label,
            place_type: place_type.to_ascii_lowercase(),
        }
    }
}

/// A single categorization rule.
pub struct CategoryRule {
    /// Short rule identifier, used in logs and tests.
    pub name: &'static str,
    matcher: fn(&PlaceTags) -> Option<Classification>,
}

impl CategoryRule {
    /// Applies this rule alone to `tags`.
    #[must_use]
    pub fn apply(&self, tags: &PlaceTags) -> Option<Classification> {
        (self.matcher)(tags)
    }
}

/// Categorization rules in priority order.
pub const RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "horeca_concurrent",
        matcher: horeca_concurrent,
    },
    CategoryRule {
        name: "horeca_complementair",
        matcher: horeca_complementair,
    },
    CategoryRule {
        name: "transport",
        matcher: transport,
    },
    CategoryRule {
        name: "kantoor",
        matcher: kantoor,
    },
    CategoryRule {
        name: "supermarkt",
        matcher: supermarkt,
    },
    CategoryRule {
        name: "onderwijs",
        matcher: onderwijs,
    },
    CategoryRule {
        name: "cultuur",
        matcher: cultuur,
    },
];

/// Label used when no rule matches.
pub const DEFAULT_LABEL: &str = "Voorziening";

/// Categorizes a tag bag. Total: an empty bag yields the default
/// `winkel`/"Voorziening" classification.
#[must_use]
pub fn categorize(tags: &PlaceTags) -> Classification {
    RULES
        .iter()
        .find_map(|rule| rule.apply(tags))
        .unwrap_or_else(|| {
            let place_type = value(&tags.shop)
                .or_else(|| value(&tags.amenity))
                .unwrap_or("unknown");
            Classification::new(PlaceCategory::Winkel, DEFAULT_LABEL, place_type)
        })
}

fn horeca_concurrent(tags: &PlaceTags) -> Option<Classification> {
    let amenity = value(&tags.amenity)?;
    if is_any(amenity, &["restaurant", "fast_food", "food_court"]) {
        return Some(Classification::new(
            PlaceCategory::HorecaConcurrent,
            "Restaurant",
            amenity,
        ));
    }
    if is_any(amenity, &["bar", "pub", "biergarten"]) {
        return Some(Classification::new(
            PlaceCategory::HorecaConcurrent,
            "Bar",
            amenity,
        ));
    }
    None
}

fn horeca_complementair(tags: &PlaceTags) -> Option<Classification> {
    let amenity = value(&tags.amenity)?;
    is_any(amenity, &["cafe", "ice_cream"])
        .then(|| Classification::new(PlaceCategory::HorecaComplementair, "Café", amenity))
}

fn transport(tags: &PlaceTags) -> Option<Classification> {
    let railway_station = value(&tags.railway).is_some_and(|r| r.eq_ignore_ascii_case("station"));
    let public_transport = value(&tags.public_transport);

    if railway_station || public_transport.is_some_and(|p| p.eq_ignore_ascii_case("station")) {
        return Some(Classification::new(
            PlaceCategory::Transport,
            "Station",
            "station",
        ));
    }
    if let Some(kind) = public_transport {
        return Some(Classification::new(
            PlaceCategory::Transport,
            "OV-halte",
            kind,
        ));
    }

    let amenity = value(&tags.amenity)?;
    amenity
        .eq_ignore_ascii_case("parking")
        .then(|| Classification::new(PlaceCategory::Transport, "Parkeren", amenity))
}

fn kantoor(tags: &PlaceTags) -> Option<Classification> {
    value(&tags.office).map(|office| Classification::new(PlaceCategory::Kantoor, "Kantoor", office))
}

fn supermarkt(tags: &PlaceTags) -> Option<Classification> {
    let shop = value(&tags.shop)?;
    if is_any(shop, &["supermarket", "convenience"]) {
        return Some(Classification::new(
            PlaceCategory::Supermarkt,
            "Supermarkt",
            shop,
        ));
    }
    shop.eq_ignore_ascii_case("mall")
        .then(|| Classification::new(PlaceCategory::Winkel, "Winkelcentrum", shop))
}

fn onderwijs(tags: &PlaceTags) -> Option<Classification> {
    let amenity = value(&tags.amenity)?;
    is_any(amenity, &["university", "school", "college"])
        .then(|| Classification::new(PlaceCategory::Onderwijs, "Onderwijs", amenity))
}

fn cultuur(tags: &PlaceTags) -> Option<Classification> {
    let amenity = value(&tags.amenity)?;
    let label = if amenity.eq_ignore_ascii_case("cinema") {
        "Bioscoop"
    } else if amenity.eq_ignore_ascii_case("museum") {
        "Museum"
    } else if amenity.eq_ignore_ascii_case("theatre") {
        "Theater"
    } else {
        return None;
    };
    Some(Classification::new(PlaceCategory::Cultuur, label, amenity))
}

/// Returns the trimmed tag value, treating blank values as absent.
fn value(tag: &Option<String>) -> Option<&str> {
    tag.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn is_any(value: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| value.eq_ignore_ascii_case(c))
}
