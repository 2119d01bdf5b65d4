#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Ranks candidate hospitality concepts for a property.
//!
//! Every concept in the catalog is scored against the property's floor
//! area, facilities and neighborhood analysis. The best five are returned
//! with a verdict sentence, together with a short profile of the
//! location.

pub mod catalog;
pub mod scorer;

pub use catalog::CATALOG;
pub use scorer::ConceptScorer;

use horeca_map_concept_models::{ConceptAnalysis, ConceptInput, ConceptSuggestion, MAX_SUGGESTIONS};
use horeca_map_neighborhood_models::BuurtAnalysis;

/// Recommends concepts from the built-in [`CATALOG`].
#[must_use]
pub fn recommend_concepts(input: &ConceptInput) -> ConceptAnalysis {
    recommend_with(CATALOG, input)
}

/// Recommends concepts from an arbitrary catalog.
///
/// Concepts with equal scores keep their catalog order.
#[must_use]
pub fn recommend_with(catalog: &[&dyn ConceptScorer], input: &ConceptInput) -> ConceptAnalysis {
    let mut scored: Vec<(&dyn ConceptScorer, u8)> = catalog
        .iter()
        .map(|concept| (*concept, concept.score(input)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(MAX_SUGGESTIONS);

    let suggestions: Vec<ConceptSuggestion> = scored
        .into_iter()
        .map(|(concept, score)| ConceptSuggestion {
            concept: concept.name().to_string(),
            emoji: concept.emoji().to_string(),
            score,
            reasoning: reasoning(concept.name(), score),
            opportunities: concept.opportunities(input),
            risks: concept.risks(input),
        })
        .collect();

    log::debug!(
        "Recommended {} of {} concepts, best: {:?}",
        suggestions.len(),
        catalog.len(),
        suggestions.first().map(|s| (&s.concept, s.score))
    );

    ConceptAnalysis {
        suggestions,
        location_profile: location_profile(&input.buurt_analysis),
    }
}

/// Verdict sentence for a concept, banded at 70 and 50.
#[must_use]
pub fn reasoning(concept: &str, score: u8) -> String {
    match score {
        70.. => format!("{concept} is uitstekend geschikt voor deze locatie (score {score}/100)."),
        50..=69 => format!("{concept} is een solide optie voor deze locatie (score {score}/100)."),
        _ => format!("{concept} is mogelijk met uitdagingen op deze locatie (score {score}/100)."),
    }
}

/// One-paragraph description of the location.
#[must_use]
pub fn location_profile(analysis: &BuurtAnalysis) -> String {
    let band = match analysis.buzz_index {
        7.. => "Levendige locatie",
        4..=6 => "Gemiddeld actieve locatie",
        _ => "Rustige locatie",
    };
    format!(
        "{band} (bruisindex {}/10) met {} horecazaken, {} kantoren in de buurt en een OV-score \
         van {}/10.",
        analysis.buzz_index,
        analysis.stats.horeca_count,
        analysis.stats.kantoren_nabij,
        analysis.stats.transport_score,
    )
}

#[cfg(test)]
mod tests {
    use horeca_map_neighborhood::analyze_neighborhood;
    use horeca_map_place_models::{NearbyPlace, PlaceCategory};

    use super::*;

    struct Fixed(&'static str, i32);

    impl ConceptScorer for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn emoji(&self) -> &'static str {
            "🧪"
        }

        fn raw_score(&self, _input: &ConceptInput) -> i32 {
            self.1
        }

        fn specific_opportunities(&self, _input: &ConceptInput) -> Vec<String> {
            vec![]
        }

        fn risks(&self, _input: &ConceptInput) -> Vec<String> {
            vec![]
        }
    }

    fn place(category: PlaceCategory, place_type: &str) -> NearbyPlace {
        NearbyPlace {
            name: place_type.to_string(),
            place_type: place_type.to_string(),
            category,
            label: place_type.to_string(),
            distance: 150.0,
            lat: 52.37,
            lng: 4.89,
        }
    }

    fn office_district() -> ConceptInput {
        let mut places: Vec<NearbyPlace> = (0..8)
            .map(|_| place(PlaceCategory::Kantoor, "company"))
            .collect();
        places.extend((0..3).map(|_| place(PlaceCategory::Transport, "station")));
        places.extend((0..4).map(|_| place(PlaceCategory::Winkel, "clothes")));
        places.push(place(PlaceCategory::HorecaConcurrent, "restaurant"));

        ConceptInput {
            surface: 90.0,
            buurt_analysis: analyze_neighborhood(&places, 500),
            has_kitchen: Some(true),
            has_terrace: Some(true),
            seating_capacity: Some(45),
        }
    }

    #[test]
    fn returns_at_most_five_sorted_suggestions() {
        let analysis = recommend_concepts(&office_district());
        assert_eq!(analysis.suggestions.len(), MAX_SUGGESTIONS);
        for pair in analysis.suggestions.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for suggestion in &analysis.suggestions {
            assert!(suggestion.score <= 100);
            assert!(!suggestion.opportunities.is_empty());
            assert!(suggestion.reasoning.starts_with(&suggestion.concept));
        }
    }

    #[test]
    fn office_district_favors_daytime_concepts() {
        let analysis = recommend_concepts(&office_district());
        let top = &analysis.suggestions[0];
        assert!(
            top.concept == "Specialty Coffee Bar" || top.concept == "Lunchroom",
            "got {}",
            top.concept
        );
        assert!(top.score >= 70);
        assert!(top.reasoning.contains("uitstekend geschikt"));
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog: [&dyn ConceptScorer; 4] = [
            &Fixed("eerste", 60),
            &Fixed("tweede", 80),
            &Fixed("derde", 60),
            &Fixed("vierde", 80),
        ];
        let analysis = recommend_with(&catalog, &office_district());
        let names: Vec<&str> = analysis
            .suggestions
            .iter()
            .map(|s| s.concept.as_str())
            .collect();
        assert_eq!(names, vec!["tweede", "vierde", "eerste", "derde"]);
    }

    #[test]
    fn short_catalog_is_not_padded() {
        let catalog: [&dyn ConceptScorer; 2] = [&Fixed("a", 10), &Fixed("b", 20)];
        let analysis = recommend_with(&catalog, &office_district());
        assert_eq!(analysis.suggestions.len(), 2);
        assert!(analysis.suggestions[0].opportunities[0].contains("Solide basis"));
    }

    #[test]
    fn reasoning_bands() {
        assert!(reasoning("X", 70).contains("uitstekend geschikt"));
        assert!(reasoning("X", 69).contains("solide optie"));
        assert!(reasoning("X", 50).contains("solide optie"));
        assert!(reasoning("X", 49).contains("mogelijk met uitdagingen"));
    }

    #[test]
    fn location_profile_reports_counts() {
        let input = office_district();
        let profile = location_profile(&input.buurt_analysis);
        assert!(profile.contains("1 horecazaken"));
        assert!(profile.contains("8 kantoren"));
        assert!(profile.contains(&format!(
            "OV-score van {}/10",
            input.buurt_analysis.stats.transport_score
        )));

        let quiet = analyze_neighborhood(&[], 500);
        assert!(location_profile(&quiet).starts_with("Rustige locatie"));
    }

    #[test]
    fn recommendation_is_deterministic() {
        let input = office_district();
        assert_eq!(recommend_concepts(&input), recommend_concepts(&input));
    }

    #[test]
    fn empty_neighborhood_still_recommends() {
        let input = ConceptInput {
            surface: 0.0,
            buurt_analysis: analyze_neighborhood(&[], 500),
            has_kitchen: None,
            has_terrace: None,
            seating_capacity: None,
        };
        let analysis = recommend_concepts(&input);
        assert_eq!(analysis.suggestions.len(), MAX_SUGGESTIONS);
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json["locationProfile"].is_string());
        assert!(json["suggestions"][0]["opportunities"].is_array());
    }
}
