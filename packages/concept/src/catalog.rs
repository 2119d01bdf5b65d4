//! The built-in concept catalog.
//!
//! Each concept starts from its own base score and adds or subtracts
//! points for office density, competing venue types, floor area, buzz
//! index and the property's own facilities. Order in [`CATALOG`] is the
//! tie-break order when scores are equal.

use horeca_map_concept_models::ConceptInput;

use crate::ConceptScorer;

/// Every built-in concept, in declaration order.
pub static CATALOG: &[&dyn ConceptScorer] = &[
    &SpecialtyCoffeeBar,
    &Restaurant,
    &Lunchroom,
    &Cocktailbar,
    &DarkKitchen,
    &Wijnbar,
    &BakkerijCafe,
];

const CAFE_TYPES: &[&str] = &["cafe"];
const RESTAURANT_TYPES: &[&str] = &["restaurant", "food_court"];
const LUNCH_TYPES: &[&str] = &["cafe", "fast_food"];
const BAR_TYPES: &[&str] = &["bar", "pub", "biergarten"];

fn offices(input: &ConceptInput) -> u32 {
    input.buurt_analysis.stats.kantoren_nabij
}

fn buzz(input: &ConceptInput) -> u8 {
    input.buurt_analysis.buzz_index
}

fn transport(input: &ConceptInput) -> u8 {
    input.buurt_analysis.stats.transport_score
}

fn competitors(input: &ConceptInput, types: &[&str]) -> usize {
    input.buurt_analysis.horeca_of_type(types)
}

fn surface_between(input: &ConceptInput, min: f64, max: f64) -> bool {
    (min..=max).contains(&input.surface)
}

/// Coffee bar fed by office workers and commuters.
pub struct SpecialtyCoffeeBar;

impl ConceptScorer for SpecialtyCoffeeBar {
    fn name(&self) -> &'static str {
        "Specialty Coffee Bar"
    }

    fn emoji(&self) -> &'static str {
        "☕"
    }

    fn raw_score(&self, input: &ConceptInput) -> i32 {
        let mut score = 50;
        match offices(input) {
            6.. => score += 15,
            3..=5 => score += 8,
            _ => {}
        }
        match competitors(input, CAFE_TYPES) {
            0 => score += 5,
            1..=2 => {}
            3..=5 => score -= 5,
            _ => score -= 15,
        }
        if surface_between(input, 40.0, 120.0) {
            score += 10;
        } else if input.surface > 200.0 || input.surface < 25.0 {
            score -= 10;
        }
        match buzz(input) {
            7.. => score += 10,
            4..=6 => score += 5,
            _ => {}
        }
        if transport(input) >= 6 {
            score += 5;
        }
        score
    }

    fn specific_opportunities(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        let kantoren = offices(input);
        if kantoren > 2 {
            out.push(format!(
                "{kantoren} kantoren in de buurt zorgen voor een vaste ochtendstroom."
            ));
        }
        if competitors(input, CAFE_TYPES) == 0 {
            out.push("Nog geen koffiezaak in de directe omgeving.".to_string());
        }
        if transport(input) >= 6 {
            out.push("Goede OV-bereikbaarheid trekt forenzen voor koffie onderweg.".to_string());
        }
        out
    }

    fn risks(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        let cafes = competitors(input, CAFE_TYPES);
        if cafes > 2 {
            out.push(format!(
                "{cafes} cafés in de buurt: onderscheid met kwaliteit is noodzakelijk."
            ));
        }
        if input.surface > 200.0 {
            out.push(format!(
                "Het pand ({:.0} m²) is groot voor een koffiebar.",
                input.surface
            ));
        }
        if buzz(input) < 4 {
            out.push("Rustige buurt: weinig spontane passanten.".to_string());
        }
        out
    }
}

/// Full-service restaurant.
pub struct Restaurant;

impl ConceptScorer for Restaurant {
    fn name(&self) -> &'static str {
        "Restaurant"
    }

    fn emoji(&self) -> &'static str {
        "🍽️"
    }

    fn raw_score(&self, input: &ConceptInput) -> i32 {
        let mut score = 45;
        match input.has_kitchen {
            Some(true) => score += 15,
            Some(false) => score -= 20,
            None => {}
        }
        if input.surface >= 100.0 {
            score += 10;
        } else if input.surface < 50.0 {
            score -= 15;
        }
        match competitors(input, RESTAURANT_TYPES) {
            0..=2 => score += 8,
            3..=5 => {}
            6..=10 => score -= 8,
            _ => score -= 15,
        }
        match buzz(input) {
            7.. => score += 10,
            4..=6 => score += 5,
            _ => {}
        }
        if input.has_terrace == Some(true) {
            score += 5;
        }
        if input.seating_capacity.is_some_and(|seats| seats >= 40) {
            score += 5;
        }
        score
    }

    fn specific_opportunities(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        if buzz(input) >= 7 {
            out.push("Levendige buurt met veel avondpubliek.".to_string());
        }
        if input.has_terrace == Some(true) {
            out.push("Een terras verhoogt de capaciteit in het seizoen.".to_string());
        }
        if competitors(input, RESTAURANT_TYPES) < 3 {
            out.push("Weinig restaurants in de buurt: ruimte voor nieuw aanbod.".to_string());
        }
        if let Some(seats) = input.seating_capacity.filter(|seats| *seats >= 40) {
            out.push(format!("Ruime zitcapaciteit ({seats} plaatsen) voor groepen."));
        }
        out
    }

    fn risks(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        if input.has_kitchen == Some(false) {
            out.push(
                "Geen keuken aanwezig: hoge investering voor een volwaardige keuken.".to_string(),
            );
        }
        let restaurants = competitors(input, RESTAURANT_TYPES);
        if restaurants > 5 {
            out.push(format!("Veel concurrerende restaurants ({restaurants}) in de buurt."));
        }
        if input.surface < 50.0 {
            out.push(format!(
                "Beperkt oppervlak ({:.0} m²) voor keuken en zaal.",
                input.surface
            ));
        }
        out
    }
}

/// Daytime lunch venue for office workers and shoppers.
pub struct Lunchroom;

impl ConceptScorer for Lunchroom {
    fn name(&self) -> &'static str {
        "Lunchroom"
    }

    fn emoji(&self) -> &'static str {
        "🥪"
    }

    fn raw_score(&self, input: &ConceptInput) -> i32 {
        let mut score = 45;
        match offices(input) {
            0 => score -= 10,
            1..=2 => {}
            3..=5 => score += 10,
            _ => score += 20,
        }
        if surface_between(input, 50.0, 150.0) {
            score += 10;
        }
        if competitors(input, LUNCH_TYPES) > 4 {
            score -= 10;
        }
        if buzz(input) >= 4 {
            score += 5;
        }
        if input.buurt_analysis.stats.voorzieningen_score >= 6 {
            score += 5;
        }
        if input.has_kitchen == Some(false) {
            score -= 5;
        }
        score
    }

    fn specific_opportunities(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        let kantoren = offices(input);
        if kantoren > 2 {
            out.push(format!(
                "Kantoorpubliek van {kantoren} kantoren voor lunch op werkdagen."
            ));
        }
        if input.buurt_analysis.stats.voorzieningen_score >= 6 {
            out.push("Winkelend publiek zorgt overdag voor aanloop.".to_string());
        }
        out
    }

    fn risks(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        if offices(input) == 0 {
            out.push("Geen kantoren in de buurt: lunch is afhankelijk van passanten.".to_string());
        }
        let lunch = competitors(input, LUNCH_TYPES);
        if lunch > 4 {
            out.push(format!("Veel lunchaanbod in de buurt ({lunch} zaken)."));
        }
        if buzz(input) < 4 {
            out.push("Weinig omzet buiten kantoortijden in een rustige buurt.".to_string());
        }
        out
    }
}

/// Evening cocktail bar.
pub struct Cocktailbar;

impl ConceptScorer for Cocktailbar {
    fn name(&self) -> &'static str {
        "Cocktailbar"
    }

    fn emoji(&self) -> &'static str {
        "🍸"
    }

    fn raw_score(&self, input: &ConceptInput) -> i32 {
        let mut score = 40;
        match buzz(input) {
            7.. => score += 20,
            4..=6 => score += 5,
            _ => score -= 15,
        }
        match competitors(input, BAR_TYPES) {
            0 => score += 5,
            1..=5 => {}
            _ => score -= 10,
        }
        if transport(input) >= 6 {
            score += 5;
        }
        if surface_between(input, 60.0, 200.0) {
            score += 5;
        }
        if input.buurt_analysis.stats.horeca_count > 10 {
            score += 5;
        }
        score
    }

    fn specific_opportunities(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        if buzz(input) >= 7 {
            out.push("Levendig uitgaansgebied met avondpubliek.".to_string());
        }
        let horeca = input.buurt_analysis.stats.horeca_count;
        if horeca > 10 {
            out.push(format!(
                "Een horecacluster van {horeca} zaken trekt uitgaanspubliek."
            ));
        }
        if competitors(input, BAR_TYPES) == 0 {
            out.push("Geen bars in de directe omgeving.".to_string());
        }
        out
    }

    fn risks(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        if buzz(input) < 4 {
            out.push("Rustige buurt: risico op weinig avondbezoek.".to_string());
        }
        let bars = competitors(input, BAR_TYPES);
        if bars > 5 {
            out.push(format!("Veel bars in de buurt ({bars})."));
        }
        out.push(
            "Late openingstijden vragen een nachtvergunning en goede afspraken met buren."
                .to_string(),
        );
        out
    }
}

/// Delivery-only kitchen without guest seating.
pub struct DarkKitchen;

impl ConceptScorer for DarkKitchen {
    fn name(&self) -> &'static str {
        "Dark Kitchen"
    }

    fn emoji(&self) -> &'static str {
        "📦"
    }

    fn raw_score(&self, input: &ConceptInput) -> i32 {
        let mut score = 35;
        match input.has_kitchen {
            Some(true) => score += 20,
            Some(false) => score -= 10,
            None => {}
        }
        match buzz(input) {
            ..=3 => score += 10,
            7.. => score -= 5,
            _ => {}
        }
        if input.surface >= 60.0 {
            score += 5;
        }
        if input.buurt_analysis.stats.horeca_count > 15 {
            score += 10;
        }
        if input.has_terrace == Some(true) {
            score -= 5;
        }
        score
    }

    fn specific_opportunities(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        if buzz(input) <= 3 {
            out.push(
                "Rustige locatie met lagere huur; zichtbaarheid is voor bezorging niet nodig."
                    .to_string(),
            );
        }
        if input.has_kitchen == Some(true) {
            out.push("De bestaande keuken beperkt de opstartkosten.".to_string());
        }
        if input.buurt_analysis.stats.horeca_count > 15 {
            out.push("Een drukke horecabuurt wijst op bezorgvraag.".to_string());
        }
        out
    }

    fn risks(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        if input.has_terrace == Some(true) {
            out.push("Het terras wordt niet benut.".to_string());
        }
        if buzz(input) >= 7 {
            out.push("Een zichtbare A-locatie wordt niet benut.".to_string());
        }
        out.push("Afhankelijk van bezorgplatforms en hun commissies.".to_string());
        out
    }
}

/// Wine bar for afterwork and evening guests.
pub struct Wijnbar;

impl ConceptScorer for Wijnbar {
    fn name(&self) -> &'static str {
        "Wijnbar"
    }

    fn emoji(&self) -> &'static str {
        "🍷"
    }

    fn raw_score(&self, input: &ConceptInput) -> i32 {
        let mut score = 40;
        match buzz(input) {
            7.. => score += 10,
            4..=6 => score += 5,
            _ => {}
        }
        if input.has_terrace == Some(true) {
            score += 10;
        }
        if competitors(input, BAR_TYPES) > 8 {
            score -= 10;
        }
        if surface_between(input, 40.0, 120.0) {
            score += 10;
        }
        if offices(input) > 3 {
            score += 5;
        }
        score
    }

    fn specific_opportunities(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        if input.has_terrace == Some(true) {
            out.push("Een terras past bij een wijnbar in de zomer.".to_string());
        }
        let kantoren = offices(input);
        if kantoren > 3 {
            out.push(format!("Afterwork-publiek van {kantoren} kantoren."));
        }
        out
    }

    fn risks(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        let bars = competitors(input, BAR_TYPES);
        if bars > 8 {
            out.push(format!("Veel bars in de buurt ({bars})."));
        }
        if buzz(input) < 4 {
            out.push("Weinig avondpubliek in een rustige buurt.".to_string());
        }
        out
    }
}

/// Bakery with a small café corner.
pub struct BakkerijCafe;

impl ConceptScorer for BakkerijCafe {
    fn name(&self) -> &'static str {
        "Bakkerij-café"
    }

    fn emoji(&self) -> &'static str {
        "🥐"
    }

    fn raw_score(&self, input: &ConceptInput) -> i32 {
        let mut score = 40;
        if input.buurt_analysis.stats.voorzieningen_score >= 6 {
            score += 10;
        }
        match input.buurt_analysis.complementair.len() {
            0 => score += 10,
            1..=4 => {}
            _ => score -= 10,
        }
        if transport(input) >= 6 {
            score += 10;
        }
        if surface_between(input, 40.0, 100.0) {
            score += 5;
        }
        if input.has_kitchen == Some(true) {
            score += 5;
        }
        score
    }

    fn specific_opportunities(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        if transport(input) >= 6 {
            out.push("Forenzen op weg naar het OV als ochtendklanten.".to_string());
        }
        if input.buurt_analysis.complementair.is_empty() {
            out.push("Geen cafés of ijssalons in de buurt.".to_string());
        }
        if input.buurt_analysis.stats.voorzieningen_score >= 6 {
            out.push("Winkelend publiek voor koffie met gebak.".to_string());
        }
        out
    }

    fn risks(&self, input: &ConceptInput) -> Vec<String> {
        let mut out = vec![];
        let cafes = input.buurt_analysis.complementair.len();
        if cafes > 4 {
            out.push(format!("Veel cafés in de buurt ({cafes})."));
        }
        if input.has_kitchen == Some(false) {
            out.push("Zonder keuken is alleen afbakken mogelijk.".to_string());
        }
        out
    }
}
