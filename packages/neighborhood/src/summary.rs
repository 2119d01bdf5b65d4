//! Templated neighborhood summary.
//!
//! The summary is a sequence of independent clauses. Each clause is only
//! emitted when its trigger holds, so a quiet street with no transit gets
//! a two-sentence summary and a busy station area gets four.

/// The counts the summary clauses are keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryInput {
    /// Buzz index, 1-10.
    pub buzz_index: u8,
    /// Number of competing venues.
    pub concurrenten: usize,
    /// Number of stations.
    pub stations: usize,
    /// Number of transit places of any kind.
    pub transport: usize,
    /// Number of offices.
    pub kantoren: usize,
}

/// Builds the summary text.
#[must_use]
pub fn build(input: &SummaryInput) -> String {
    let mut clauses = vec![opening(input.buzz_index), competition(input.concurrenten)];

    if let Some(clause) = transport(input.stations, input.transport) {
        clauses.push(clause);
    }
    if input.kantoren > 5 {
        clauses.push(format!(
            "Met {} kantoren in de buurt is er potentie voor lunch en afterwork.",
            input.kantoren
        ));
    }

    clauses.join(" ")
}

fn opening(buzz_index: u8) -> String {
    if buzz_index >= 7 {
        format!("Dit is een levendige buurt met veel activiteit (bruisindex {buzz_index}/10).")
    } else if buzz_index >= 4 {
        format!("Dit is een gemiddeld actieve buurt (bruisindex {buzz_index}/10).")
    } else {
        format!("Dit is een rustige buurt (bruisindex {buzz_index}/10).")
    }
}

fn competition(concurrenten: usize) -> String {
    if concurrenten > 10 {
        format!("Er zijn veel concurrerende horecazaken in de directe omgeving ({concurrenten}).")
    } else if concurrenten > 3 {
        format!("Er is gematigde concurrentie met {concurrenten} horecazaken in de buurt.")
    } else {
        format!("Er is weinig directe concurrentie ({concurrenten} horecazaken).")
    }
}

fn transport(stations: usize, transport: usize) -> Option<String> {
    if stations > 0 {
        Some(format!("Goed bereikbaar met het OV: {stations} station(s) in de buurt."))
    } else if transport > 3 {
        Some(format!("Er zijn meerdere OV-haltes ({transport}) in de buurt."))
    } else {
        None
    }
}
