use crate::domain::card::{Arrhythmia, Card};

/// Queries shorter than this never filter, so a half-typed name does not
/// empty the board.
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Filters cards by case-insensitive substring match on the patient name.
///
/// Returns the input unchanged when the query is below [`MIN_SEARCH_LENGTH`].
/// Pure and idempotent; the input slice is never mutated.
pub fn filter_by_name(cards: &[Card], search_value: &str) -> Vec<Card> {
    if search_value.chars().count() < MIN_SEARCH_LENGTH {
        return cards.to_vec();
    }

    let needle = search_value.to_lowercase();
    cards
        .iter()
        .filter(|card| card.patient_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Filters cards to those tagged with at least one selected arrhythmia.
///
/// An empty selection means no filtering. Pure and idempotent.
pub fn filter_by_arrhythmia(cards: &[Card], filter_values: &[Arrhythmia]) -> Vec<Card> {
    if filter_values.is_empty() {
        return cards.to_vec();
    }

    cards
        .iter()
        .filter(|card| {
            card.arrhythmias
                .iter()
                .any(|arrhythmia| filter_values.contains(arrhythmia))
        })
        .cloned()
        .collect()
}

/// Applies both filters in their fixed order: name first, then arrhythmia.
pub fn filter_cards(cards: &[Card], search_value: &str, filter_values: &[Arrhythmia]) -> Vec<Card> {
    filter_by_arrhythmia(&filter_by_name(cards, search_value), filter_values)
}

/// Distinct arrhythmia tags appearing anywhere in the given cards, in
/// first-seen order. Drives the filter options offered to the reviewer, so it
/// runs over the full dataset rather than the filtered views.
pub fn arrhythmia_options<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<Arrhythmia> {
    let mut options = Vec::new();
    for card in cards {
        for arrhythmia in &card.arrhythmias {
            if !options.contains(arrhythmia) {
                options.push(*arrhythmia);
            }
        }
    }
    options
}
