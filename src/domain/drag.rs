use crate::domain::board::{CardsByColumn, ColumnId};
use serde::{Deserialize, Serialize};

/// A position within one of the two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub column: ColumnId,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column: ColumnId, index: usize) -> Self {
        Self { column, index }
    }
}

/// Outcome of a completed drag gesture.
///
/// Plain data contract so the transition algorithm stays independent of
/// whichever drag library the view layer uses. `destination` is `None` when
/// the card was dropped outside any column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOutcome {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragOutcome {
    pub fn new(source: DragLocation, destination: Option<DragLocation>) -> Self {
        Self { source, destination }
    }
}

/// Computes the column partition after a drag gesture.
///
/// Pure: the input partition is untouched and the result shares no card
/// sequences with it.
///
/// - Missing destination, or dropping a card back on its own position, leaves
///   the partition unchanged.
/// - Within a column, the card is removed first and then inserted, so the
///   destination index refers to the already-shortened list: moving index 0
///   to index 2 in `[A, B, C]` yields `[B, C, A]`.
/// - Across columns the card's status is rewritten on entry: into "done" it
///   becomes DONE (accepted), into "todo" it becomes REJECTED. There is no
///   drag path back to PENDING.
///
/// Indices and column ids are trusted to come from a well-formed gesture; an
/// out-of-range index is a caller bug, not a handled case.
pub fn apply_drag(cards: &CardsByColumn, outcome: &DragOutcome) -> CardsByColumn {
    let Some(destination) = outcome.destination else {
        return cards.clone();
    };
    let source = outcome.source;

    if source == destination {
        return cards.clone();
    }

    let mut next = cards.clone();

    if source.column == destination.column {
        let list = next.column_mut(source.column);
        let card = list.remove(source.index);
        list.insert(destination.index, card);
    } else {
        let mut card = next.column_mut(source.column).remove(source.index);
        card.status = destination.column.status_on_entry();
        next.column_mut(destination.column).insert(destination.index, card);
    }

    next
}
