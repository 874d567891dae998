use crate::domain::card::{Arrhythmia, Card, CardStatus};
use crate::domain::drag::{apply_drag, DragOutcome};
use crate::domain::filter;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::debug;

/// One of the two fixed review columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Todo,
    Done,
}

impl ColumnId {
    /// Status a card takes on when dragged into this column.
    ///
    /// Entering "done" always means accept; entering "todo" always means
    /// reject. Review is one-way: no drag restores PENDING.
    pub fn status_on_entry(&self) -> CardStatus {
        match self {
            Self::Done => CardStatus::Done,
            Self::Todo => CardStatus::Rejected,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::Done => write!(f, "done"),
        }
    }
}

impl FromStr for ColumnId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "done" => Ok(Self::Done),
            _ => Err(crate::error::BoardError::UnknownColumn(s.to_string())),
        }
    }
}

/// The authoritative card ordering and membership store, one ordered
/// sequence per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardsByColumn {
    pub todo: Vec<Card>,
    pub done: Vec<Card>,
}

impl CardsByColumn {
    pub fn column(&self, id: ColumnId) -> &[Card] {
        match id {
            ColumnId::Todo => &self.todo,
            ColumnId::Done => &self.done,
        }
    }

    pub fn column_mut(&mut self, id: ColumnId) -> &mut Vec<Card> {
        match id {
            ColumnId::Todo => &mut self.todo,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Total card count across both columns.
    pub fn total(&self) -> usize {
        self.todo.len() + self.done.len()
    }

    /// All cards, todo column first, preserving per-column order.
    pub fn flatten(&self) -> Vec<Card> {
        self.todo.iter().chain(self.done.iter()).cloned().collect()
    }
}

/// Derives the two column sequences from a flat backend dataset.
///
/// `done` keeps the original relative order of DONE cards. `todo` holds
/// everything else, with PENDING cards before REJECTED ones; the placement is
/// stable, so cards never swap relative order within their own status group.
///
/// Invoked once per fresh fetch; afterwards the partition is mutated only
/// through drag transitions.
pub fn partition(cards: &[Card]) -> CardsByColumn {
    let mut pending = Vec::new();
    let mut rejected = Vec::new();
    let mut done = Vec::new();

    for card in cards {
        match card.status {
            CardStatus::Pending => pending.push(card.clone()),
            CardStatus::Rejected => rejected.push(card.clone()),
            CardStatus::Done => done.push(card.clone()),
        }
    }

    pending.extend(rejected);
    CardsByColumn { todo: pending, done }
}

/// Intents the board state responds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    SetSearchValue(String),
    ToggleFilterValue(Arrhythmia),
    SetCards(CardsByColumn),
    ApplyDragTransition(DragOutcome),
}

/// Single source of truth for the review board.
///
/// Mutated only through [`BoardState::reduce`]; every transition returns a
/// fresh state and leaves the previous snapshot intact, so a view can keep
/// rendering an old snapshot while the next one is produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    pub search_value: String,
    pub filter_values: Vec<Arrhythmia>,
    pub cards: CardsByColumn,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action, returning the next state.
    pub fn reduce(&self, action: Action) -> BoardState {
        debug!(?action, "board transition");
        match action {
            Action::SetSearchValue(search_value) => BoardState {
                search_value,
                ..self.clone()
            },
            Action::ToggleFilterValue(tag) => {
                let mut filter_values = self.filter_values.clone();
                if let Some(pos) = filter_values.iter().position(|value| *value == tag) {
                    filter_values.remove(pos);
                } else {
                    filter_values.push(tag);
                }
                BoardState {
                    filter_values,
                    ..self.clone()
                }
            }
            Action::SetCards(cards) => BoardState {
                cards,
                ..self.clone()
            },
            Action::ApplyDragTransition(outcome) => BoardState {
                cards: apply_drag(&self.cards, &outcome),
                ..self.clone()
            },
        }
    }

    /// Replaces the partition with a freshly partitioned backend dataset.
    ///
    /// Called on fetch completion. Any manual reordering since the previous
    /// fetch is overwritten; search and filter selections persist.
    pub fn ingest(&self, cards: &[Card]) -> BoardState {
        self.reduce(Action::SetCards(partition(cards)))
    }

    /// The filtered view of one column: name filter first, then arrhythmia.
    pub fn visible_cards(&self, column: ColumnId) -> Vec<Card> {
        filter::filter_cards(
            self.cards.column(column),
            &self.search_value,
            &self.filter_values,
        )
    }

    /// Distinct arrhythmia tags across the full dataset, for the filter menu.
    /// Always derived from the unfiltered partition.
    pub fn arrhythmia_options(&self) -> Vec<Arrhythmia> {
        filter::arrhythmia_options(self.cards.todo.iter().chain(self.cards.done.iter()))
    }
}
