pub mod board;
pub mod card;
pub mod drag;
pub mod filter;

pub use board::{partition, Action, BoardState, CardsByColumn, ColumnId};
pub use card::{Arrhythmia, Card, CardStatus};
pub use drag::{apply_drag, DragLocation, DragOutcome};
pub use filter::{
    arrhythmia_options, filter_by_arrhythmia, filter_by_name, filter_cards, MIN_SEARCH_LENGTH,
};
