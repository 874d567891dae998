//! # Rhythmboard Core
//!
//! Board state engine and domain models for a clinical arrhythmia-review
//! kanban.
//!
//! Cards represent patient arrhythmia-detection events fetched from a
//! backend; a reviewer drags them between the "todo" and "done" columns to
//! accept or reject them, filtering by patient name and arrhythmia type.
//! This crate owns the board state reducer, the drag-and-drop transition
//! algorithm, and the filter pipeline, without any dependency on a specific
//! UI implementation or drag library.

pub mod domain;
pub mod error;
pub mod source;

// Re-export commonly used types
pub use domain::{
    board::{partition, Action, BoardState, CardsByColumn, ColumnId},
    card::{Arrhythmia, Card, CardStatus},
    drag::{apply_drag, DragLocation, DragOutcome},
};
pub use error::{BoardError, Result};
pub use source::CardSource;
