//! Deterministic game-state engine
//!
//! All gameplay logic lives here. This module must stay pure and synchronous:
//! - No rendering or platform dependencies
//! - Single-actor mutation (the caller serializes intents)
//! - Every committed mutation is reversible through `UndoStack`

pub mod card;
pub mod occlusion;
pub mod state;
pub mod undo;

pub use card::{Area, Card, Rank, Suit, can_match};
pub use occlusion::{overlaps, update_clickable};
pub use state::{DrawError, DrawOutcome, GameState, MatchError, MatchOutcome};
pub use undo::{UndoError, UndoRecord, UndoStack};
