//! Reversible-operation log
//!
//! Every committed match or draw pushes one snapshot-based record; `undo`
//! pops the most recent record and reverse-applies it against the game state.
//! Records are immutable once pushed and consumed exactly once. There is no
//! redo: reversing an undo is out of scope.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::Card;
use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UndoError {
    #[error("undo stack is empty")]
    EmptyStack,
}

/// One reversible operation, snapshotted at commit time
///
/// Exactly two shapes exist; an "unknown operation" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UndoRecord {
    /// A playfield card was matched onto the stack.
    ///
    /// `target_position` is the stack-slot position the integration layer
    /// supplied at record time; the engine stores it verbatim so the consumed
    /// record can drive a reverse animation.
    PlayfieldToStack {
        moved_card: Card,
        previous_stack_top: Card,
        original_position: Vec2,
        target_position: Vec2,
    },
    /// A reserve card was drawn onto the stack
    ReserveToStack {
        drawn_card: Card,
        previous_stack_top: Option<Card>,
    },
}

/// Append-only stack of undo records
///
/// Unbounded: a depth limit would be a UI/memory policy, not a correctness
/// concern. Cleared when a new game starts.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    records: Vec<UndoRecord>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed playfield-to-stack match
    pub fn record_playfield_to_stack(
        &mut self,
        moved_card: Card,
        previous_stack_top: Card,
        original_position: Vec2,
        target_position: Vec2,
    ) {
        self.records.push(UndoRecord::PlayfieldToStack {
            moved_card,
            previous_stack_top,
            original_position,
            target_position,
        });
        log::debug!("recorded match, undo stack size {}", self.records.len());
    }

    /// Record a committed reserve draw
    pub fn record_reserve_to_stack(&mut self, drawn_card: Card, previous_stack_top: Option<Card>) {
        self.records.push(UndoRecord::ReserveToStack {
            drawn_card,
            previous_stack_top,
        });
        log::debug!("recorded draw, undo stack size {}", self.records.len());
    }

    pub fn can_undo(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records (new-game start)
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Pop the most recent record and reverse-apply it.
    ///
    /// Returns the consumed record so the integration layer can drive any
    /// view transition from its snapshots.
    pub fn undo(&mut self, state: &mut GameState) -> Result<UndoRecord, UndoError> {
        let record = self.records.pop().ok_or(UndoError::EmptyStack)?;

        match &record {
            UndoRecord::PlayfieldToStack {
                moved_card,
                previous_stack_top,
                original_position,
                ..
            } => {
                // Replace the stack top first: the slot still holds the moved
                // card, and its id must leave the stack before the restore
                // re-adds it to the playfield.
                state.set_stack_top(previous_stack_top.clone());
                state.restore_playfield_card(moved_card.clone(), *original_position);
                state.update_clickable();
                log::debug!("undid match of card {}", moved_card.id);
            }
            UndoRecord::ReserveToStack {
                drawn_card,
                previous_stack_top,
            } => {
                // Same ordering: the drawn card is still the stack top until
                // the previous one is reinstalled.
                match previous_stack_top {
                    Some(top) => state.set_stack_top(top.clone()),
                    None => state.clear_stack_top(),
                }
                state.restore_reserve_card(drawn_card.clone());
                log::debug!("undid draw of card {}", drawn_card.id);
            }
        }

        log::debug!("undo applied, {} records remain", self.records.len());
        Ok(record)
    }
}
