//! Game state: the three card areas and their mutation operations
//!
//! All state that must be persisted for save/resume lives here. Mutations are
//! synchronous and atomic: a rejected precondition returns a typed error and
//! leaves the state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use glam::Vec2;

use super::card::{Area, Card, can_match};
use super::occlusion;

/// Why a playfield match attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("card {0} not found in playfield")]
    CardNotFound(u32),
    #[error("card {0} is blocked by another card")]
    NotClickable(u32),
    #[error("card {0} does not match the stack top")]
    RankMismatch(u32),
}

/// Why a reserve draw was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("reserve pile is empty")]
    ReserveEmpty,
}

/// Successful match result
///
/// Both cards are snapshots taken *before* the mutation committed; the
/// previous stack top is not retained anywhere in the state, the caller is
/// expected to feed the outcome to an [`UndoStack`](super::UndoStack).
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub moved_card: Card,
    pub previous_stack_top: Card,
}

/// Successful draw result (snapshots taken before the mutation committed)
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutcome {
    pub drawn_card: Card,
    pub previous_stack_top: Option<Card>,
}

/// Complete game state (serializable)
///
/// Owns the three card areas. Every card id lives in exactly one of them and
/// each card's `area` field names the collection holding it. The reserve is
/// LIFO: the last element of the vector is drawn first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    playfield: Vec<Card>,
    stack_top: Option<Card>,
    reserve: Vec<Card>,
    /// Monotonic id source; serialized so restored states never reissue ids
    next_card_id: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- view-facing accessors -----

    pub fn playfield(&self) -> &[Card] {
        &self.playfield
    }

    pub fn stack_top(&self) -> Option<&Card> {
        self.stack_top.as_ref()
    }

    /// Reserve cards, bottom first; the last element is the next draw
    pub fn reserve(&self) -> &[Card] {
        &self.reserve
    }

    pub fn reserve_count(&self) -> usize {
        self.reserve.len()
    }

    pub fn is_reserve_empty(&self) -> bool {
        self.reserve.is_empty()
    }

    /// Win condition: every playfield card has been matched away
    pub fn is_cleared(&self) -> bool {
        self.playfield.is_empty()
    }

    /// Look a card up across all three areas
    pub fn find_card(&self, id: u32) -> Option<&Card> {
        self.playfield
            .iter()
            .find(|c| c.id == id)
            .or_else(|| self.stack_top.as_ref().filter(|c| c.id == id))
            .or_else(|| self.reserve.iter().find(|c| c.id == id))
    }

    pub fn playfield_card(&self, id: u32) -> Option<&Card> {
        self.playfield.iter().find(|c| c.id == id)
    }

    // ----- construction (used by the level generator) -----

    pub(crate) fn alloc_card_id(&mut self) -> u32 {
        let id = self.next_card_id;
        self.next_card_id += 1;
        id
    }

    pub(crate) fn push_playfield(&mut self, card: Card) {
        debug_assert!(self.find_card(card.id).is_none(), "duplicate card id {}", card.id);
        debug_assert_eq!(card.area, Area::Playfield);
        self.playfield.push(card);
    }

    pub(crate) fn push_reserve(&mut self, card: Card) {
        debug_assert!(self.find_card(card.id).is_none(), "duplicate card id {}", card.id);
        debug_assert_eq!(card.area, Area::Reserve);
        self.reserve.push(card);
    }

    /// Full clickability recomputation over the playfield
    pub fn update_clickable(&mut self) {
        occlusion::update_clickable(&mut self.playfield);
    }

    // ----- mutating operations -----

    /// Try to consume the given playfield card against the current stack top.
    ///
    /// On success the card becomes the new stack top and clickability is
    /// recomputed. An empty stack slot matches nothing. Any failure leaves
    /// the state untouched.
    pub fn attempt_match(&mut self, card_id: u32) -> Result<MatchOutcome, MatchError> {
        let idx = self
            .playfield
            .iter()
            .position(|c| c.id == card_id)
            .ok_or(MatchError::CardNotFound(card_id))?;

        if !self.playfield[idx].clickable {
            log::debug!("match rejected: card {card_id} is blocked");
            return Err(MatchError::NotClickable(card_id));
        }

        let Some(top) = self.stack_top.clone() else {
            log::debug!("match rejected: stack slot is empty");
            return Err(MatchError::RankMismatch(card_id));
        };
        if !can_match(self.playfield[idx].rank, top.rank) {
            log::debug!(
                "match rejected: card {card_id} ({}) vs stack top ({})",
                self.playfield[idx].rank.label(),
                top.rank.label()
            );
            return Err(MatchError::RankMismatch(card_id));
        }

        // Commit
        let moved = self.playfield.remove(idx);
        let moved_card = moved.clone();
        let mut new_top = moved;
        new_top.area = Area::Stack;
        new_top.face_up = true;
        new_top.clickable = false;
        self.stack_top = Some(new_top);
        self.update_clickable();

        log::debug!(
            "card {card_id} matched onto stack, {} playfield cards remain",
            self.playfield.len()
        );
        Ok(MatchOutcome {
            moved_card,
            previous_stack_top: top,
        })
    }

    /// Draw the top reserve card and make it the new stack top
    pub fn draw_reserve(&mut self) -> Result<DrawOutcome, DrawError> {
        let Some(card) = self.reserve.pop() else {
            log::debug!("draw rejected: reserve is empty");
            return Err(DrawError::ReserveEmpty);
        };

        let drawn_card = card.clone();
        let previous_stack_top = self.stack_top.take();
        let mut new_top = card;
        new_top.area = Area::Stack;
        new_top.face_up = true;
        new_top.clickable = false;
        self.stack_top = Some(new_top);

        log::debug!(
            "card {} drawn from reserve, {} remain",
            drawn_card.id,
            self.reserve.len()
        );
        Ok(DrawOutcome {
            drawn_card,
            previous_stack_top,
        })
    }

    // ----- undo support -----

    /// Re-add a card to the playfield at the given position (undo only).
    ///
    /// The card is forced face-up and provisionally clickable; the caller
    /// must trigger [`update_clickable`](Self::update_clickable) afterwards.
    pub fn restore_playfield_card(&mut self, mut card: Card, position: Vec2) {
        debug_assert!(self.find_card(card.id).is_none(), "duplicate card id {}", card.id);
        card.area = Area::Playfield;
        card.position = position;
        card.face_up = true;
        card.clickable = true;
        self.playfield.push(card);
    }

    /// Push a card back onto the top of the reserve (undo only)
    pub fn restore_reserve_card(&mut self, mut card: Card) {
        debug_assert!(self.find_card(card.id).is_none(), "duplicate card id {}", card.id);
        card.area = Area::Reserve;
        card.face_up = false;
        card.clickable = false;
        self.reserve.push(card);
    }

    /// Unconditional stack-top overwrite; used by normal play and undo alike
    pub fn set_stack_top(&mut self, mut card: Card) {
        card.area = Area::Stack;
        self.stack_top = Some(card);
    }

    /// Empty the stack slot
    pub fn clear_stack_top(&mut self) {
        self.stack_top = None;
    }
}
