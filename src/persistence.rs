//! Save/resume persistence
//!
//! A versioned JSON envelope around the full game state. Round-tripping
//! reproduces an identical state including the id counter, so cards created
//! after a resume never collide with restored ids. The undo history is not
//! persisted: a resumed game starts with an empty undo stack.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::GameState;

/// Current save format version
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save data parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported save version {0}")]
    Version(u32),
}

#[derive(Debug, Serialize)]
struct SaveEnvelope<'a> {
    version: u32,
    state: &'a GameState,
}

#[derive(Debug, Deserialize)]
struct LoadEnvelope {
    version: u32,
    state: GameState,
}

/// Serialize a game state into the versioned envelope
pub fn save_to_json(state: &GameState) -> Result<String, SaveError> {
    let envelope = SaveEnvelope {
        version: SAVE_VERSION,
        state,
    };
    let json = serde_json::to_string(&envelope)?;
    log::info!("saved game state ({} bytes)", json.len());
    Ok(json)
}

/// Deserialize a game state, rejecting unknown envelope versions
pub fn load_from_json(json: &str) -> Result<GameState, SaveError> {
    let envelope: LoadEnvelope = serde_json::from_str(json)?;
    if envelope.version != SAVE_VERSION {
        return Err(SaveError::Version(envelope.version));
    }
    log::info!(
        "loaded game state: {} playfield cards, {} reserve cards",
        envelope.state.playfield().len(),
        envelope.state.reserve_count()
    );
    Ok(envelope.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Rank, Suit, UndoStack};
    use crate::level::{CardEntry, LevelDescriptor, generate};
    use glam::Vec2;

    fn sample_state() -> GameState {
        let descriptor = LevelDescriptor {
            playfield: vec![
                CardEntry {
                    rank: Rank::Three,
                    suit: Suit::Clubs,
                    position: Vec2::new(300.0, 800.0),
                },
                CardEntry {
                    rank: Rank::King,
                    suit: Suit::Spades,
                    position: Vec2::new(850.0, 600.0),
                },
            ],
            stack: vec![
                CardEntry {
                    rank: Rank::Four,
                    suit: Suit::Clubs,
                    position: Vec2::ZERO,
                },
                CardEntry {
                    rank: Rank::Ace,
                    suit: Suit::Hearts,
                    position: Vec2::ZERO,
                },
            ],
        };
        generate(&descriptor).unwrap()
    }

    #[test]
    fn test_round_trip_identity() {
        let state = sample_state();
        let json = save_to_json(&state).unwrap();
        let restored = load_from_json(&json).unwrap();
        assert_eq!(state, restored);
    }

    #[test]
    fn test_round_trip_after_mutations() {
        let mut state = sample_state();
        let mut undo = UndoStack::new();

        let outcome = state.attempt_match(0).unwrap();
        let pos = outcome.moved_card.position;
        undo.record_playfield_to_stack(outcome.moved_card, outcome.previous_stack_top, pos, Vec2::ZERO);
        state.draw_reserve().unwrap();

        let json = save_to_json(&state).unwrap();
        let restored = load_from_json(&json).unwrap();
        assert_eq!(state, restored);
    }

    #[test]
    fn test_restored_state_never_reissues_ids() {
        let state = sample_state();
        let existing: Vec<u32> = state
            .playfield()
            .iter()
            .chain(state.stack_top())
            .chain(state.reserve())
            .map(|c| c.id)
            .collect();

        let json = save_to_json(&state).unwrap();
        let mut restored = load_from_json(&json).unwrap();
        let fresh = restored.alloc_card_id();
        assert!(!existing.contains(&fresh));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let state = sample_state();
        let json = save_to_json(&state).unwrap();
        let bumped = json.replacen("\"version\":1", "\"version\":99", 1);
        assert!(matches!(load_from_json(&bumped), Err(SaveError::Version(99))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(load_from_json("{broken"), Err(SaveError::Json(_))));
    }
}
