//! Level descriptors and initial-state generation
//!
//! Level files are JSON with a `Playfield` array and a `Stack` array of
//! entries carrying integer `CardFace`/`CardSuit` codes and an optional
//! `Position`. Parsing validates every code here, so the engine never sees a
//! sentinel rank or suit.

use glam::Vec2;
use serde::Deserialize;
use thiserror::Error;

use crate::game::{Area, Card, GameState, Rank, Suit};

/// Why a level file was rejected
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid card face code {0}")]
    InvalidFace(i64),
    #[error("invalid card suit code {0}")]
    InvalidSuit(i64),
}

/// Why a descriptor could not be turned into a game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("level has no playfield cards")]
    EmptyPlayfield,
    #[error("level has no stack-source cards")]
    EmptyStackSource,
}

/// One card entry in a validated descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardEntry {
    pub rank: Rank,
    pub suit: Suit,
    /// Only meaningful for playfield entries; zero for stack-source entries
    pub position: Vec2,
}

/// Validated level descriptor
///
/// Two ordered lists: the playfield tableau, and the stack source whose first
/// entry becomes the initial stack top and whose remainder fills the reserve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelDescriptor {
    pub playfield: Vec<CardEntry>,
    pub stack: Vec<CardEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPosition {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "CardFace")]
    face: i64,
    #[serde(rename = "CardSuit")]
    suit: i64,
    #[serde(rename = "Position", default)]
    position: RawPosition,
}

#[derive(Debug, Deserialize)]
struct RawLevel {
    #[serde(rename = "Playfield", default)]
    playfield: Vec<RawEntry>,
    #[serde(rename = "Stack", default)]
    stack: Vec<RawEntry>,
}

fn validate_entry(raw: &RawEntry) -> Result<CardEntry, LevelError> {
    let rank = Rank::from_code(raw.face).ok_or(LevelError::InvalidFace(raw.face))?;
    let suit = Suit::from_code(raw.suit).ok_or(LevelError::InvalidSuit(raw.suit))?;
    Ok(CardEntry {
        rank,
        suit,
        position: Vec2::new(raw.position.x, raw.position.y),
    })
}

impl LevelDescriptor {
    /// Parse and validate a level file
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let raw: RawLevel = serde_json::from_str(json)?;
        let playfield = raw
            .playfield
            .iter()
            .map(validate_entry)
            .collect::<Result<Vec<_>, _>>()?;
        let stack = raw
            .stack
            .iter()
            .map(validate_entry)
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "parsed level: {} playfield entries, {} stack entries",
            playfield.len(),
            stack.len()
        );
        Ok(Self { playfield, stack })
    }
}

/// Build the initial game state from a validated descriptor.
///
/// Ids are assigned sequentially from 0: playfield entries in descriptor
/// order, then the first stack entry (the initial stack top), then the rest
/// into the reserve in order — the last descriptor entry ends on top of the
/// reserve and is drawn first.
pub fn generate(descriptor: &LevelDescriptor) -> Result<GameState, GenerateError> {
    if descriptor.playfield.is_empty() {
        return Err(GenerateError::EmptyPlayfield);
    }
    let Some((first, rest)) = descriptor.stack.split_first() else {
        return Err(GenerateError::EmptyStackSource);
    };

    let mut state = GameState::new();

    for entry in &descriptor.playfield {
        let id = state.alloc_card_id();
        let mut card = Card::new(id, entry.suit, entry.rank, Area::Playfield);
        card.position = entry.position;
        card.face_up = true;
        state.push_playfield(card);
    }
    state.update_clickable();

    // Initial stack top: face-up but not directly clickable; matches happen
    // by clicking a playfield card
    let top_id = state.alloc_card_id();
    let mut top = Card::new(top_id, first.suit, first.rank, Area::Stack);
    top.face_up = true;
    state.set_stack_top(top);

    for entry in rest {
        let id = state.alloc_card_id();
        let card = Card::new(id, entry.suit, entry.rank, Area::Reserve);
        state.push_reserve(card);
    }

    log::info!(
        "generated level: {} playfield cards, 1 stack top, {} reserve cards",
        state.playfield().len(),
        state.reserve_count()
    );
    Ok(state)
}
