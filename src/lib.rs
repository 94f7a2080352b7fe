//! Tri-peaks card-clear game core
//!
//! Core modules:
//! - `game`: the game-state engine (cards, rank matching, occlusion-based
//!   clickability, reversible operations)
//! - `level`: level descriptor parsing and initial-state generation
//! - `persistence`: versioned save/resume envelope
//!
//! Rendering, animation and input dispatch are deliberately absent: the engine
//! is synchronous and single-actor, the integration layer issues one command
//! at a time and sequences any visual effects between commands.

pub mod game;
pub mod level;
pub mod persistence;

pub use game::{
    Area, Card, DrawError, DrawOutcome, GameState, MatchError, MatchOutcome, Rank, Suit,
    UndoError, UndoRecord, UndoStack, can_match,
};
pub use level::{CardEntry, GenerateError, LevelDescriptor, LevelError, generate};
pub use persistence::{SAVE_VERSION, SaveError, load_from_json, save_to_json};

/// Game configuration constants
pub mod consts {
    /// Design resolution the level coordinates are authored in
    pub const DESIGN_WIDTH: f32 = 1080.0;
    pub const DESIGN_HEIGHT: f32 = 2080.0;

    /// Playfield (tableau) region
    pub const PLAYFIELD_WIDTH: f32 = 1080.0;
    pub const PLAYFIELD_HEIGHT: f32 = 1500.0;

    /// Stack/reserve region below the playfield
    pub const STACK_AREA_WIDTH: f32 = 1080.0;
    pub const STACK_AREA_HEIGHT: f32 = 580.0;

    /// Card sprite size; occlusion boxes are this size, centered on position
    pub const CARD_WIDTH: f32 = 150.0;
    pub const CARD_HEIGHT: f32 = 210.0;
}
