//! Card value types and the rank-adjacency matching rule

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Card rank, ordered Ace (0) through King (12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in value order
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value 0..=12, the order matching compares on
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Decode the level-file integer code (0 = Ace .. 12 = King)
    pub fn from_code(code: i64) -> Option<Rank> {
        usize::try_from(code).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Display label: A, 2..10, J, Q, K
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Card suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in code order
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Decode the level-file integer code (0 = Clubs .. 3 = Spades)
    pub fn from_code(code: i64) -> Option<Suit> {
        usize::try_from(code).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Hearts and Diamonds are red, Clubs and Spades are black
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Which collection a card currently lives in
///
/// There is no "none" area: a card only ever exists inside one of the three
/// collections of a [`GameState`](super::GameState), and the state keeps this
/// field consistent with the collection holding the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Area {
    Playfield,
    Stack,
    Reserve,
}

/// A single card
///
/// Ids are assigned monotonically by the game state and never reused, even
/// after a card is matched away. `position` is only meaningful while the card
/// is in the playfield (occlusion and undo restoration read it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub suit: Suit,
    pub rank: Rank,
    pub position: Vec2,
    pub area: Area,
    pub face_up: bool,
    pub clickable: bool,
}

impl Card {
    /// New card at the origin, face-down and unclickable
    pub fn new(id: u32, suit: Suit, rank: Rank, area: Area) -> Self {
        Self {
            id,
            suit,
            rank,
            position: Vec2::ZERO,
            area,
            face_up: false,
            clickable: false,
        }
    }

    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Whether this card may be consumed against `other` (rank adjacency)
    pub fn can_match_with(&self, other: &Card) -> bool {
        can_match(self.rank, other.rank)
    }
}

/// The matching rule: ranks match iff they are exactly one apart, with
/// Ace and King additionally matching each other (circular adjacency).
///
/// Pure, total and symmetric. The wraparound is exactly the one Ace↔King
/// pair; it does not generalize (e.g. King does not match Two).
pub fn can_match(a: Rank, b: Rank) -> bool {
    let diff = (a.value() as i8 - b.value() as i8).abs();
    diff == 1 || matches!((a, b), (Rank::Ace, Rank::King) | (Rank::King, Rank::Ace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_can_match_adjacent() {
        assert!(can_match(Rank::Three, Rank::Four));
        assert!(can_match(Rank::Four, Rank::Three));
        assert!(can_match(Rank::Ace, Rank::Two));
        assert!(can_match(Rank::Queen, Rank::King));
    }

    #[test]
    fn test_can_match_wraparound_is_single_pair() {
        assert!(can_match(Rank::Ace, Rank::King));
        assert!(can_match(Rank::King, Rank::Ace));
        // No transitive generalization of the wraparound
        assert!(!can_match(Rank::Ace, Rank::Queen));
        assert!(!can_match(Rank::King, Rank::Two));
    }

    #[test]
    fn test_can_match_rejects_distant_ranks() {
        assert!(!can_match(Rank::Three, Rank::Three));
        assert!(!can_match(Rank::Five, Rank::Seven));
        assert!(!can_match(Rank::Two, Rank::Ten));
    }

    #[test]
    fn test_can_match_symmetric_exhaustive() {
        for &a in &Rank::ALL {
            for &b in &Rank::ALL {
                assert_eq!(can_match(a, b), can_match(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_rank_codes() {
        assert_eq!(Rank::from_code(0), Some(Rank::Ace));
        assert_eq!(Rank::from_code(12), Some(Rank::King));
        assert_eq!(Rank::from_code(13), None);
        assert_eq!(Rank::from_code(-1), None);
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(Rank::Ace.label(), "A");
        assert_eq!(Rank::Ten.label(), "10");
        assert_eq!(Rank::King.label(), "K");
    }

    #[test]
    fn test_suit_colors() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
        assert!(!Suit::Spades.is_red());
    }

    #[test]
    fn test_suit_codes() {
        assert_eq!(Suit::from_code(1), Some(Suit::Diamonds));
        assert_eq!(Suit::from_code(4), None);
        assert_eq!(Suit::from_code(-1), None);
    }

    proptest! {
        #[test]
        fn prop_can_match_symmetric(a in 0usize..13, b in 0usize..13) {
            let (ra, rb) = (Rank::ALL[a], Rank::ALL[b]);
            prop_assert_eq!(can_match(ra, rb), can_match(rb, ra));
        }
    }
}
