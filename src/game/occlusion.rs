//! Occlusion-based clickability
//!
//! A playfield card may only be clicked when no other card covers it. Cover
//! is geometric: fixed-size bounding boxes centered on card positions, and
//! the coordinate convention is that a *smaller* y sits closer to the viewer.

use glam::Vec2;

use super::card::Card;
use crate::consts::{CARD_HEIGHT, CARD_WIDTH};

/// Axis-aligned overlap test between two card bounding boxes
///
/// Boxes are `CARD_WIDTH x CARD_HEIGHT`, centered on each position. Touching
/// edges do not count as overlap (strict inequalities).
pub fn overlaps(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < CARD_WIDTH && (a.y - b.y).abs() < CARD_HEIGHT
}

/// Recompute the `clickable` flag for every playfield card.
///
/// A card is blocked iff some other card has a strictly smaller y (drawn
/// later, closer to the viewer) and an overlapping bounding box. Equal y
/// never occludes. O(n²) over the playfield, which stays in the tens of
/// cards; must run in full after every playfield membership change.
pub fn update_clickable(cards: &mut [Card]) {
    for i in 0..cards.len() {
        let (id, pos) = (cards[i].id, cards[i].position);
        let blocked = cards
            .iter()
            .any(|other| other.id != id && other.position.y < pos.y && overlaps(pos, other.position));
        cards[i].clickable = !blocked;
    }
    log::debug!("clickability recomputed for {} playfield cards", cards.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::{Area, Rank, Suit};
    use proptest::prelude::*;

    fn card_at(id: u32, x: f32, y: f32) -> Card {
        let mut card = Card::new(id, Suit::Clubs, Rank::Five, Area::Playfield);
        card.position = Vec2::new(x, y);
        card.face_up = true;
        card
    }

    #[test]
    fn test_overlapping_upper_card_blocks_lower() {
        // Card 1 sits 100 below card 0 on screen (larger y = further back)
        let mut cards = vec![card_at(0, 300.0, 700.0), card_at(1, 300.0, 800.0)];
        update_clickable(&mut cards);
        // The card closer to the viewer is clickable, the covered one is not
        assert!(cards[0].clickable);
        assert!(!cards[1].clickable);
    }

    #[test]
    fn test_no_overlap_both_clickable() {
        let mut cards = vec![card_at(0, 250.0, 1000.0), card_at(1, 850.0, 600.0)];
        update_clickable(&mut cards);
        assert!(cards[0].clickable);
        assert!(cards[1].clickable);
    }

    #[test]
    fn test_equal_y_never_occludes() {
        // Heavily overlapping but at the same depth
        let mut cards = vec![card_at(0, 300.0, 800.0), card_at(1, 320.0, 800.0)];
        update_clickable(&mut cards);
        assert!(cards[0].clickable);
        assert!(cards[1].clickable);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Exactly one card-width apart horizontally; strict test must pass
        let mut cards = vec![
            card_at(0, 300.0, 700.0),
            card_at(1, 300.0 + CARD_WIDTH, 800.0),
        ];
        update_clickable(&mut cards);
        assert!(cards[1].clickable);
    }

    #[test]
    fn test_blocked_by_any_of_several() {
        let mut cards = vec![
            card_at(0, 300.0, 900.0),
            card_at(1, 260.0, 820.0),
            card_at(2, 340.0, 820.0),
        ];
        update_clickable(&mut cards);
        assert!(!cards[0].clickable);
        assert!(cards[1].clickable);
        assert!(cards[2].clickable);
    }

    proptest! {
        #[test]
        fn prop_lone_card_always_clickable(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
            let mut cards = vec![card_at(0, x, y)];
            update_clickable(&mut cards);
            prop_assert!(cards[0].clickable);
        }

        #[test]
        fn prop_frontmost_card_always_clickable(
            offsets in proptest::collection::vec((-400.0f32..400.0, 1.0f32..600.0), 1..8)
        ) {
            // Card 0 has the strictly smallest y, so nothing can block it
            let mut cards = vec![card_at(0, 500.0, 500.0)];
            for (i, (dx, dy)) in offsets.iter().enumerate() {
                cards.push(card_at(i as u32 + 1, 500.0 + dx, 500.0 + dy));
            }
            update_clickable(&mut cards);
            prop_assert!(cards[0].clickable);
        }
    }
}
