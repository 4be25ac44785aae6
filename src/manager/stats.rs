//! Statistics snapshots.

use crate::card::Suit;

/// Remaining and drawn counts for one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitStats {
    /// The suit.
    pub suit: Suit,
    /// Cards still in the deck.
    pub remaining: usize,
    /// Cards drawn from the deck.
    pub drawn: usize,
}

/// Snapshot of the whole session.
///
/// For every suit `remaining + drawn` is 13, and the sum of remaining cards
/// plus `total_drawn` is 52.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckStats {
    /// Cards drawn across all suits (the history length).
    pub total_drawn: usize,
    /// Cards left in the active suit.
    pub remaining_in_active: usize,
    /// Cards left across all suits.
    pub remaining_total: usize,
    /// The active suit.
    pub active_suit: Suit,
    /// Per-suit breakdown, in [`Suit::ALL`] order.
    pub suits: [SuitStats; 4],
}

impl DeckStats {
    /// Returns the breakdown for one suit.
    #[must_use]
    pub const fn suit(&self, suit: Suit) -> SuitStats {
        self.suits[suit.index()]
    }
}
