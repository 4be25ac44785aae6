//! Error types for deck operations.

use alloc::string::String;

use thiserror::Error;

use crate::card::{Rank, Suit};

/// Errors that can occur when selecting a suit by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuitError {
    /// The name is not one of the four suits.
    #[error("invalid suit: {0}")]
    Invalid(String),
}

/// Errors that can occur when parsing a card value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The label is not one of the thirteen values.
    #[error("invalid card value: {0}")]
    Invalid(String),
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The active suit has no cards left.
    #[error("no more cards in {0}!")]
    DeckEmpty(Suit),
}

/// Errors that can occur while building the decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The content table has no entry for this card.
    #[error("no content for {rank} of {suit}")]
    MissingContent {
        /// Suit of the card.
        suit: Suit,
        /// Value of the card.
        rank: Rank,
    },
}
