//! A per-suit card deck manager for The Quiet Year, with optional `no_std`
//! support.
//!
//! The crate provides a [`DeckManager`] that keeps one shuffled 13-card deck
//! per suit, an active suit, and the history of drawn cards. A presentation
//! surface calls its operations directly and renders the queued [`Event`]s.
//!
//! # Example
//!
//! ```
//! use quietdeck::{DeckManager, DeckOptions, DrawError, Suit};
//!
//! let mut deck = DeckManager::new(DeckOptions::default(), 42);
//! for _ in 0..13 {
//!     deck.draw_card().unwrap();
//! }
//! assert_eq!(deck.draw_card(), Err(DrawError::DeckEmpty(Suit::Hearts)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod content;
pub mod error;
pub mod event;
pub mod manager;
pub mod options;

// Re-export main types
pub use card::{CARDS_PER_SUIT, Card, Color, DECK_SIZE, Rank, Suit};
pub use content::{CardContent, ContentTable};
pub use error::{ConfigError, DrawError, RankError, SuitError};
pub use event::{Event, EventQueue};
pub use manager::{DeckManager, DeckStats, SuitStats};
pub use options::DeckOptions;
