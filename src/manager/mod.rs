//! Deck manager and session state.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{CARDS_PER_SUIT, Card, Rank, Suit};
use crate::content::{CardContent, ContentTable};
use crate::error::{ConfigError, DrawError, SuitError};
use crate::event::{Event, EventQueue};
use crate::options::DeckOptions;

pub mod stats;

pub use stats::{DeckStats, SuitStats};

/// Owns the four suit decks, the active suit, and the draw history.
///
/// Each deck is shuffled once at construction and only shrinks afterwards.
/// The manager is a plain value: the caller owns it and passes it to
/// whatever handles user actions.
///
/// # Example
///
/// ```
/// use quietdeck::{DeckManager, DeckOptions, Suit};
///
/// let mut deck = DeckManager::new(DeckOptions::default(), 7);
/// deck.set_active_suit(Suit::Spades);
/// let card = deck.draw_card().unwrap();
/// assert_eq!(card.suit, Suit::Spades);
/// assert_eq!(deck.stats().total_drawn, 1);
/// ```
#[derive(Debug, Clone)]
pub struct DeckManager {
    /// Cards per suit, indexed by [`Suit::index`]. The top card is last.
    decks: [Vec<Card>; 4],
    /// Currently selected suit.
    active_suit: Suit,
    /// Every drawn card, in draw order.
    history: Vec<Card>,
    /// Pending notifications for the presentation surface.
    events: EventQueue,
}

impl DeckManager {
    /// Creates a manager with freshly shuffled decks.
    ///
    /// Missing content entries are filled with
    /// [`CardContent::PLACEHOLDER`] regardless of
    /// [`DeckOptions::strict_content`]; use [`DeckManager::try_new`] to
    /// reject incomplete tables.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let decks = Suit::ALL.map(|suit| Self::create_deck(suit, &options.content, &mut rng));
        Self::from_decks(decks, options.default_suit)
    }

    /// Creates a manager, honoring [`DeckOptions::strict_content`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingContent`] for the first card without a
    /// content entry when strict content is enabled.
    pub fn try_new(options: DeckOptions, seed: u64) -> Result<Self, ConfigError> {
        if options.strict_content {
            if let Some((suit, rank)) = options.content.first_missing() {
                return Err(ConfigError::MissingContent { suit, rank });
            }
        }

        Ok(Self::new(options, seed))
    }

    fn from_decks(decks: [Vec<Card>; 4], active_suit: Suit) -> Self {
        let mut manager = Self {
            decks,
            active_suit,
            history: Vec::with_capacity(crate::card::DECK_SIZE),
            events: EventQueue::new(),
        };
        manager.refresh();
        manager
    }

    /// Builds one suit in rank order and shuffles it.
    fn create_deck(suit: Suit, content: &ContentTable, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards: Vec<Card> = Rank::ALL
            .into_iter()
            .map(|rank| Card::new(suit, rank, Self::content_for(content, suit, rank)))
            .collect();

        cards.shuffle(rng);
        cards
    }

    fn content_for(content: &ContentTable, suit: Suit, rank: Rank) -> CardContent {
        if let Some(found) = content.get(suit, rank) {
            found
        } else {
            log::warn!("no content for {rank} of {suit}, using placeholder");
            CardContent::PLACEHOLDER
        }
    }

    fn refresh(&mut self) {
        let remaining = self.remaining(self.active_suit);
        self.events.push(Event::Refresh {
            suit: self.active_suit,
            remaining,
            can_draw: remaining > 0,
        });
    }

    /// Makes `suit` the active suit.
    ///
    /// Selecting the suit that is already active queues the same refresh
    /// without changing anything.
    pub fn set_active_suit(&mut self, suit: Suit) {
        log::debug!("active suit: {suit}");
        self.active_suit = suit;
        self.events.push(Event::ActiveSuitChanged { suit });
        self.refresh();
    }

    /// Selects a suit by name, as sent by a suit button.
    ///
    /// # Errors
    ///
    /// Returns [`SuitError::Invalid`] if the name is not a suit. The error is
    /// logged and the session is left untouched, so callers may ignore it.
    pub fn select_suit(&mut self, name: &str) -> Result<Suit, SuitError> {
        match name.parse::<Suit>() {
            Ok(suit) => {
                self.set_active_suit(suit);
                Ok(suit)
            }
            Err(err) => {
                log::error!("{err}");
                Err(err)
            }
        }
    }

    /// Draws the top card of the active suit and records it in the history.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckEmpty`] if the active suit has no cards
    /// left. A [`Event::DeckEmpty`] notice is queued and nothing else
    /// changes.
    pub fn draw_card(&mut self) -> Result<Card, DrawError> {
        let suit = self.active_suit;
        let Some(card) = self.decks[suit.index()].pop() else {
            log::info!("draw refused, {suit} is empty");
            self.events.push(Event::DeckEmpty { suit });
            return Err(DrawError::DeckEmpty(suit));
        };

        self.history.push(card);
        log::debug!("drew {card} ({} left in {suit})", self.remaining(suit));

        self.events.push(Event::CardDrawn {
            card,
            position: self.history.len() - 1,
        });
        self.refresh();

        Ok(card)
    }

    /// Returns a snapshot of the session counts.
    #[must_use]
    pub fn stats(&self) -> DeckStats {
        let suits = Suit::ALL.map(|suit| {
            let remaining = self.remaining(suit);
            SuitStats {
                suit,
                remaining,
                drawn: CARDS_PER_SUIT - remaining,
            }
        });

        DeckStats {
            total_drawn: self.history.len(),
            remaining_in_active: self.remaining(self.active_suit),
            remaining_total: self.decks.iter().map(Vec::len).sum(),
            active_suit: self.active_suit,
            suits,
        }
    }

    /// Returns the active suit.
    #[must_use]
    pub const fn active_suit(&self) -> Suit {
        self.active_suit
    }

    /// Returns the number of cards left in `suit`.
    #[must_use]
    pub fn remaining(&self, suit: Suit) -> usize {
        self.decks[suit.index()].len()
    }

    /// Returns whether the active suit still has cards.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.remaining(self.active_suit) > 0
    }

    /// Returns every drawn card, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Card] {
        &self.history
    }

    /// Returns the most recently drawn card, the one on display.
    #[must_use]
    pub fn last_drawn(&self) -> Option<Card> {
        self.history.last().copied()
    }

    /// Returns the undrawn cards of `suit`, bottom first.
    #[must_use]
    pub fn deck(&self, suit: Suit) -> &[Card] {
        &self.decks[suit.index()]
    }

    /// Removes and yields all pending notifications.
    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain()
    }
}
