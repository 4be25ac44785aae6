//! Deck configuration options.

use crate::card::Suit;
use crate::content::ContentTable;

/// Configuration options for a [`DeckManager`](crate::DeckManager).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use quietdeck::{DeckOptions, Suit};
///
/// let options = DeckOptions::default()
///     .with_default_suit(Suit::Spades)
///     .with_strict_content(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Suit that is active when the manager is created.
    pub default_suit: Suit,
    /// Prompt text for every card.
    pub content: ContentTable,
    /// Whether a missing content entry fails construction instead of
    /// falling back to [`CardContent::PLACEHOLDER`](crate::CardContent::PLACEHOLDER).
    pub strict_content: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            default_suit: Suit::Hearts,
            content: ContentTable::quiet_year(),
            strict_content: false,
        }
    }
}

impl DeckOptions {
    /// Sets the suit that starts active.
    ///
    /// # Example
    ///
    /// ```
    /// use quietdeck::{DeckOptions, Suit};
    ///
    /// let options = DeckOptions::default().with_default_suit(Suit::Clubs);
    /// assert_eq!(options.default_suit, Suit::Clubs);
    /// ```
    #[must_use]
    pub const fn with_default_suit(mut self, suit: Suit) -> Self {
        self.default_suit = suit;
        self
    }

    /// Replaces the content table.
    ///
    /// # Example
    ///
    /// ```
    /// use quietdeck::{ContentTable, DeckOptions, Rank, Suit};
    ///
    /// let options = DeckOptions::default().with_content(ContentTable::empty());
    /// assert!(options.content.get(Suit::Hearts, Rank::Ace).is_none());
    /// ```
    #[must_use]
    pub const fn with_content(mut self, content: ContentTable) -> Self {
        self.content = content;
        self
    }

    /// Sets whether missing content is a construction error.
    ///
    /// # Example
    ///
    /// ```
    /// use quietdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_strict_content(true);
    /// assert!(options.strict_content);
    /// ```
    #[must_use]
    pub const fn with_strict_content(mut self, strict: bool) -> Self {
        self.strict_content = strict;
        self
    }
}
