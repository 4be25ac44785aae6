//! Card types and the fixed suit/rank sets.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::content::CardContent;
use crate::error::{RankError, SuitError};

/// Number of cards in each suit deck.
pub const CARDS_PER_SUIT: usize = 13;

/// Number of cards across all four suit decks.
pub const DECK_SIZE: usize = CARDS_PER_SUIT * Suit::ALL.len();

/// Card suit.
///
/// Each suit owns its own deck; the order of [`Suit::ALL`] is the order
/// used for statistics and for building decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in display order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the suit name as shown to players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
        }
    }

    /// Returns the suit glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Spades => '♠',
            Self::Clubs => '♣',
        }
    }

    /// Returns the color cards of this suit are printed in.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Spades | Self::Clubs => Color::Black,
        }
    }

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = SuitError;

    /// Parses a suit name. Only the exact names from [`Suit::name`] match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| SuitError::Invalid(s.to_string()))
    }
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}

impl Color {
    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

/// Card value within a suit, ordered from ace to king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, ace first.
    pub const ALL: [Self; CARDS_PER_SUIT] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Short label printed on the card (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Position of the rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = RankError;

    /// Parses a card label such as `A`, `10` or `J`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or_else(|| RankError::Invalid(s.to_string()))
    }
}

/// A drawn or drawable card.
///
/// Color and symbol are not stored; they follow from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The value of the card.
    pub rank: Rank,
    /// Prompt text printed on the card.
    pub content: CardContent,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank, content: CardContent) -> Self {
        Self {
            suit,
            rank,
            content,
        }
    }

    /// Returns the card color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns the suit glyph.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.suit.symbol()
    }

    /// Returns whether the card is printed in red.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        matches!(self.color(), Color::Red)
    }
}

/// Compact history label: the value followed by the suit glyph, e.g. `10♦`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.symbol())
    }
}
