//! Prompt text printed on each card.
//!
//! The table is plain data keyed by suit and rank. Lookups return an
//! [`Option`]; the deck builder decides what a missing entry turns into.

use crate::card::{CARDS_PER_SUIT, Rank, Suit};

/// The two lines of prompt text on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardContent {
    /// Headline prompt.
    pub primary: &'static str,
    /// Supporting prompt.
    pub secondary: &'static str,
}

impl CardContent {
    /// Text used for a card with no table entry.
    pub const PLACEHOLDER: Self = Self::new("No primary content", "No secondary content");

    /// Creates card content from its two lines.
    #[must_use]
    pub const fn new(primary: &'static str, secondary: &'static str) -> Self {
        Self { primary, secondary }
    }
}

const fn entry(primary: &'static str, secondary: &'static str) -> Option<CardContent> {
    Some(CardContent::new(primary, secondary))
}

/// Card content keyed by `(suit, rank)`.
///
/// ```
/// use quietdeck::{CardContent, ContentTable, Rank, Suit};
///
/// let table = ContentTable::empty().with_entry(
///     Suit::Clubs,
///     Rank::Ace,
///     CardContent::new("Creative spark ignites", "New inspiration drives action"),
/// );
/// assert!(table.get(Suit::Clubs, Rank::Ace).is_some());
/// assert!(table.get(Suit::Clubs, Rank::Two).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTable {
    entries: [[Option<CardContent>; CARDS_PER_SUIT]; 4],
}

impl ContentTable {
    /// A table with no entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: [[None; CARDS_PER_SUIT]; 4],
        }
    }

    /// The full Quiet Year table, one entry for every card.
    #[must_use]
    pub const fn quiet_year() -> Self {
        Self {
            entries: QUIET_YEAR,
        }
    }

    /// Sets the content for one card.
    #[must_use]
    pub const fn with_entry(mut self, suit: Suit, rank: Rank, content: CardContent) -> Self {
        self.entries[suit.index()][rank.index()] = Some(content);
        self
    }

    /// Removes the content for one card.
    #[must_use]
    pub const fn without_entry(mut self, suit: Suit, rank: Rank) -> Self {
        self.entries[suit.index()][rank.index()] = None;
        self
    }

    /// Looks up the content for a card.
    #[must_use]
    pub const fn get(&self, suit: Suit, rank: Rank) -> Option<CardContent> {
        self.entries[suit.index()][rank.index()]
    }

    /// Returns the first `(suit, rank)` without an entry, in deck order.
    #[must_use]
    pub fn first_missing(&self) -> Option<(Suit, Rank)> {
        Suit::ALL.into_iter().find_map(|suit| {
            Rank::ALL
                .into_iter()
                .find(|&rank| self.get(suit, rank).is_none())
                .map(|rank| (suit, rank))
        })
    }
}

impl Default for ContentTable {
    fn default() -> Self {
        Self::quiet_year()
    }
}

// Rows follow `Suit::ALL`, columns follow `Rank::ALL`.
const QUIET_YEAR: [[Option<CardContent>; CARDS_PER_SUIT]; 4] = [
    // Hearts
    [
        entry("A new beginning emerges", "Something starts fresh in the community"),
        entry("Two paths diverge", "A choice must be made between options"),
        entry("Three voices speak", "Different perspectives come to light"),
        entry("Foundation is built", "Something stable takes root"),
        entry("Change brings uncertainty", "Old ways are challenged"),
        entry("Balance is sought", "Harmony must be restored"),
        entry("Secrets are revealed", "Hidden truths come to light"),
        entry("Strength in unity", "Working together brings power"),
        entry("Near completion", "Something approaches its end"),
        entry("Cycle fulfilled", "A chapter closes completely"),
        entry("Young energy arrives", "New ideas challenge tradition"),
        entry("Wisdom guides action", "Experience shows the way"),
        entry("Authority decides", "Leadership must take responsibility"),
    ],
    // Diamonds
    [
        entry("Valuable discovery made", "Something precious is found"),
        entry("Resources are shared", "Wealth benefits the community"),
        entry("Trade opportunities", "Exchange creates new possibilities"),
        entry("Secure foundation", "Material stability is achieved"),
        entry("Loss threatens security", "Scarcity brings difficult choices"),
        entry("Generosity flows", "Sharing creates abundance"),
        entry("Investment pays off", "Past efforts yield rewards"),
        entry("Skilled work flourishes", "Craftsmanship brings prosperity"),
        entry("Abundance achieved", "Material needs are met"),
        entry("Wealth established", "Lasting prosperity secured"),
        entry("New ventures begin", "Ambitious projects take shape"),
        entry("Practical wisdom", "Experience guides resource use"),
        entry("Master of resources", "Wealth serves greater purpose"),
    ],
    // Spades
    [
        entry("Breakthrough moment", "Sharp insight cuts through confusion"),
        entry("Difficult balance", "Two opposing forces create tension"),
        entry("Heartbreak divides", "Pain separates what was united"),
        entry("Rest after struggle", "Pause before the next challenge"),
        entry("Conflict erupts", "Disagreement threatens peace"),
        entry("Moving beyond pain", "Healing journey begins"),
        entry("Deception revealed", "Hidden motives come to light"),
        entry("Trapped by circumstances", "Limitations constrain action"),
        entry("Anxiety overwhelms", "Fear paralyzes progress"),
        entry("Painful ending", "Necessary conclusion brings sorrow"),
        entry("Rash action taken", "Impulsive decisions have consequences"),
        entry("Clear-eyed judgment", "Truth spoken without sentiment"),
        entry("Authoritative decision", "Power used to cut through problems"),
    ],
    // Clubs
    [
        entry("Creative spark ignites", "New inspiration drives action"),
        entry("Planning the future", "Vision guides next steps"),
        entry("Collaborative effort", "Working together creates progress"),
        entry("Celebration of achievement", "Success brings community together"),
        entry("Competition emerges", "Rivalry tests relationships"),
        entry("Victory recognized", "Achievement earns respect"),
        entry("Standing firm", "Defending position against pressure"),
        entry("Swift progress", "Momentum carries projects forward"),
        entry("Resilience tested", "Strength to continue despite obstacles"),
        entry("Burden of responsibility", "Heavy load challenges endurance"),
        entry("Enthusiastic messenger", "New information energizes action"),
        entry("Passionate leadership", "Emotional intelligence guides others"),
        entry("Visionary command", "Inspiring others to achieve greatness"),
    ],
];
