//! Notifications for the presentation surface.
//!
//! Operations on [`DeckManager`](crate::DeckManager) queue events instead of
//! calling into the UI. The surface drains the queue after each action and
//! renders whatever it can; nothing in the core depends on rendering working.

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Something the presentation surface should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A suit was selected. Sent even when it was already active.
    ActiveSuitChanged {
        /// The newly active suit.
        suit: Suit,
    },
    /// Suit highlighting, remaining count, and draw control state.
    Refresh {
        /// The active suit.
        suit: Suit,
        /// Cards left in the active suit.
        remaining: usize,
        /// Whether the draw control should be enabled.
        can_draw: bool,
    },
    /// A card was drawn and appended to the history.
    CardDrawn {
        /// The drawn card.
        card: Card,
        /// Index of the card in the history.
        position: usize,
    },
    /// A draw was attempted on an exhausted suit.
    DeckEmpty {
        /// The exhausted suit.
        suit: Suit,
    },
}

/// FIFO of pending events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    queue: Vec<Event>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Appends an event.
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Removes and yields all pending events in the order they were queued.
    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
