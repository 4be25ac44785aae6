use quietdeck::{Card, DeckManager, DeckOptions, DeckStats, Event, SuitStats};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod console;

#[wasm_bindgen(start)]
pub fn start() {
    console::init(log::LevelFilter::Info);
}

/// Turns on debug output in the browser console.
#[wasm_bindgen]
pub fn enable_debug_logging() {
    log::set_max_level(log::LevelFilter::Debug);
}

/// Browser handle to one deck session.
///
/// Every action queues notifications in the core. Call `take_events` after
/// each `set_active_suit` or `draw` so the queue does not grow without
/// bound.
#[wasm_bindgen]
pub struct WasmDeck {
    deck: DeckManager,
}

#[wasm_bindgen]
impl WasmDeck {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            deck: DeckManager::new(DeckOptions::default(), u64::from(seed)),
        }
    }

    /// Suit button handler. Takes the exact suit name (`"Hearts"`); anything
    /// else is logged and ignored.
    pub fn set_active_suit(&mut self, suit: &str) -> bool {
        self.deck.select_suit(suit).is_ok()
    }

    /// Draw button handler. The error string is meant for an alert.
    pub fn draw(&mut self) -> Result<JsValue, JsValue> {
        let card = self.deck.draw_card().map_err(js_err)?;
        to_js_value(&JsCard::from(card))
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsStats::from(self.deck.stats()))
    }

    pub fn history(&self) -> Result<JsValue, JsValue> {
        let history: Vec<JsCard> = self
            .deck
            .history()
            .iter()
            .copied()
            .map(JsCard::from)
            .collect();
        to_js_value(&history)
    }

    /// Pending notifications since the last call, oldest first.
    pub fn take_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self.deck.drain_events().map(JsEvent::from).collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            active_suit: self.deck.active_suit().name(),
            cards_remaining: self.deck.remaining(self.deck.active_suit()) as u32,
            can_draw: self.deck.can_draw(),
            current: self.deck.last_drawn().map(JsCard::from),
            history_len: self.deck.history().len() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    active_suit: &'static str,
    cards_remaining: u32,
    can_draw: bool,
    current: Option<JsCard>,
    history_len: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    value: &'static str,
    symbol: String,
    color: &'static str,
    label: String,
    primary: &'static str,
    secondary: &'static str,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit.name(),
            value: card.rank.label(),
            symbol: card.symbol().to_string(),
            color: card.color().name(),
            label: card.to_string(),
            primary: card.content.primary,
            secondary: card.content.secondary,
        }
    }
}

#[derive(Serialize)]
struct JsSuitStats {
    suit: &'static str,
    remaining: u32,
    drawn: u32,
}

impl From<SuitStats> for JsSuitStats {
    fn from(stats: SuitStats) -> Self {
        Self {
            suit: stats.suit.name(),
            remaining: stats.remaining as u32,
            drawn: stats.drawn as u32,
        }
    }
}

#[derive(Serialize)]
struct JsStats {
    total_cards_drawn: u32,
    cards_remaining_in_active_suit: u32,
    cards_remaining_total: u32,
    active_suit: &'static str,
    suit_stats: Vec<JsSuitStats>,
}

impl From<DeckStats> for JsStats {
    fn from(stats: DeckStats) -> Self {
        Self {
            total_cards_drawn: stats.total_drawn as u32,
            cards_remaining_in_active_suit: stats.remaining_in_active as u32,
            cards_remaining_total: stats.remaining_total as u32,
            active_suit: stats.active_suit.name(),
            suit_stats: stats.suits.into_iter().map(JsSuitStats::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JsEvent {
    ActiveSuitChanged {
        suit: &'static str,
    },
    Refresh {
        suit: &'static str,
        remaining: u32,
        can_draw: bool,
    },
    CardDrawn {
        card: JsCard,
        position: u32,
    },
    DeckEmpty {
        suit: &'static str,
    },
}

impl From<Event> for JsEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::ActiveSuitChanged { suit } => Self::ActiveSuitChanged { suit: suit.name() },
            Event::Refresh {
                suit,
                remaining,
                can_draw,
            } => Self::Refresh {
                suit: suit.name(),
                remaining: remaining as u32,
                can_draw,
            },
            Event::CardDrawn { card, position } => Self::CardDrawn {
                card: JsCard::from(card),
                position: position as u32,
            },
            Event::DeckEmpty { suit } => Self::DeckEmpty { suit: suit.name() },
        }
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
