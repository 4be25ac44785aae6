//! Terminal front end for the Quiet Year deck.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};
use quietdeck::{Card, Color, DeckManager, DeckOptions, Event, Suit};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn main() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Warn);
    }

    println!("The Quiet Year deck (type 'q' to quit)");
    println!("Commands: h/d/s/c or a suit name to select, Enter to draw, 'stats', 'history'");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = DeckManager::new(DeckOptions::default(), seed);
    render(&mut deck);

    loop {
        let input = prompt_line(&format!("[{}] > ", deck.active_suit()));
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "" | "draw" => {
                // An empty suit is reported through the DeckEmpty event.
                deck.draw_card().ok();
            }
            "stats" => print_stats(&deck),
            "history" => print_history(&deck),
            "h" | "hearts" => deck.set_active_suit(Suit::Hearts),
            "d" | "diamonds" => deck.set_active_suit(Suit::Diamonds),
            "s" | "spades" => deck.set_active_suit(Suit::Spades),
            "c" | "clubs" => deck.set_active_suit(Suit::Clubs),
            other => println!("Unknown command: {other}"),
        }
        render(&mut deck);
    }
}

fn render(deck: &mut DeckManager) {
    for event in deck.drain_events() {
        match event {
            Event::ActiveSuitChanged { suit } => {
                let row = Suit::ALL
                    .iter()
                    .map(|&s| {
                        if s == suit {
                            format!("[{s}]")
                        } else {
                            s.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("  ");
                println!("{row}");
            }
            Event::Refresh {
                remaining,
                can_draw,
                ..
            } => {
                let state = if can_draw { "" } else { " (draw disabled)" };
                println!("Cards remaining: {remaining}{state}");
            }
            Event::CardDrawn { card, position } => print_card(&card, position),
            Event::DeckEmpty { suit } => println!("No more cards in {suit}!"),
        }
    }
}

fn print_card(card: &Card, position: usize) {
    println!();
    println!("  #{} {}", position + 1, format_card(card));
    println!("  {} of {}", card.rank, card.suit);
    println!("  {}", card.content.primary);
    println!("  {}", card.content.secondary);
    println!();
}

fn print_stats(deck: &DeckManager) {
    let stats = deck.stats();
    println!(
        "Drawn: {}  Remaining: {} ({} in {})",
        stats.total_drawn, stats.remaining_total, stats.remaining_in_active, stats.active_suit
    );
    for suit in stats.suits {
        println!(
            "  {:<9} remaining {:>2}  drawn {:>2}",
            suit.suit.name(),
            suit.remaining,
            suit.drawn
        );
    }
}

fn print_history(deck: &DeckManager) {
    if deck.history().is_empty() {
        println!("(no cards drawn)");
        return;
    }
    for card in deck.history() {
        println!("  {}  {}", format_card(card), card.content.primary);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn format_card(card: &Card) -> String {
    let code = match card.color() {
        Color::Red => "31",
        Color::Black => "37",
    };
    colorize(&card.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
