//! Deck manager integration tests.

use std::collections::HashSet;

use quietdeck::{
    CARDS_PER_SUIT, CardContent, Color, ConfigError, ContentTable, DECK_SIZE, DeckManager,
    DeckOptions, DrawError, Event, Rank, RankError, Suit, SuitError,
};

fn manager(seed: u64) -> DeckManager {
    DeckManager::new(DeckOptions::default(), seed)
}

#[test]
fn every_suit_starts_with_one_card_per_rank() {
    let deck = manager(1);

    for suit in Suit::ALL {
        let cards = deck.deck(suit);
        assert_eq!(cards.len(), CARDS_PER_SUIT);
        assert!(cards.iter().all(|card| card.suit == suit));

        let ranks: HashSet<Rank> = cards.iter().map(|card| card.rank).collect();
        assert_eq!(ranks.len(), CARDS_PER_SUIT);
    }
}

#[test]
fn shuffle_only_reorders() {
    for seed in 0..20 {
        let deck = manager(seed);
        for suit in Suit::ALL {
            let mut ranks: Vec<Rank> = deck.deck(suit).iter().map(|card| card.rank).collect();
            ranks.sort();
            assert_eq!(ranks, Rank::ALL);
        }
    }
}

#[test]
fn shuffle_depends_on_seed() {
    let orders: HashSet<Vec<Rank>> = (0..8)
        .map(|seed| {
            manager(seed)
                .deck(Suit::Hearts)
                .iter()
                .map(|card| card.rank)
                .collect()
        })
        .collect();
    assert!(orders.len() > 1);
}

#[test]
fn same_seed_gives_same_decks() {
    let a = manager(99);
    let b = manager(99);
    for suit in Suit::ALL {
        assert_eq!(a.deck(suit), b.deck(suit));
    }
}

#[test]
fn cards_carry_suit_color_symbol_and_content() {
    let deck = manager(3);

    for suit in Suit::ALL {
        for card in deck.deck(suit) {
            assert_eq!(card.symbol(), suit.symbol());
            assert_eq!(card.color(), suit.color());
            assert_eq!(
                Some(card.content),
                ContentTable::quiet_year().get(suit, card.rank)
            );
        }
    }

    assert_eq!(Suit::Hearts.color(), Color::Red);
    assert_eq!(Suit::Diamonds.color(), Color::Red);
    assert_eq!(Suit::Spades.color(), Color::Black);
    assert_eq!(Suit::Clubs.color(), Color::Black);

    let symbols: HashSet<char> = Suit::ALL.iter().map(|suit| suit.symbol()).collect();
    assert_eq!(symbols.len(), 4);
}

#[test]
fn quiet_year_table_is_complete() {
    assert_eq!(ContentTable::quiet_year().first_missing(), None);
    assert_eq!(
        ContentTable::quiet_year().get(Suit::Hearts, Rank::Ace),
        Some(CardContent::new(
            "A new beginning emerges",
            "Something starts fresh in the community"
        ))
    );
    assert_eq!(
        ContentTable::quiet_year().get(Suit::Clubs, Rank::King),
        Some(CardContent::new(
            "Visionary command",
            "Inspiring others to achieve greatness"
        ))
    );
}

#[test]
fn starts_on_default_suit() {
    assert_eq!(manager(1).active_suit(), Suit::Hearts);

    let options = DeckOptions::default().with_default_suit(Suit::Diamonds);
    let deck = DeckManager::new(options, 1);
    assert_eq!(deck.active_suit(), Suit::Diamonds);
}

#[test]
fn construction_queues_initial_refresh() {
    let mut deck = manager(1);
    let events: Vec<Event> = deck.drain_events().collect();
    assert_eq!(
        events,
        vec![Event::Refresh {
            suit: Suit::Hearts,
            remaining: CARDS_PER_SUIT,
            can_draw: true,
        }]
    );
    assert_eq!(deck.drain_events().count(), 0);
}

#[test]
fn draw_pops_top_of_active_deck() {
    let mut deck = manager(5);
    deck.set_active_suit(Suit::Clubs);

    let top = *deck.deck(Suit::Clubs).last().unwrap();
    let card = deck.draw_card().unwrap();

    assert_eq!(card, top);
    assert_eq!(deck.remaining(Suit::Clubs), CARDS_PER_SUIT - 1);
    assert_eq!(deck.history(), &[card]);
    assert_eq!(deck.last_drawn(), Some(card));
    for suit in [Suit::Hearts, Suit::Diamonds, Suit::Spades] {
        assert_eq!(deck.remaining(suit), CARDS_PER_SUIT);
    }
}

#[test]
fn draw_order_follows_shuffle() {
    let mut deck = manager(12);
    let mut expected: Vec<_> = deck.deck(Suit::Hearts).to_vec();
    expected.reverse();

    let drawn: Vec<_> = (0..CARDS_PER_SUIT)
        .map(|_| deck.draw_card().unwrap())
        .collect();
    assert_eq!(drawn, expected);
}

#[test]
fn draw_queues_card_and_refresh() {
    let mut deck = manager(2);
    deck.drain_events().for_each(drop);

    let card = deck.draw_card().unwrap();
    let events: Vec<Event> = deck.drain_events().collect();
    assert_eq!(
        events,
        vec![
            Event::CardDrawn { card, position: 0 },
            Event::Refresh {
                suit: Suit::Hearts,
                remaining: CARDS_PER_SUIT - 1,
                can_draw: true,
            },
        ]
    );
}

#[test]
fn fourteenth_draw_is_rejected() {
    let mut deck = manager(4);
    deck.set_active_suit(Suit::Hearts);

    let mut last = None;
    for _ in 0..CARDS_PER_SUIT {
        last = Some(deck.draw_card().unwrap());
    }
    assert_eq!(last, deck.history().last().copied());
    assert_eq!(deck.remaining(Suit::Hearts), 0);
    assert!(!deck.can_draw());
    deck.drain_events().for_each(drop);

    assert_eq!(deck.draw_card(), Err(DrawError::DeckEmpty(Suit::Hearts)));
    assert_eq!(deck.history().len(), CARDS_PER_SUIT);
    assert_eq!(deck.remaining(Suit::Hearts), 0);
    assert_eq!(
        deck.drain_events().collect::<Vec<_>>(),
        vec![Event::DeckEmpty { suit: Suit::Hearts }]
    );

    let stats = deck.stats();
    let hearts = stats.suit(Suit::Hearts);
    assert_eq!((hearts.remaining, hearts.drawn), (0, CARDS_PER_SUIT));
    for suit in [Suit::Diamonds, Suit::Spades, Suit::Clubs] {
        let other = stats.suit(suit);
        assert_eq!((other.remaining, other.drawn), (CARDS_PER_SUIT, 0));
    }
}

#[test]
fn repeated_empty_draws_leave_nothing_after_drain() {
    let mut deck = manager(9);
    for _ in 0..CARDS_PER_SUIT {
        deck.draw_card().unwrap();
    }
    deck.drain_events().for_each(drop);

    for _ in 0..5 {
        assert!(deck.draw_card().is_err());
        assert_eq!(
            deck.drain_events().collect::<Vec<_>>(),
            vec![Event::DeckEmpty { suit: Suit::Hearts }]
        );
    }
    assert_eq!(deck.drain_events().count(), 0);
}

#[test]
fn empty_suit_does_not_block_other_suits() {
    let mut deck = manager(8);
    for _ in 0..CARDS_PER_SUIT {
        deck.draw_card().unwrap();
    }
    assert!(deck.draw_card().is_err());

    deck.set_active_suit(Suit::Spades);
    assert!(deck.can_draw());
    assert_eq!(deck.draw_card().unwrap().suit, Suit::Spades);
}

#[test]
fn deck_empty_message() {
    assert_eq!(
        DrawError::DeckEmpty(Suit::Diamonds).to_string(),
        "no more cards in Diamonds!"
    );
}

#[test]
fn select_suit_accepts_names() {
    let mut deck = manager(1);
    assert_eq!(deck.select_suit("Spades"), Ok(Suit::Spades));
    assert_eq!(deck.active_suit(), Suit::Spades);
    assert_eq!(deck.select_suit("Clubs"), Ok(Suit::Clubs));
    assert_eq!(deck.active_suit(), Suit::Clubs);
}

#[test]
fn select_suit_requires_exact_names() {
    let mut deck = manager(1);
    deck.drain_events().for_each(drop);

    for name in ["clubs", "  sPaDeS ", "HEARTS", "Diamonds ", ""] {
        assert_eq!(
            deck.select_suit(name),
            Err(SuitError::Invalid(name.to_string()))
        );
        assert_eq!(deck.active_suit(), Suit::Hearts);
    }
    assert_eq!(deck.drain_events().count(), 0);
}

#[test]
fn invalid_suit_is_a_no_op() {
    let mut deck = manager(1);
    deck.set_active_suit(Suit::Diamonds);
    deck.draw_card().unwrap();
    deck.drain_events().for_each(drop);
    let before = deck.stats();

    assert_eq!(
        deck.select_suit("Joker"),
        Err(SuitError::Invalid("Joker".to_string()))
    );
    assert_eq!(deck.active_suit(), Suit::Diamonds);
    assert_eq!(deck.stats(), before);
    assert_eq!(deck.drain_events().count(), 0);
}

#[test]
fn reselecting_active_suit_only_refreshes() {
    let mut deck = manager(1);
    deck.drain_events().for_each(drop);
    let before = deck.stats();

    deck.set_active_suit(Suit::Hearts);
    assert_eq!(deck.stats(), before);
    assert_eq!(
        deck.drain_events().collect::<Vec<_>>(),
        vec![
            Event::ActiveSuitChanged { suit: Suit::Hearts },
            Event::Refresh {
                suit: Suit::Hearts,
                remaining: CARDS_PER_SUIT,
                can_draw: true,
            },
        ]
    );
}

#[test]
fn history_spans_suits_in_draw_order() {
    let mut deck = manager(21);
    let mut drawn = Vec::new();

    for suit in [Suit::Spades, Suit::Hearts, Suit::Spades, Suit::Clubs] {
        deck.set_active_suit(suit);
        drawn.push(deck.draw_card().unwrap());
    }

    assert_eq!(deck.history(), drawn.as_slice());
    let suits: Vec<Suit> = deck.history().iter().map(|card| card.suit).collect();
    assert_eq!(
        suits,
        vec![Suit::Spades, Suit::Hearts, Suit::Spades, Suit::Clubs]
    );
}

#[test]
fn stats_track_active_suit_and_totals() {
    let mut deck = manager(6);
    deck.set_active_suit(Suit::Diamonds);
    deck.draw_card().unwrap();
    deck.draw_card().unwrap();
    deck.set_active_suit(Suit::Clubs);
    deck.draw_card().unwrap();

    let stats = deck.stats();
    assert_eq!(stats.total_drawn, 3);
    assert_eq!(stats.active_suit, Suit::Clubs);
    assert_eq!(stats.remaining_in_active, CARDS_PER_SUIT - 1);
    assert_eq!(stats.remaining_total, DECK_SIZE - 3);
    assert_eq!(stats.suit(Suit::Diamonds).drawn, 2);
    assert_eq!(
        stats.suits.map(|s| s.suit),
        [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs]
    );
}

#[test]
fn missing_content_uses_placeholder() {
    let options = DeckOptions::default()
        .with_content(ContentTable::quiet_year().without_entry(Suit::Spades, Rank::Seven));
    let deck = DeckManager::new(options, 1);

    let seven = deck
        .deck(Suit::Spades)
        .iter()
        .find(|card| card.rank == Rank::Seven)
        .unwrap();
    assert_eq!(seven.content, CardContent::PLACEHOLDER);
    assert_eq!(seven.content.primary, "No primary content");
    assert_eq!(seven.content.secondary, "No secondary content");
}

#[test]
fn strict_content_rejects_missing_entries() {
    let options = DeckOptions::default()
        .with_content(ContentTable::quiet_year().without_entry(Suit::Diamonds, Rank::Queen))
        .with_strict_content(true);

    assert_eq!(
        DeckManager::try_new(options.clone(), 1).unwrap_err(),
        ConfigError::MissingContent {
            suit: Suit::Diamonds,
            rank: Rank::Queen,
        }
    );
    assert!(DeckManager::try_new(options.with_strict_content(false), 1).is_ok());
    assert!(DeckManager::try_new(DeckOptions::default().with_strict_content(true), 1).is_ok());
}

#[test]
fn card_labels() {
    let table = ContentTable::quiet_year();
    let ten = quietdeck::Card::new(
        Suit::Diamonds,
        Rank::Ten,
        table.get(Suit::Diamonds, Rank::Ten).unwrap(),
    );
    assert_eq!(ten.to_string(), "10♦");
    assert!(ten.is_red());
    assert_eq!(Rank::Queen.to_string(), "Q");
    assert_eq!(Suit::Clubs.to_string(), "Clubs");
    assert_eq!("Spades".parse::<Suit>(), Ok(Suit::Spades));
    assert_eq!(
        " spades ".parse::<Suit>(),
        Err(SuitError::Invalid(" spades ".to_string()))
    );
}

#[test]
fn rank_labels_parse_back() {
    for rank in Rank::ALL {
        assert_eq!(rank.label().parse::<Rank>(), Ok(rank));
    }
    assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
    assert_eq!("J".parse::<Rank>(), Ok(Rank::Jack));

    for label in ["1", "Joker", "j", " A", "11"] {
        assert_eq!(
            label.parse::<Rank>(),
            Err(RankError::Invalid(label.to_string()))
        );
    }
}
