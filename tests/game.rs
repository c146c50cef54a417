//! Round, session, and table integration tests.

use bjcore::{
    Action, AceRule, Card, Deck, DeckError, DealerState, Game, GameError, GameOptions, Outcome,
    Participant, Rank, Resolution, Round, RoundError, RoundEvent, RoundState, RoundStatus, Suit,
    Table,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Deals `draws` in order: two to the dealer, two to the player, then hits
/// and dealer draws.
fn round_from(draws: &[Card]) -> Round {
    let deck = Deck::stacked(draws.iter().copied()).unwrap();
    Round::deal(deck, GameOptions::default()).unwrap()
}

#[test]
fn initial_deal_order() {
    let draws = [
        card(Rank::Ten, Suit::Clubs),   // dealer hole
        card(Rank::Six, Suit::Diamonds), // dealer up
        card(Rank::Nine, Suit::Hearts),  // player
        card(Rank::Five, Suit::Spades),  // player
    ];
    let round = round_from(&draws);

    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.dealer_hand().cards(), &draws[..2]);
    assert_eq!(round.player_hand().cards(), &draws[2..]);
    assert_eq!(round.deck().dealt(), &draws);
    assert!(round.deck().is_empty());
    assert_eq!(round.status(), RoundStatus::InProgress);
    assert_eq!(round.result(), None);
}

#[test]
fn higher_total_wins() {
    let mut round = round_from(&[
        card(Rank::King, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Spades),
    ]);

    round.hold().unwrap();
    assert_eq!(round.state(), RoundState::Resolved);
    assert_eq!(round.status(), RoundStatus::Resolved(Outcome::Player));

    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::Player);
    assert_eq!(result.resolution, Resolution::Comparison);
    assert_eq!(result.player_total, 20);
    assert_eq!(result.dealer_total, 19);
}

#[test]
fn equal_totals_draw() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
    ]);

    round.hold().unwrap();
    assert_eq!(round.status(), RoundStatus::Resolved(Outcome::Draw));
    assert_eq!(round.status().outcome(), Some(Outcome::Draw));
}

#[test]
fn player_bust_ends_round_without_dealer_turn() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
        card(Rank::King, Suit::Spades), // player hit
        card(Rank::Five, Suit::Hearts), // never dealt
    ]);

    round.hit().unwrap();
    assert_eq!(round.player_hand().total(), 25);
    assert_eq!(round.state(), RoundState::Resolved);
    assert_eq!(round.status(), RoundStatus::PlayerBust);
    assert_eq!(round.result().unwrap().outcome, Outcome::Dealer);
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.deck().remaining(), 1);
    assert!(
        !round
            .events()
            .iter()
            .any(|event| matches!(event, RoundEvent::Held | RoundEvent::DealerFinished(_)))
    );
}

#[test]
fn hit_without_bust_keeps_player_turn() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Spades),
        card(Rank::Ace, Suit::Spades), // player hit
        card(Rank::Five, Suit::Hearts), // player hit
    ]);

    round.hit().unwrap();
    assert_eq!(round.player_hand().total(), 16);
    round.hit().unwrap();
    assert_eq!(round.player_hand().total(), 21);
    assert_eq!(round.state(), RoundState::PlayerTurn);

    round.hold().unwrap();
    assert_eq!(round.result().unwrap().outcome, Outcome::Player);
}

#[test]
fn natural_resolves_immediately() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::King, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
    ]);

    assert_eq!(round.state(), RoundState::Resolved);
    assert_eq!(round.status(), RoundStatus::PlayerBlackjack);
    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::Player);
    assert_eq!(result.resolution, Resolution::Natural);
    assert_eq!(round.deck().remaining(), 1);

    assert_eq!(
        round.hit().unwrap_err(),
        RoundError::IllegalStateTransition {
            action: Action::Hit,
            state: RoundState::Resolved,
        }
    );
    assert_eq!(
        round.hold().unwrap_err(),
        RoundError::IllegalStateTransition {
            action: Action::Hold,
            state: RoundState::Resolved,
        }
    );
}

#[test]
fn hit_after_hold_is_illegal() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Two, Suit::Spades),
    ]);

    round.hold().unwrap();
    assert_eq!(
        round.hit().unwrap_err(),
        RoundError::IllegalStateTransition {
            action: Action::Hit,
            state: RoundState::Resolved,
        }
    );
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.deck().remaining(), 1);
}

#[test]
fn dealer_on_17_draws_nothing() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Two, Suit::Spades),
    ]);

    round.hold().unwrap();
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.result().unwrap().outcome, Outcome::Player);
}

#[test]
fn dealer_on_16_draws_to_21() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Five, Suit::Hearts), // dealer draw
    ]);

    round.hold().unwrap();
    assert_eq!(round.dealer_hand().total(), 21);
    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::Dealer);
    assert_eq!(result.resolution, Resolution::Comparison);
}

#[test]
fn dealer_bust_gives_player_the_round() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Two, Suit::Spades),
        card(Rank::King, Suit::Hearts), // dealer draw
    ]);

    round.hold().unwrap();
    assert_eq!(round.status(), RoundStatus::DealerBust);
    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::Player);
    assert_eq!(result.player_total, 12);
    assert_eq!(result.dealer_total, 26);
}

#[test]
fn events_record_the_round() {
    let draws = [
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Two, Suit::Spades),
        card(Rank::Five, Suit::Spades), // player hit
        card(Rank::Two, Suit::Hearts),  // dealer draw
        card(Rank::Three, Suit::Hearts), // dealer draw
    ];
    let mut round = round_from(&draws);
    round.hit().unwrap();
    round.hold().unwrap();

    let result = round.result().unwrap();
    assert_eq!(result.player_total, 17);
    assert_eq!(result.dealer_total, 18);
    assert_eq!(result.outcome, Outcome::Dealer);

    let dealt = |to, card| RoundEvent::Dealt { to, card };
    assert_eq!(
        round.events(),
        &[
            dealt(Participant::Dealer, draws[0]),
            dealt(Participant::Dealer, draws[1]),
            dealt(Participant::Player, draws[2]),
            dealt(Participant::Player, draws[3]),
            dealt(Participant::Player, draws[4]),
            RoundEvent::Held,
            dealt(Participant::Dealer, draws[5]),
            dealt(Participant::Dealer, draws[6]),
            RoundEvent::DealerFinished(DealerState::Standing),
            RoundEvent::Resolved(result),
        ]
    );
}

#[test]
fn hole_card_concealed_until_dealer_turn() {
    let mut round = round_from(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
    ]);

    let view = round.view();
    assert_eq!(view.state, RoundState::PlayerTurn);
    assert!(view.dealer.cards[0].concealed);
    assert!(!view.dealer.cards[1].concealed);
    assert_eq!(view.dealer.visible_total, 6);
    assert_eq!(view.dealer.total, 17);
    assert!(view.player.cards.iter().all(|c| !c.concealed));
    assert_eq!(view.player.total, 19);
    assert_eq!(view.player.visible_total, 19);

    round.hold().unwrap();
    let view = round.view();
    assert!(view.dealer.cards.iter().all(|c| !c.concealed));
    assert_eq!(view.dealer.visible_total, 17);
    assert_eq!(view.status, RoundStatus::Resolved(Outcome::Player));
}

#[test]
fn short_deck_fails_loudly() {
    let deck = Deck::stacked([
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
    ])
    .unwrap();
    assert_eq!(
        Round::deal(deck, GameOptions::default()).unwrap_err(),
        RoundError::DeckExhausted(DeckError::Exhausted {
            requested: 2,
            remaining: 1,
        })
    );

    let mut round = round_from(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Two, Suit::Spades),
    ]);
    assert_eq!(
        round.hit().unwrap_err(),
        RoundError::DeckExhausted(DeckError::Exhausted {
            requested: 1,
            remaining: 0,
        })
    );
}

#[test]
fn standard_ace_rule_flows_into_round() {
    let deck = Deck::stacked([
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
    ])
    .unwrap();
    let options = GameOptions::default().with_ace_rule(AceRule::Standard);
    let round = Round::deal(deck, options).unwrap();
    assert_eq!(round.player_hand().total(), 12);
}

#[test]
fn game_requires_a_round() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.hit().unwrap_err(), GameError::NoActiveRound);
    assert_eq!(game.hold().unwrap_err(), GameError::NoActiveRound);
    assert!(game.view().is_none());
    assert!(game.state().is_none());
}

#[test]
fn game_runs_a_round_and_starts_another() {
    let game = Game::new(GameOptions::default(), 1);
    let deck = Deck::stacked([
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Queen, Suit::Spades),
    ])
    .unwrap();

    let view = game.new_round_with_deck(deck).unwrap();
    assert_eq!(view.state, RoundState::PlayerTurn);

    let view = game.hold().unwrap();
    assert_eq!(view.status, RoundStatus::Resolved(Outcome::Player));
    assert_eq!(
        game.hit().unwrap_err(),
        GameError::Round(RoundError::IllegalStateTransition {
            action: Action::Hit,
            state: RoundState::Resolved,
        })
    );

    let view = game.new_round().unwrap();
    assert_eq!(view.player.cards.len(), 2);
    assert_eq!(view.dealer.cards.len(), 2);
    assert_eq!(game.round().unwrap().deck().remaining(), 48);
}

#[test]
fn game_abandons_round_when_deck_runs_out() {
    let game = Game::new(GameOptions::default(), 1);
    let deck = Deck::stacked([
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Two, Suit::Spades),
    ])
    .unwrap();
    game.new_round_with_deck(deck).unwrap();

    assert!(matches!(
        game.hold().unwrap_err(),
        GameError::Round(RoundError::DeckExhausted(_))
    ));
    assert!(game.view().is_none());
    assert_eq!(game.hit().unwrap_err(), GameError::NoActiveRound);
}

#[test]
fn same_seed_deals_same_rounds() {
    let a = Game::new(GameOptions::default(), 42);
    let b = Game::new(GameOptions::default(), 42);

    for _ in 0..5 {
        assert_eq!(a.new_round().unwrap(), b.new_round().unwrap());
    }
}

#[test]
fn every_seeded_round_resolves() {
    let game = Game::new(GameOptions::default(), 9);

    for _ in 0..200 {
        let mut view = game.new_round().unwrap();
        while view.state == RoundState::PlayerTurn && view.player.total < 15 {
            view = game.hit().unwrap();
        }
        if view.state == RoundState::PlayerTurn {
            view = game.hold().unwrap();
        }

        assert_eq!(view.state, RoundState::Resolved);
        let result = game.result().unwrap();
        assert_eq!(view.status.outcome(), Some(result.outcome));
        if result.resolution == Resolution::Comparison {
            assert!(result.dealer_total >= 17 && result.dealer_total <= 21);
            assert!(result.player_total <= 21);
        }
    }
}

#[test]
fn table_routes_sessions() {
    let table = Table::new(GameOptions::default(), 5);
    let first = table.open();
    let second = table.open();
    assert_ne!(first, second);
    assert_eq!(table.session_count(), 2);

    assert_eq!(table.view(first).unwrap_err(), GameError::NoActiveRound);
    table.new_round(first).unwrap();
    assert!(table.view(first).is_ok());
    assert_eq!(table.view(second).unwrap_err(), GameError::NoActiveRound);

    assert!(table.close(first));
    assert!(!table.close(first));
    assert_eq!(table.hit(first).unwrap_err(), GameError::SessionNotFound);
    assert_eq!(table.hold(first).unwrap_err(), GameError::SessionNotFound);
    assert_eq!(table.new_round(first).unwrap_err(), GameError::SessionNotFound);
    assert_eq!(table.session_count(), 1);
}
