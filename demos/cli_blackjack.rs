//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::{Card, Game, GameOptions, HandView, Outcome, RoundState, RoundStatus, RoundView, Suit};

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        let mut view = match game.new_round() {
            Ok(view) => view,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };

        while view.state == RoundState::PlayerTurn {
            print_table(&view);

            let result = match prompt_line("[h]it [s]tand [q]uit: ").as_str() {
                "h" | "hit" => game.hit(),
                "s" | "stand" | "hold" => game.hold(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(next) => view = next,
                Err(err) => {
                    println!("Action error: {err}");
                    break;
                }
            }
        }

        print_table(&view);
        println!("{}", describe(view.status));

        if matches!(prompt_line("Play again? (y/n): ").as_str(), "n" | "no" | "q" | "quit") {
            println!("Goodbye.");
            return;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn describe(status: RoundStatus) -> &'static str {
    match status {
        RoundStatus::InProgress => "Round abandoned.",
        RoundStatus::PlayerBlackjack => "Blackjack! You win.",
        RoundStatus::PlayerBust => "Bust. The dealer won.",
        RoundStatus::DealerBust => "Dealer busts. You win.",
        RoundStatus::Resolved(Outcome::Player) => "You win.",
        RoundStatus::Resolved(Outcome::Dealer) => "The dealer won.",
        RoundStatus::Resolved(Outcome::Draw) => "Draw.",
    }
}

fn print_table(view: &RoundView) {
    println!(
        "\nDealer: {} (value {})",
        format_hand(&view.dealer),
        view.dealer.visible_total
    );
    println!(
        "You:    {} (value {})\n",
        format_hand(&view.player),
        view.player.total
    );
}

fn format_hand(hand: &HandView) -> String {
    if hand.cards.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards
        .iter()
        .map(|view| {
            if view.concealed {
                "??".to_string()
            } else {
                format_card(&view.card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank.name() {
        "jack" => "J",
        "queen" => "Q",
        "king" => "K",
        "ace" => "A",
        number => number,
    };

    format!("{}{}", colorize(rank, color_code), colorize(suit, color_code))
}
