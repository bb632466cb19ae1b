//! CLI stack game example.
//!
//! You play seat 1 against the computer in seat 0. Set `RUST_LOG=stackrs=debug`
//! to watch the engine.

use core::cmp::Ordering;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use stackrs::{COMPUTER, Card, Game, GameOptions, HUMAN, Hand, Move, Suit};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy)]
enum Turn {
    Played(Card),
    Passed,
}

fn main() {
    initialize_logging();
    println!("Stack game CLI example (type 'q' to quit)");
    println!("Play a card with '<card> <stack>', e.g. '3 1'. Type 'p' to pass.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    game.new_game();
    game.refresh_card_stack();

    loop {
        print_table(&game);

        let Some(human) = human_turn(&mut game) else {
            println!("Goodbye.");
            return;
        };
        if let Turn::Played(card) = human {
            println!("You play {card}.");
            game.deal_a_card_to(HUMAN);
        }

        let computer = computer_turn(&mut game);
        match computer {
            Turn::Played(card) => {
                println!("Computer plays {card}.");
                game.deal_a_card_to(COMPUTER);
            }
            Turn::Passed => println!("Computer passes."),
        }

        if matches!((human, computer), (Turn::Passed, Turn::Passed)) {
            if game.refresh_card_stack() {
                println!("Both passed. New stacks dealt.");
            } else {
                print_final(&game);
                return;
            }
        }
    }
}

fn initialize_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

fn human_turn(game: &mut Game) -> Option<Turn> {
    loop {
        let input = prompt_line("Move: ");
        match input.as_str() {
            "q" | "quit" => return None,
            "p" | "pass" => {
                if let Err(err) = game.update_pass_counter(HUMAN) {
                    println!("Pass error: {err}");
                }
                return Some(Turn::Passed);
            }
            _ => {}
        }

        let Some(mv) = parse_move(&input) else {
            println!("Enter a card number and a stack number.");
            continue;
        };
        match game.make_move(HUMAN, mv) {
            Ok(card) => return Some(Turn::Played(card)),
            Err(err) => println!("Move error: {err}"),
        }
    }
}

fn computer_turn(game: &mut Game) -> Turn {
    if let Some(card) = game
        .look_for_a_move(COMPUTER)
        .and_then(|mv| game.make_move(COMPUTER, mv).ok())
    {
        return Turn::Played(card);
    }
    if let Err(err) = game.update_pass_counter(COMPUTER) {
        println!("Pass error: {err}");
    }
    Turn::Passed
}

/// Parses one-based `<card> <stack>` input.
fn parse_move(input: &str) -> Option<Move> {
    let mut parts = input.split_whitespace();
    let card = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
    let stack = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(card, stack))
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

fn print_table(game: &Game) {
    println!(
        "\nDeck: {} | Computer holds {} | Passes: computer {}, you {}",
        game.cards_left_in_deck(),
        game.player_cards_left(COMPUTER),
        game.total_score_of_player(COMPUTER).unwrap_or(0),
        game.total_score_of_player(HUMAN).unwrap_or(0),
    );

    let stacks = game
        .cards_on_stacks()
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}:{}", i + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join("  ");
    println!("Stacks: {stacks}");

    let hand = game.get_hand(HUMAN).unwrap_or_default();
    println!("Hand:   {}\n", format_hand(&hand));
}

fn print_final(game: &Game) {
    let computer = game.total_score_of_player(COMPUTER).unwrap_or(0);
    let human = game.total_score_of_player(HUMAN).unwrap_or(0);
    println!("\nNo more stacks can be dealt. Passes: computer {computer}, you {human}.");
    match human.cmp(&computer) {
        Ordering::Less => println!("You win."),
        Ordering::Greater => println!("Computer wins."),
        Ordering::Equal => println!("Tie."),
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}:{}", i + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    if !card.is_valid() {
        return colorize("--", "90");
    }

    let (suit, color_code) = match card.suit() {
        Some(Suit::Hearts) => ("H", "31"),
        Some(Suit::Diamonds) => ("D", "31"),
        Some(Suit::Clubs) => ("C", "32"),
        Some(Suit::Spades) => ("S", "34"),
        None => ("", "35"),
    };

    let code = if card.is_joker() { "35" } else { color_code };
    colorize(&format!("{}{suit}", card.rank().symbol()), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
