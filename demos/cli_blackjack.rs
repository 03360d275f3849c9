//! CLI blackjack example.
//!
//! Set `RUST_LOG=bjengine=debug` to see the engine's trace output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjengine::{Game, GameOptions, InvalidMove};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    loop {
        let mut game = Game::new(GameOptions::default(), seed);
        seed = seed.wrapping_add(1);

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            return;
        }
        println!("\n{game}");

        while !game.is_finished() {
            let result = match prompt_line("Hit or stand? (h/s): ").as_str() {
                "h" | "hit" => game.hit().map(|card| println!("You draw {card}.")),
                "s" | "stand" => game.stand().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Invalid choice. Try again.");
                    continue;
                }
            };

            match result {
                Ok(()) => println!("\n{game}"),
                Err(err) => report(err),
            }
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn report(err: InvalidMove) {
    match err {
        InvalidMove::OutOfCards => println!("The deck is empty."),
        other => println!("Illegal move: {other}."),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}
