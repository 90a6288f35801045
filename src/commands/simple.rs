//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{Round, RoundConfig};
use crate::output::{print_board, print_keyboard, print_round_over};
use crate::wordlists::WordList;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Targets are drawn from `words` with `rng`; guesses are checked against the
/// same list.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the word
/// list is empty.
pub fn run_simple<R: Rng + ?Sized>(
    words: &WordList,
    config: RoundConfig,
    rng: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the hidden word in {} tries. After each guess:",
        config.max_attempts
    );
    println!("  - {} letter is in the right spot", " G ".black().on_green());
    println!("  - {} letter is in the word, wrong spot", " Y ".black().on_yellow());
    println!("  - {} letter is not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let mut round = Round::with_config(pick_target(words, rng)?, config);

    loop {
        print_board(&round);
        print_keyboard(&round.keyboard());

        let Some(input) = get_user_input(&format!(
            "Guess {}/{}",
            round.attempts() + 1,
            config.max_attempts
        ))?
        else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                round.reset(pick_target(words, rng)?);
                println!("\n🔄 New game started!\n");
                continue;
            }
            guess => {
                if let Err(err) = round.submit(guess, words) {
                    println!("{}", format!("❌ {err}").red());
                    continue;
                }
            }
        }

        if round.status().is_over() {
            print_board(&round);
            print_round_over(&round);

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    round.reset(pick_target(words, rng)?);
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn pick_target<'w, R: Rng + ?Sized>(words: &'w WordList, rng: &mut R) -> Result<&'w str, String> {
    words
        .pick_word(rng)
        .ok_or_else(|| "Word list is empty".to_string())
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
