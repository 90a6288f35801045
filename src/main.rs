//! Wordle - CLI
//!
//! Play Wordle in a TUI or a plain text loop, or check a single guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::{
    commands::{check_guess, run_simple},
    core::MAX_ATTEMPTS,
    game::RoundConfig,
    output::print_check_result,
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for target word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guesses allowed per round
    #[arg(short = 'm', long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Show the feedback a guess would get against a target
    Check {
        /// The target word
        target: String,

        /// The guessed word
        guess: String,
    },
}

/// Load the word list based on the -w flag
///
/// - "all": the embedded list
/// - "<path>": one word per line, invalid lines skipped
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "all" => Ok(WordList::embedded()),
        path => {
            let words = WordList::from_file(path)?;
            if words.is_empty() {
                anyhow::bail!("no valid five-letter words in {path}");
            }
            Ok(words)
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = RoundConfig::with_max_attempts(cli.max_attempts);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Check { target, guess } => run_check_command(&target, &guess),
        Commands::Simple => {
            let words = load_wordlist(&cli.wordlist)?;
            let mut rng = make_rng(cli.seed);
            run_simple(&words, config, &mut rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Play => {
            let words = load_wordlist(&cli.wordlist)?;
            run_play_command(&words, config, make_rng(cli.seed))
        }
    }
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let result = check_guess(target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_play_command(words: &WordList, config: RoundConfig, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, config, rng)?;
    run_tui(app)
}
