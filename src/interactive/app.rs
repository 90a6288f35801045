//! TUI application state and logic

use crate::game::{Round, RoundConfig, RoundStatus};
use crate::wordlists::WordList;
use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub round: Round,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty.
    pub fn new(words: &'a WordList, config: RoundConfig, mut rng: StdRng) -> Result<Self> {
        let target = words
            .pick_word(&mut rng)
            .ok_or_else(|| anyhow!("word list is empty"))?;
        let round = Round::with_config(target, config);

        Ok(Self {
            words,
            round,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the word in {} tries. Type and press Enter.",
                    config.max_attempts
                ),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            rng,
        })
    }

    /// Add a typed letter to the pending guess
    pub fn push_letter(&mut self, c: char) {
        if self.round.status().is_over() || !c.is_ascii_alphabetic() {
            return;
        }
        if self.input_buffer.chars().count() < self.round.word_length() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the pending guess to the round
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.round.submit(&guess, self.words) {
            Ok(_) => {
                self.input_buffer.clear();
                match self.round.status() {
                    RoundStatus::Won => {
                        let attempts = self.round.attempts();
                        self.add_message(
                            &format!(
                                "🎉 You won in {attempts} {}!",
                                if attempts == 1 { "guess" } else { "guesses" }
                            ),
                            MessageStyle::Success,
                        );
                        self.add_message(
                            "Press 'n' for new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    RoundStatus::Lost => {
                        let text = format!(
                            "You lost! The word was {}",
                            self.round.target().to_uppercase()
                        );
                        self.add_message(&text, MessageStyle::Error);
                        self.add_message(
                            "Press 'n' for new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    RoundStatus::Playing => {}
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        if let Some(target) = self.words.pick_word(&mut self.rng) {
            self.round.reset(target);
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            let over = app.round.status().is_over();

            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl || over => app.new_game(),
                KeyCode::Char('q') if over => app.should_quit = true,
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(c) if !ctrl => app.push_letter(c),
                KeyCode::Backspace => app.pop_letter(),
                KeyCode::Enter if !over => app.submit_guess(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app(words: &WordList) -> App<'_> {
        App::new(words, RoundConfig::default(), StdRng::seed_from_u64(3)).unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_letter(c);
        }
    }

    #[test]
    fn new_fails_on_empty_list() {
        let words = WordList::new(Vec::new());
        assert!(App::new(&words, RoundConfig::default(), StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn typing_is_capped_at_word_length() {
        let words = WordList::from_slice(&["crane"]);
        let mut app = app(&words);
        type_word(&mut app, "CRANES1");
        assert_eq!(app.input_buffer, "crane");

        app.pop_letter();
        assert_eq!(app.input_buffer, "cran");
    }

    #[test]
    fn submitting_target_wins() {
        let words = WordList::from_slice(&["crane"]);
        let mut app = app(&words);
        type_word(&mut app, "crane");
        app.submit_guess();

        assert_eq!(app.round.status(), RoundStatus::Won);
        assert!(app.input_buffer.is_empty());
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn rejected_guess_keeps_input_and_reports_error() {
        let words = WordList::from_slice(&["crane", "slate"]);
        let mut app = app(&words);
        type_word(&mut app, "cra");
        app.submit_guess();

        assert_eq!(app.input_buffer, "cra");
        assert_eq!(app.round.attempts(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn typing_ignored_after_round_over() {
        let words = WordList::from_slice(&["crane"]);
        let mut app = app(&words);
        type_word(&mut app, "crane");
        app.submit_guess();
        type_word(&mut app, "abc");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn new_game_resets_round() {
        let words = WordList::from_slice(&["crane"]);
        let mut app = app(&words);
        type_word(&mut app, "crane");
        app.submit_guess();

        app.new_game();
        assert_eq!(app.round.status(), RoundStatus::Playing);
        assert!(app.round.history().is_empty());
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn messages_are_bounded() {
        let words = WordList::from_slice(&["crane"]);
        let mut app = app(&words);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
