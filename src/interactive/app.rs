//! TUI application state and logic

use crate::analysis::suggest_move;
use crate::core::{GameState, Word};
use crate::engine::{create_game, delete_letter, exchange_letter, move_letter};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::prelude::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// A typed player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Delete(usize),
    Move(usize, usize),
    Exchange(usize, char),
    Hint,
    New,
    Undo,
    Quit,
}

/// Parse a command line as typed into the input box
///
/// Accepted forms: `d <i>`, `m <from> <to>`, `e <i> <char>`, `hint`,
/// `new`, `undo`, `quit` (full words or first letters).
///
/// # Errors
/// Returns a message describing what was wrong with the input.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let parse_index = |token: &str| -> Result<usize, String> {
        token
            .parse()
            .map_err(|_| format!("'{token}' is not a position"))
    };

    match tokens.as_slice() {
        ["d" | "delete", index] => Ok(Command::Delete(parse_index(index)?)),
        ["m" | "move", from, to] => Ok(Command::Move(parse_index(from)?, parse_index(to)?)),
        ["e" | "exchange", index, letter] => {
            let mut chars = letter.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(Command::Exchange(parse_index(index)?, ch)),
                _ => Err(format!("'{letter}' is not a single letter")),
            }
        }
        ["h" | "hint"] => Ok(Command::Hint),
        ["n" | "new"] => Ok(Command::New),
        ["u" | "undo"] => Ok(Command::Undo),
        ["q" | "quit"] => Ok(Command::Quit),
        [] => Err("type a command: d <i> | m <from> <to> | e <i> <char> | hint | new | undo | quit".to_string()),
        _ => Err(format!("unrecognized command '{input}'")),
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_completed: usize,
    pub total_cost: u64,
}

/// Application state
pub struct App {
    pub state: GameState,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub hint: Option<String>,
    pub undo_stack: Vec<GameState>,
    pub stats: Statistics,
    pub should_quit: bool,
    words: Vec<Word>,
}

impl App {
    /// Create the app with a word pool for drawing new puzzles
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let state = draw_puzzle(&words)
            .unwrap_or_else(|| create_game("hello", "world"));

        let mut app = Self {
            state,
            input_buffer: String::new(),
            messages: Vec::new(),
            hint: None,
            undo_stack: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            words,
        };
        app.add_message(
            "Turn the current word into the target. Type 'hint' if stuck.",
            MessageStyle::Info,
        );
        app
    }

    /// Start a fresh puzzle from the pool
    pub fn new_puzzle(&mut self) {
        if let Some(state) = draw_puzzle(&self.words) {
            self.state = state;
            self.undo_stack.clear();
            self.hint = None;
            self.add_message("New puzzle drawn.", MessageStyle::Info);
        } else {
            self.add_message("Word pool is too small for a new puzzle.", MessageStyle::Error);
        }
    }

    /// Submit and clear the input buffer
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match parse_command(&input) {
            Ok(command) => self.execute(command),
            Err(message) => self.add_message(&message, MessageStyle::Error),
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Delete(index) => self.apply(delete_letter(&self.state, index)),
            Command::Move(from, to) => self.apply(move_letter(&self.state, from, to)),
            Command::Exchange(index, ch) => self.apply(exchange_letter(&self.state, index, ch)),
            Command::Hint => self.request_hint(),
            Command::New => self.new_puzzle(),
            Command::Undo => self.undo(),
            Command::Quit => self.should_quit = true,
        }
    }

    fn apply(&mut self, outcome: Result<GameState, crate::engine::EngineError>) {
        match outcome {
            Ok(next) => {
                self.undo_stack.push(self.state.clone());
                self.hint = None;
                let completed = next.is_complete();
                if completed {
                    self.stats.puzzles_completed += 1;
                    self.stats.total_cost += u64::from(next.total_cost());
                    self.add_message(
                        &format!("Solved at cost {}! Type 'new' for another.", next.total_cost()),
                        MessageStyle::Success,
                    );
                }
                self.state = next;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn request_hint(&mut self) {
        self.hint = suggest_move(&self.state);
        if self.hint.is_none() {
            self.add_message("Already solved, no hint needed.", MessageStyle::Info);
        }
    }

    /// Restore the previous state, if any
    pub fn undo(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            self.state = previous;
            self.hint = None;
            self.add_message("Undone.", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo.", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the last few messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Draw a random start/target pair from the pool
fn draw_puzzle(words: &[Word]) -> Option<GameState> {
    // Two distinct entries are needed for the retry loop to terminate
    if !words.iter().any(|w| w != &words[0]) {
        return None;
    }

    let mut rng = rand::rng();
    loop {
        let start = words.choose(&mut rng)?;
        let target = words.choose(&mut rng)?;
        if start != target {
            return Some(create_game(start.clone(), target.clone()));
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
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
            // Only process key press events (avoids double input on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit();
                }
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
    use crate::wordlists::loader::words_from_slice;

    fn test_app(start: &str, target: &str) -> App {
        let mut app = App::new(words_from_slice(&["cat", "cot"]));
        app.state = create_game(start, target);
        app.undo_stack.clear();
        app
    }

    #[test]
    fn parses_move_commands() {
        assert_eq!(parse_command("d 3"), Ok(Command::Delete(3)));
        assert_eq!(parse_command("delete 0"), Ok(Command::Delete(0)));
        assert_eq!(parse_command("m 4 0"), Ok(Command::Move(4, 0)));
        assert_eq!(parse_command("e 0 w"), Ok(Command::Exchange(0, 'w')));
    }

    #[test]
    fn parses_control_commands() {
        assert_eq!(parse_command("hint"), Ok(Command::Hint));
        assert_eq!(parse_command("n"), Ok(Command::New));
        assert_eq!(parse_command("undo"), Ok(Command::Undo));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(parse_command("").is_err());
        assert!(parse_command("d").is_err());
        assert!(parse_command("d x").is_err());
        assert!(parse_command("e 0 ab").is_err());
        assert!(parse_command("fly me").is_err());
    }

    #[test]
    fn submit_applies_a_valid_move() {
        let mut app = test_app("hello", "world");
        app.input_buffer = "e 0 w".to_string();
        app.submit();

        assert_eq!(app.state.current_word().text(), "wello");
        assert_eq!(app.undo_stack.len(), 1);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn submit_reports_engine_errors() {
        let mut app = test_app("hello", "world");
        app.input_buffer = "d 9".to_string();
        app.submit();

        assert_eq!(app.state.current_word().text(), "hello");
        assert!(
            app.messages
                .last()
                .is_some_and(|m| m.text.contains("out of bounds"))
        );
    }

    #[test]
    fn undo_restores_the_previous_state() {
        let mut app = test_app("hello", "world");
        app.input_buffer = "e 0 w".to_string();
        app.submit();
        app.undo();

        assert_eq!(app.state.current_word().text(), "hello");
        assert!(app.undo_stack.is_empty());
    }

    #[test]
    fn completing_a_puzzle_updates_statistics() {
        let mut app = test_app("hell", "bell");
        app.input_buffer = "e 0 b".to_string();
        app.submit();

        assert!(app.state.is_complete());
        assert_eq!(app.stats.puzzles_completed, 1);
        assert_eq!(app.stats.total_cost, 1);
    }

    #[test]
    fn hint_follows_the_suggestion_heuristic() {
        let mut app = test_app("hello", "ehllo");
        app.input_buffer = "hint".to_string();
        app.submit();

        assert_eq!(
            app.hint.as_deref(),
            Some("Move 'e' from position 1 to position 0")
        );
    }
}
