//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture
//! - Maps presses to trainer input or the "play again" control
//! - Esc / Ctrl+C graceful exit

use crate::session::KeyPress;
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What a key press means to the event loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    PlayAgain,
    Press(KeyPress),
    Ignore,
}

/// Terminal input the event loop cares about
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Key(KeyEvent),
    /// Terminal size changed, the screen must be redrawn
    Resize,
}

impl Input {
    pub fn from_event(event: event::Event) -> Option<Input> {
        match event {
            event::Event::Key(key_event) => Some(Input::Key(key_event)),
            event::Event::Resize(_, _) => Some(Input::Resize),
            _ => None,
        }
    }
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore terminal
    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for input with timeout (non-blocking)
    /// Returns None on timeout or on events the loop ignores
    pub fn read_input(&self) -> IoResult<Option<Input>> {
        if event::poll(self.poll_timeout)? {
            Ok(Input::from_event(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Check if key activates the "play again" control
    pub fn is_play_again(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
    }

    /// Convert key event to a trainer key press
    pub fn key_press(key: &KeyEvent) -> KeyPress {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                KeyPress::Char(c)
            }
            KeyCode::Char(c) => KeyPress::Named(format!("{:?}+{}", key.modifiers, c)),
            code => KeyPress::Named(format!("{:?}", code)),
        }
    }

    /// Decide what a raw key event means given the session phase
    pub fn classify(key: &KeyEvent, completed: bool) -> Command {
        if key.kind != KeyEventKind::Press {
            return Command::Ignore;
        }
        if Self::is_exit(key) {
            return Command::Exit;
        }
        if completed && Self::is_play_again(key) {
            return Command::PlayAgain;
        }
        Command::Press(Self::key_press(key))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
