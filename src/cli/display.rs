//! Terminal display and UI rendering
//!
//! Features:
//! - Large framed letter with its word and picture link
//! - Feedback line under the letter
//! - Completion screen with the "play again" control

use super::view::View;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Stdout, Write};

/// Left margin of every line
const MARGIN: u16 = 4;

/// Terminal display manager
pub struct Display {
    /// Whether we're using alternate screen
    use_alternate_screen: bool,
    /// Last view drawn, to skip redundant redraws
    last: Option<View>,
}

impl Display {
    /// Create display on the alternate screen
    pub fn fullscreen() -> Result<Self, Box<dyn std::error::Error>> {
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Display {
            use_alternate_screen: true,
            last: None,
        })
    }

    /// Whether `view` differs from what is on screen
    pub fn needs_redraw(&self, view: &View) -> bool {
        self.last.as_ref() != Some(view)
    }

    /// Forget the drawn view so the next render repaints everything
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw the view unless it is already on screen
    pub fn render(&mut self, view: &View) -> Result<(), Box<dyn std::error::Error>> {
        if !self.needs_redraw(view) {
            return Ok(());
        }

        let mut out = stdout();
        queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        match view {
            View::Playing {
                letter,
                position,
                word,
                image,
                message,
            } => Self::draw_playing(&mut out, *letter, *position, *word, *image, message)?,
            View::Completed { headline, button } => {
                Self::draw_completed(&mut out, headline, button)?
            }
        }
        out.flush()?;

        self.last = Some(view.clone());
        Ok(())
    }

    fn draw_playing(
        out: &mut Stdout,
        letter: char,
        (current, total): (usize, usize),
        word: Option<&str>,
        image: Option<&str>,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        queue!(
            out,
            cursor::MoveTo(MARGIN, 1),
            SetForegroundColor(Color::DarkGrey),
            Print(format!("{}/{}", current, total)),
            ResetColor,
            cursor::MoveTo(MARGIN, 3),
            SetForegroundColor(Color::Blue),
            Print("┌───────┐"),
            cursor::MoveTo(MARGIN, 4),
            Print("│       │"),
            cursor::MoveTo(MARGIN, 5),
            Print("│   "),
            SetAttribute(Attribute::Bold),
            Print(letter),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Blue),
            Print("   │"),
            cursor::MoveTo(MARGIN, 6),
            Print("│       │"),
            cursor::MoveTo(MARGIN, 7),
            Print("└───────┘"),
            ResetColor,
        )?;

        if let Some(word) = word {
            queue!(
                out,
                cursor::MoveTo(MARGIN, 9),
                SetAttribute(Attribute::Bold),
                Print(word),
                SetAttribute(Attribute::Reset),
            )?;
        }
        if let Some(image) = image {
            queue!(
                out,
                cursor::MoveTo(MARGIN, 10),
                SetForegroundColor(Color::DarkGrey),
                Print(image),
                ResetColor,
            )?;
        }

        queue!(
            out,
            cursor::MoveTo(MARGIN, 12),
            SetForegroundColor(Color::Yellow),
            Print(message),
            ResetColor,
        )?;
        Self::draw_help(out, "Press the letter shown  |  Esc to exit")
    }

    fn draw_completed(
        out: &mut Stdout,
        headline: &str,
        button: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        queue!(
            out,
            cursor::MoveTo(MARGIN, 3),
            Print("🥳"),
            cursor::MoveTo(MARGIN, 5),
            SetForegroundColor(Color::Green),
            SetAttribute(Attribute::Bold),
            Print(headline),
            SetAttribute(Attribute::Reset),
            ResetColor,
            cursor::MoveTo(MARGIN, 7),
            SetForegroundColor(Color::Cyan),
            Print(format!("[ {} ]", button)),
            ResetColor,
        )?;
        Self::draw_help(out, "Enter to play again  |  Esc to exit")
    }

    fn draw_help(out: &mut Stdout, help: &str) -> Result<(), Box<dyn std::error::Error>> {
        let (_, rows) = terminal::size().unwrap_or((80, 24));
        queue!(
            out,
            cursor::MoveTo(MARGIN, rows.saturating_sub(2).max(14)),
            SetForegroundColor(Color::DarkGrey),
            Print(help),
            ResetColor
        )?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        if self.use_alternate_screen {
            execute!(stdout, LeaveAlternateScreen, cursor::Show)?;
            self.use_alternate_screen = false;
        }

        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}
