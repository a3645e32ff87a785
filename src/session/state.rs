//! Session state tracking
//!
//! Maintains:
//! - Current alphabet position
//! - Feedback message shown under the letter
//! - Completion flag and the pending-advance window after a correct answer

use crate::alphabet::{self, LAST_INDEX};

/// Progression phase derived from the session state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing(usize),
    Completed,
}

/// Outcome of moving past the current letter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// A new letter is active at this index
    Next(usize),
    /// The last letter was answered
    Finished,
}

/// Complete session state
///
/// `completed` implies `current_index == LAST_INDEX`; the index only grows
/// until [`SessionState::reset`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    current_index: usize,
    message: String,
    completed: bool,
    /// Correct answer given, waiting for the feedback delay
    pending_advance: bool,
}

impl SessionState {
    /// Fresh session at the first letter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.completed {
            Phase::Completed
        } else {
            Phase::Playing(self.current_index)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_pending_advance(&self) -> bool {
        self.pending_advance
    }

    /// Letter the player must press now
    pub fn expected_letter(&self) -> char {
        alphabet::letter_at(self.current_index).unwrap_or('Z')
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    /// Open the window between a correct answer and the advance
    pub fn begin_advance(&mut self) {
        self.pending_advance = true;
    }

    /// Close the pending window and move past the current letter
    pub fn advance(&mut self) -> Advance {
        self.pending_advance = false;
        self.clear_message();

        if self.current_index < LAST_INDEX {
            self.current_index += 1;
            Advance::Next(self.current_index)
        } else {
            self.completed = true;
            Advance::Finished
        }
    }

    /// Back to the first letter with no message
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
