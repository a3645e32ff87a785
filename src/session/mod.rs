//! Session Management: progression state, the trainer and mistake tracking
//!
//! # Components
//! - `state.rs`: SessionState and the Playing/Completed phases
//! - `trainer.rs`: LetterTrainer, the single state-transition function
//! - `mistakes.rs`: wrong-key log for the end-of-session summary

pub mod mistakes;
pub mod state;
pub mod trainer;

pub use state::{Phase, SessionState};
pub use trainer::{Event, KeyPress, LetterTrainer, Timer};
