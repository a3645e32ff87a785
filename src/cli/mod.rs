//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture using crossterm
//! - `view.rs`: Screen contents as a pure function of session state
//! - `display.rs`: Terminal rendering

pub mod display;
pub mod input;
pub mod view;
