//! What the screen shows, derived from session state alone

use crate::alphabet::{self, ALPHABET};
use crate::config::Config;
use crate::session::{Phase, SessionState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Playing {
        letter: char,
        /// 1-based position and alphabet length
        position: (usize, usize),
        word: Option<&'static str>,
        image: Option<&'static str>,
        message: String,
    },
    Completed {
        headline: String,
        button: String,
    },
}

impl View {
    pub fn of(state: &SessionState, config: &Config) -> View {
        match state.phase() {
            Phase::Completed => View::Completed {
                headline: config.phrases.congratulation.clone(),
                button: config.phrases.play_again.clone(),
            },
            Phase::Playing(index) => {
                let record = alphabet::record(index).filter(|_| config.show_words);
                View::Playing {
                    letter: state.expected_letter(),
                    position: (index + 1, ALPHABET.len()),
                    word: record.map(|r| r.word),
                    image: record.map(|r| r.image),
                    message: state.message().to_string(),
                }
            }
        }
    }
}
