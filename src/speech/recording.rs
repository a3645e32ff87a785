//! Test double that records utterances instead of playing them

use super::{SpeechDriver, SpeechError, Utterance};

#[derive(Debug, Default)]
pub struct RecordingSpeech {
    pub available: bool,
    /// Report available but fail every `announce`
    pub failing: bool,
    /// Every utterance started, in order
    pub spoken: Vec<Utterance>,
    /// The utterance currently "audible"
    pub playing: Option<Utterance>,
    /// Utterances interrupted by a newer one or by `cancel`
    pub interrupted: usize,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        RecordingSpeech {
            available: true,
            ..Default::default()
        }
    }

    pub fn unavailable() -> Self {
        RecordingSpeech::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.spoken.iter().map(|u| u.text.as_str()).collect()
    }
}

impl SpeechDriver for RecordingSpeech {
    fn is_available(&self) -> bool {
        self.available
    }

    fn announce(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        if !self.available || self.failing {
            return Err(SpeechError::Unavailable);
        }
        self.cancel();
        self.spoken.push(utterance.clone());
        self.playing = Some(utterance.clone());
        Ok(())
    }

    fn cancel(&mut self) {
        if self.playing.take().is_some() {
            self.interrupted += 1;
        }
    }
}
