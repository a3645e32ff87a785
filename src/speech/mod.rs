//! Speech Driver: spoken feedback behind a swappable port
//!
//! # Components
//! - `command.rs`: external synthesizer process (espeak-ng, espeak, say)
//! - `SilentSpeech`: no capability, used for `--mute` and when nothing is found
//!
//! At most one utterance is audible at a time: every `announce` cancels the
//! previous one first.

pub mod command;
#[cfg(test)]
pub mod recording;

pub use command::CommandSpeech;

use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SpeechError {
    #[error("no speech synthesizer available")]
    Unavailable,
    #[error("failed to start synthesizer {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One spoken request
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// BCP-47 language tag, e.g. `en-US`
    pub lang: String,
    /// Rate multiplier, 1.0 is normal speed
    pub rate: f32,
    /// Pitch multiplier, 1.0 is normal pitch
    pub pitch: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>, lang: impl Into<String>, rate: f32, pitch: f32) -> Self {
        Utterance {
            text: text.into(),
            lang: lang.into(),
            rate,
            pitch,
        }
    }
}

/// Platform text-to-speech capability
pub trait SpeechDriver {
    /// Whether audio can be produced at all
    fn is_available(&self) -> bool;

    /// Start speaking, interrupting anything still playing
    fn announce(&mut self, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Stop the in-flight utterance, if any
    fn cancel(&mut self);
}

impl<S: SpeechDriver + ?Sized> SpeechDriver for Box<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn announce(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        (**self).announce(utterance)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}

/// Driver with no audio capability
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSpeech;

impl SpeechDriver for SilentSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn announce(&mut self, _utterance: &Utterance) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }

    fn cancel(&mut self) {}
}
