//! External synthesizer process
//!
//! Speaks by spawning `espeak-ng`/`espeak` (Linux) or `say` (macOS). The child
//! of the previous utterance is killed before a new one is spawned, so the
//! newest request always wins.

use super::{SpeechDriver, SpeechError, Utterance};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Synthesizers probed on `PATH`, in order of preference
const CANDIDATES: [&str; 3] = ["espeak-ng", "espeak", "say"];

/// Words per minute at rate 1.0
const BASE_WPM: f32 = 175.0;

/// espeak pitch at multiplier 1.0 (range 0-99)
const BASE_PITCH: f32 = 50.0;

/// Command-line dialect of a synthesizer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Synth {
    Espeak,
    Say,
}

impl Synth {
    /// Guess the dialect from the binary name
    pub fn from_program(program: &Path) -> Self {
        match program.file_stem().and_then(|s| s.to_str()) {
            Some("say") => Synth::Say,
            _ => Synth::Espeak,
        }
    }
}

/// Map a BCP-47 language tag to an espeak-ng voice.
pub fn espeak_voice(lang: &str) -> String {
    let lang = lang.to_ascii_lowercase();
    match lang.as_str() {
        "zh" | "zh-cn" | "zh-hans" | "zh-sg" | "cmn" => "cmn".to_string(),
        "zh-hk" | "yue" => "yue".to_string(),
        "en" | "en-us" => "en-us".to_string(),
        "pt-br" => "pt-br".to_string(),
        _ => lang,
    }
}

fn words_per_minute(rate: f32) -> u32 {
    (BASE_WPM * rate).round().clamp(80.0, 450.0) as u32
}

fn espeak_pitch(pitch: f32) -> u32 {
    (BASE_PITCH * pitch).round().clamp(0.0, 99.0) as u32
}

/// Arguments for one utterance in the given dialect
pub fn synth_args(synth: Synth, utterance: &Utterance) -> Vec<String> {
    let wpm = words_per_minute(utterance.rate).to_string();
    match synth {
        Synth::Espeak => vec![
            "-v".to_string(),
            espeak_voice(&utterance.lang),
            "-s".to_string(),
            wpm,
            "-p".to_string(),
            espeak_pitch(utterance.pitch).to_string(),
            utterance.text.clone(),
        ],
        // `say` picks the voice from the system locale
        Synth::Say => vec!["-r".to_string(), wpm, utterance.text.clone()],
    }
}

/// Speech through a spawned synthesizer process
#[derive(Debug)]
pub struct CommandSpeech {
    program: Option<PathBuf>,
    synth: Synth,
    child: Option<Child>,
}

impl CommandSpeech {
    /// Find a synthesizer: the explicit one if given, otherwise the first
    /// candidate on `PATH`.
    pub fn detect(explicit: Option<&Path>) -> Self {
        let program = match explicit {
            Some(path) => match which::which(path) {
                Ok(found) => Some(found),
                Err(e) => {
                    log::warn!("Synthesizer {} not usable: {}", path.display(), e);
                    None
                }
            },
            None => CANDIDATES.iter().find_map(|name| which::which(name).ok()),
        };

        match &program {
            Some(p) => log::info!("Using speech synthesizer {}", p.display()),
            None => log::warn!("No speech synthesizer found"),
        }
        Self::with_program(program)
    }

    pub fn with_program(program: Option<PathBuf>) -> Self {
        let synth = program
            .as_deref()
            .map(Synth::from_program)
            .unwrap_or(Synth::Espeak);
        CommandSpeech {
            program,
            synth,
            child: None,
        }
    }
}

impl SpeechDriver for CommandSpeech {
    fn is_available(&self) -> bool {
        self.program.is_some()
    }

    fn announce(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.cancel();
        let program = self.program.as_ref().ok_or(SpeechError::Unavailable)?;

        let child = Command::new(program)
            .args(synth_args(self.synth, utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: program.clone(),
                source,
            })?;
        log::debug!("Speaking {:?} ({})", utterance.text, utterance.lang);
        self.child = Some(child);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            // Reap so no zombie is left behind
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}
