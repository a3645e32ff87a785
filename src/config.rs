//! Trainer configuration
//!
//! Phrases, voice settings and delays. Loaded from an optional JSON file;
//! every field falls back to the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Placeholder replaced by the expected letter in the hint template
pub const LETTER_PLACEHOLDER: &str = "{letter}";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Spoken and displayed feedback text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrases {
    pub encouragement: String,
    /// Corrective hint, `{letter}` is replaced with the expected letter
    pub hint: String,
    pub congratulation: String,
    pub play_again: String,
    /// Shown when no speech synthesizer is available
    pub fallback: String,
}

impl Default for Phrases {
    fn default() -> Self {
        Phrases {
            encouragement: "太棒了！".to_string(),
            hint: "不对哦，请按 {letter}！".to_string(),
            congratulation: "恭喜你！你完成了所有字母！".to_string(),
            play_again: "再玩一次".to_string(),
            fallback: "当前系统不支持语音发音。".to_string(),
        }
    }
}

/// Language tags and prosody for each kind of announcement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    /// Language of letters and words
    pub letter_lang: String,
    /// Language of encouragement, hints and congratulation
    pub feedback_lang: String,
    pub letter_rate: f32,
    pub word_rate: f32,
    pub encouragement_pitch: f32,
    pub congratulation_rate: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        VoiceSettings {
            letter_lang: "en-US".to_string(),
            feedback_lang: "zh-CN".to_string(),
            letter_rate: 0.8,
            word_rate: 0.9,
            encouragement_pitch: 1.2,
            congratulation_rate: 0.9,
        }
    }
}

/// Complete trainer configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub phrases: Phrases,
    pub voice: VoiceSettings,
    /// Pause after a correct answer before the next letter
    pub feedback_delay_ms: u64,
    /// Pause between a letter and its word
    pub word_delay_ms: u64,
    /// Show and speak the paired word and picture
    pub show_words: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            phrases: Phrases::default(),
            voice: VoiceSettings::default(),
            feedback_delay_ms: 700,
            word_delay_ms: 800,
            show_words: true,
        }
    }
}

impl Config {
    /// Load config from a JSON file, defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from JSON text
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub fn word_delay(&self) -> Duration {
        Duration::from_millis(self.word_delay_ms)
    }

    /// Corrective hint naming the expected letter
    pub fn hint_for(&self, letter: char) -> String {
        self.phrases
            .hint
            .replace(LETTER_PLACEHOLDER, &letter.to_string())
    }
}
