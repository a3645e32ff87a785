//! LetterTrainer: the single state-transition function
//!
//! Two message sources feed it: key presses and fired timers. It never
//! sleeps; timers it wants are returned to the caller, which owns the clock.

use super::mistakes::MistakeLog;
use super::state::{Advance, Phase, SessionState};
use crate::alphabet;
use crate::config::Config;
use crate::speech::{SpeechDriver, Utterance};
use std::time::Duration;

/// Key as pressed, before case normalization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    /// Any non-character key (Enter, Tab, arrows, ...)
    Named(String),
}

impl KeyPress {
    /// Case-insensitive match against an uppercase letter
    pub fn matches(&self, expected: char) -> bool {
        match self {
            KeyPress::Char(c) => c.to_ascii_uppercase() == expected,
            KeyPress::Named(_) => false,
        }
    }

    fn as_char(&self) -> Option<char> {
        match self {
            KeyPress::Char(c) => Some(*c),
            KeyPress::Named(_) => None,
        }
    }
}

/// Input to the trainer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyPress),
    /// Feedback delay elapsed for the answer given at `from`
    AdvanceDue { from: usize },
    /// Time to speak the word paired with `index`
    SpeakWord { index: usize },
    /// The "play again" control was activated
    PlayAgain,
}

/// One-shot timer requested by the trainer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    pub delay: Duration,
    pub event: Event,
}

pub struct LetterTrainer<S> {
    state: SessionState,
    speech: S,
    config: Config,
    mistakes: MistakeLog,
    /// Missing-speech warning already logged
    warned_silent: bool,
    rounds_completed: u32,
}

impl<S: SpeechDriver> LetterTrainer<S> {
    pub fn new(speech: S, config: Config) -> Self {
        LetterTrainer {
            state: SessionState::new(),
            speech,
            config,
            mistakes: MistakeLog::new(),
            warned_silent: false,
            rounds_completed: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn mistakes(&self) -> &MistakeLog {
        &self.mistakes
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Announce the first letter
    pub fn start(&mut self) -> Vec<Timer> {
        self.activate_letter()
    }

    /// Apply one event, returning timers to schedule
    pub fn handle(&mut self, event: Event) -> Vec<Timer> {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::AdvanceDue { from } => self.on_advance_due(from),
            Event::SpeakWord { index } => {
                self.on_speak_word(index);
                Vec::new()
            }
            Event::PlayAgain => self.on_play_again(),
        }
    }

    fn on_key(&mut self, key: KeyPress) -> Vec<Timer> {
        if self.state.is_completed() {
            return Vec::new();
        }
        if self.state.is_pending_advance() {
            log::debug!("Ignoring {:?} while advance is pending", key);
            return Vec::new();
        }

        let expected = self.state.expected_letter();
        if key.matches(expected) {
            log::debug!("Correct: {}", expected);
            let phrase = self.config.phrases.encouragement.clone();
            self.state.set_message(phrase.clone());
            self.say(Utterance::new(
                phrase,
                self.config.voice.feedback_lang.clone(),
                1.0,
                self.config.voice.encouragement_pitch,
            ));
            self.state.begin_advance();
            vec![Timer {
                delay: self.config.feedback_delay(),
                event: Event::AdvanceDue {
                    from: self.state.current_index(),
                },
            }]
        } else {
            log::debug!("Wrong key {:?}, expected {}", key, expected);
            self.mistakes.record(expected, key.as_char());
            let hint = self.config.hint_for(expected);
            self.state.set_message(hint.clone());
            self.say(Utterance::new(
                hint,
                self.config.voice.feedback_lang.clone(),
                1.0,
                1.0,
            ));
            Vec::new()
        }
    }

    fn on_advance_due(&mut self, from: usize) -> Vec<Timer> {
        if !self.state.is_pending_advance() || self.state.phase() != Phase::Playing(from) {
            log::debug!("Dropping stale advance from {}", from);
            return Vec::new();
        }

        match self.state.advance() {
            Advance::Next(index) => {
                log::debug!("Advanced to {}", index);
                self.activate_letter()
            }
            Advance::Finished => {
                log::info!("All letters completed");
                self.rounds_completed += 1;
                self.say(Utterance::new(
                    self.config.phrases.congratulation.clone(),
                    self.config.voice.feedback_lang.clone(),
                    self.config.voice.congratulation_rate,
                    1.0,
                ));
                Vec::new()
            }
        }
    }

    fn on_speak_word(&mut self, index: usize) {
        if self.state.phase() != Phase::Playing(index) {
            return;
        }
        if let Some(record) = alphabet::record(index) {
            self.say(Utterance::new(
                record.word,
                self.config.voice.letter_lang.clone(),
                self.config.voice.word_rate,
                1.0,
            ));
        }
    }

    fn on_play_again(&mut self) -> Vec<Timer> {
        if !self.state.is_completed() {
            return Vec::new();
        }
        log::info!("Starting a new round");
        self.state.reset();
        self.activate_letter()
    }

    /// Speak the current letter and schedule its word
    fn activate_letter(&mut self) -> Vec<Timer> {
        let index = self.state.current_index();
        let letter = self.state.expected_letter();
        self.say(Utterance::new(
            letter.to_string(),
            self.config.voice.letter_lang.clone(),
            self.config.voice.letter_rate,
            1.0,
        ));

        if self.config.show_words {
            vec![Timer {
                delay: self.config.word_delay(),
                event: Event::SpeakWord { index },
            }]
        } else {
            Vec::new()
        }
    }

    /// Announce, degrading to the fallback message without audio
    fn say(&mut self, utterance: Utterance) {
        if !self.speech.is_available() {
            if !self.warned_silent {
                log::warn!("Speech synthesis is not available, feedback is text only");
                self.warned_silent = true;
            }
            self.show_fallback();
            return;
        }

        if let Err(e) = self.speech.announce(&utterance) {
            log::warn!("Could not speak {:?}: {}", utterance.text, e);
            self.show_fallback();
        }
    }

    fn show_fallback(&mut self) {
        let fallback = self.config.phrases.fallback.clone();
        self.state.set_message(fallback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{ALPHABET, LAST_INDEX};
    use crate::speech::recording::RecordingSpeech;

    fn trainer() -> LetterTrainer<RecordingSpeech> {
        let mut t = LetterTrainer::new(RecordingSpeech::new(), Config::default());
        t.start();
        t
    }

    fn press(t: &mut LetterTrainer<RecordingSpeech>, c: char) -> Vec<Timer> {
        t.handle(Event::Key(KeyPress::Char(c)))
    }

    /// Press the correct key and fire the advance timer
    fn answer(t: &mut LetterTrainer<RecordingSpeech>) {
        let letter = t.state().expected_letter();
        let timers = press(t, letter);
        assert_eq!(timers.len(), 1);
        for timer in timers {
            t.handle(timer.event);
        }
    }

    #[test]
    fn test_start_announces_letter_and_word_timer() {
        let mut t = LetterTrainer::new(RecordingSpeech::new(), Config::default());
        let timers = t.start();
        assert_eq!(t.speech().texts(), vec!["A"]);
        assert_eq!(t.speech().spoken[0].rate, 0.8);
        assert_eq!(
            timers,
            vec![Timer {
                delay: Duration::from_millis(800),
                event: Event::SpeakWord { index: 0 },
            }]
        );

        t.handle(Event::SpeakWord { index: 0 });
        assert_eq!(t.speech().texts(), vec!["A", "Apple"]);
    }

    #[test]
    fn test_correct_key_advances_after_delay() {
        let mut t = trainer();
        let timers = press(&mut t, 'A');
        assert_eq!(t.state().message(), "太棒了！");
        assert_eq!(t.state().phase(), Phase::Playing(0));
        assert_eq!(
            timers,
            vec![Timer {
                delay: Duration::from_millis(700),
                event: Event::AdvanceDue { from: 0 },
            }]
        );
        let last = t.speech().spoken.last().unwrap();
        assert_eq!(last.lang, "zh-CN");
        assert_eq!(last.pitch, 1.2);

        let timers = t.handle(Event::AdvanceDue { from: 0 });
        assert_eq!(t.state().phase(), Phase::Playing(1));
        assert_eq!(t.state().message(), "");
        assert_eq!(t.speech().texts().last(), Some(&"B"));
        assert_eq!(timers[0].event, Event::SpeakWord { index: 1 });
    }

    #[test]
    fn test_lowercase_key_is_correct() {
        let mut t = trainer();
        assert_eq!(press(&mut t, 'a').len(), 1);
        assert!(t.state().is_pending_advance());
    }

    #[test]
    fn test_wrong_key_gives_hint_for_every_position() {
        let mut t = trainer();
        for i in 0..=LAST_INDEX {
            let expected = ALPHABET[i];
            let wrong = ALPHABET[(i + 1) % ALPHABET.len()];
            let before = t.speech().spoken.len();

            assert!(press(&mut t, wrong).is_empty());
            assert_eq!(t.state().phase(), Phase::Playing(i));
            let hint = format!("不对哦，请按 {}！", expected);
            assert_eq!(t.state().message(), hint);
            assert_eq!(t.speech().spoken.len(), before + 1);
            assert_eq!(t.speech().spoken[before].text, hint);

            answer(&mut t);
        }
        assert_eq!(t.mistakes().total(), 26);
    }

    #[test]
    fn test_non_letter_keys_are_incorrect() {
        let mut t = trainer();
        press(&mut t, '1');
        assert_eq!(t.state().message(), "不对哦，请按 A！");
        t.handle(Event::Key(KeyPress::Named("Enter".to_string())));
        assert_eq!(t.state().phase(), Phase::Playing(0));
        assert_eq!(t.mistakes().misses_for('A'), 2);
    }

    #[test]
    fn test_full_run_completes_once() {
        let mut t = trainer();
        for _ in 0..=LAST_INDEX {
            answer(&mut t);
        }
        assert_eq!(t.state().phase(), Phase::Completed);
        assert_eq!(t.state().current_index(), LAST_INDEX);
        assert_eq!(t.rounds_completed(), 1);
        let congrats = t
            .speech()
            .texts()
            .iter()
            .filter(|s| **s == "恭喜你！你完成了所有字母！")
            .count();
        assert_eq!(congrats, 1);
    }

    #[test]
    fn test_completed_ignores_keys() {
        let mut t = trainer();
        for _ in 0..=LAST_INDEX {
            answer(&mut t);
        }
        let spoken = t.speech().spoken.len();
        let before = t.state().clone();

        for c in ['A', 'z', '1'] {
            assert!(press(&mut t, c).is_empty());
        }
        t.handle(Event::Key(KeyPress::Named("Enter".to_string())));
        assert_eq!(t.state(), &before);
        assert_eq!(t.speech().spoken.len(), spoken);
    }

    #[test]
    fn test_play_again_resets() {
        let mut t = trainer();
        for _ in 0..=LAST_INDEX {
            answer(&mut t);
        }
        let timers = t.handle(Event::PlayAgain);
        assert_eq!(t.state().phase(), Phase::Playing(0));
        assert_eq!(t.state().message(), "");
        assert_eq!(t.speech().texts().last(), Some(&"A"));
        assert_eq!(timers[0].event, Event::SpeakWord { index: 0 });
    }

    #[test]
    fn test_play_again_ignored_while_playing() {
        let mut t = trainer();
        answer(&mut t);
        assert!(t.handle(Event::PlayAgain).is_empty());
        assert_eq!(t.state().phase(), Phase::Playing(1));
    }

    #[test]
    fn test_keys_ignored_during_pending_advance() {
        let mut t = trainer();
        press(&mut t, 'A');
        let spoken = t.speech().spoken.len();

        assert!(press(&mut t, 'B').is_empty());
        assert!(press(&mut t, 'A').is_empty());
        assert_eq!(t.speech().spoken.len(), spoken);
        assert_eq!(t.state().message(), "太棒了！");

        t.handle(Event::AdvanceDue { from: 0 });
        assert_eq!(t.state().phase(), Phase::Playing(1));
    }

    #[test]
    fn test_stale_timers_are_dropped() {
        let mut t = trainer();
        assert!(t.handle(Event::AdvanceDue { from: 0 }).is_empty());
        assert_eq!(t.state().phase(), Phase::Playing(0));

        answer(&mut t);
        let spoken = t.speech().spoken.len();
        t.handle(Event::SpeakWord { index: 0 });
        assert_eq!(t.speech().spoken.len(), spoken);
    }

    #[test]
    fn test_each_announce_interrupts_previous() {
        let mut t = trainer();
        press(&mut t, 'Q');
        press(&mut t, 'W');
        let speech = t.speech();
        assert_eq!(speech.spoken.len(), 3);
        assert_eq!(speech.interrupted, 2);
        assert_eq!(speech.playing.as_ref().map(|u| u.text.as_str()), Some("不对哦，请按 A！"));
    }

    #[test]
    fn test_without_speech_progression_continues() {
        let mut t = LetterTrainer::new(RecordingSpeech::unavailable(), Config::default());
        t.start();
        assert_eq!(t.state().message(), "当前系统不支持语音发音。");

        let timers = press(&mut t, 'A');
        assert_eq!(t.state().message(), "当前系统不支持语音发音。");
        for timer in timers {
            t.handle(timer.event);
        }
        assert_eq!(t.state().phase(), Phase::Playing(1));
        assert!(t.speech().spoken.is_empty());
    }

    #[test]
    fn test_failing_speech_shows_fallback_and_advances() {
        let mut t = trainer();
        t.speech.failing = true;
        assert!(t.speech().is_available());

        let timers = press(&mut t, 'A');
        assert_eq!(t.state().message(), "当前系统不支持语音发音。");
        assert_eq!(timers.len(), 1);
        for timer in timers {
            t.handle(timer.event);
        }
        assert_eq!(t.state().phase(), Phase::Playing(1));

        press(&mut t, 'X');
        assert_eq!(t.state().phase(), Phase::Playing(1));
        assert_eq!(t.state().message(), "当前系统不支持语音发音。");
        assert_eq!(t.speech().texts(), vec!["A"]);
    }

    #[test]
    fn test_basic_variant_skips_word() {
        let config = Config {
            show_words: false,
            ..Config::default()
        };
        let mut t = LetterTrainer::new(RecordingSpeech::new(), config);
        assert!(t.start().is_empty());
        assert_eq!(t.speech().texts(), vec!["A"]);
    }
}
