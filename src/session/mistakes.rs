//! Mistake log: which letters the player keeps missing
//!
//! Tracks:
//! - Wrong key per expected letter (3+ of the same pair flags a problem letter)
//! - Total wrong presses, including non-character keys

use std::collections::HashMap;

/// Minimum repeats of the same wrong key to flag a letter
const PROBLEM_THRESHOLD: u32 = 3;

#[derive(Clone, Debug, Default)]
pub struct MistakeLog {
    /// expected letter → (pressed char → count)
    pairs: HashMap<char, HashMap<char, u32>>,
    /// Wrong presses per expected letter
    per_letter: HashMap<char, u32>,
    total: u32,
}

impl MistakeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wrong press; `got` is `None` for non-character keys
    pub fn record(&mut self, expected: char, got: Option<char>) {
        self.total += 1;
        *self.per_letter.entry(expected).or_insert(0) += 1;

        if let Some(got) = got {
            *self
                .pairs
                .entry(expected)
                .or_default()
                .entry(got.to_ascii_uppercase())
                .or_insert(0) += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn misses_for(&self, expected: char) -> u32 {
        self.per_letter.get(&expected).copied().unwrap_or(0)
    }

    /// Most frequent (expected, pressed) pairs, most common first
    pub fn top_pairs(&self, count: usize) -> Vec<((char, char), u32)> {
        let mut pairs: Vec<_> = self
            .pairs
            .iter()
            .flat_map(|(&expected, got_map)| {
                got_map
                    .iter()
                    .map(move |(&got, &n)| ((expected, got), n))
            })
            .collect();

        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        pairs.truncate(count);
        pairs
    }

    /// Letters confused with the same key at least three times, sorted
    pub fn problem_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .pairs
            .iter()
            .filter(|(_, got_map)| got_map.values().any(|&n| n >= PROBLEM_THRESHOLD))
            .map(|(&expected, _)| expected)
            .collect();
        letters.sort_unstable();
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_totals() {
        let mut log = MistakeLog::new();
        log.record('A', Some('s'));
        log.record('A', None);
        log.record('B', Some('V'));
        assert_eq!(log.total(), 3);
        assert_eq!(log.misses_for('A'), 2);
        assert_eq!(log.misses_for('C'), 0);
    }

    #[test]
    fn test_problem_letters_need_repeats() {
        let mut log = MistakeLog::new();
        for _ in 0..3 {
            log.record('D', Some('b'));
        }
        log.record('E', Some('R'));
        log.record('E', Some('W'));
        log.record('E', Some('Q'));
        assert_eq!(log.problem_letters(), vec!['D']);
        assert_eq!(log.top_pairs(1), vec![(('D', 'B'), 3)]);
    }
}
