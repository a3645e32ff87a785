//! One-shot timers for the event loop
//!
//! Timers cannot be cancelled; the trainer drops the ones that went stale.

use crate::session::{Event, Timer};
use std::time::Instant;

#[derive(Debug)]
struct Pending {
    deadline: Instant,
    /// Insertion order, breaks deadline ties
    seq: u64,
    event: Event,
}

/// Pending timers ordered by deadline
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<Pending>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer relative to `now`
    pub fn schedule(&mut self, timer: Timer, now: Instant) {
        self.pending.push(Pending {
            deadline: now + timer.delay,
            seq: self.next_seq,
            event: timer.event,
        });
        self.next_seq += 1;
    }

    pub fn schedule_all(&mut self, timers: impl IntoIterator<Item = Timer>, now: Instant) {
        for timer in timers {
            self.schedule(timer, now);
        }
    }

    /// Remove and return every event whose deadline has passed
    pub fn pop_due(&mut self, now: Instant) -> Vec<Event> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.deadline <= now);
        self.pending = rest;

        due.sort_by_key(|p| (p.deadline, p.seq));
        due.into_iter().map(|p| p.event).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn timer(ms: u64, event: Event) -> Timer {
        Timer {
            delay: Duration::from_millis(ms),
            event,
        }
    }

    #[test]
    fn test_pop_due_in_deadline_order() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(timer(800, Event::SpeakWord { index: 0 }), now);
        queue.schedule(timer(700, Event::AdvanceDue { from: 0 }), now);
        queue.schedule(timer(5000, Event::PlayAgain), now);

        assert!(queue.pop_due(now).is_empty());
        assert!(queue.pop_due(now + Duration::from_millis(699)).is_empty());

        let due = queue.pop_due(now + Duration::from_millis(900));
        assert_eq!(
            due,
            vec![Event::AdvanceDue { from: 0 }, Event::SpeakWord { index: 0 }]
        );
        assert_eq!(
            queue.pop_due(now + Duration::from_secs(5)),
            vec![Event::PlayAgain]
        );
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule_all(
            vec![
                timer(10, Event::SpeakWord { index: 3 }),
                timer(10, Event::SpeakWord { index: 4 }),
            ],
            now,
        );
        let due = queue.pop_due(now + Duration::from_millis(10));
        assert_eq!(
            due,
            vec![Event::SpeakWord { index: 3 }, Event::SpeakWord { index: 4 }]
        );
        assert!(queue.pop_due(now + Duration::from_secs(60)).is_empty());
    }
}
