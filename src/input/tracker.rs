use std::collections::HashSet;

use tracing::trace;

use crate::input::event_queue::{EventQueue, KeyEvent};

/// Frame-stable view of which keys are held down.
///
/// Raw transitions are buffered as they arrive ([`record`](Self::record))
/// and only applied when [`process_events`](Self::process_events) runs, so
/// every poll between flushes sees the same state. Any string is accepted as
/// a key identifier; unknown names simply never match a query.
pub struct InputTracker {
    pressed: HashSet<String>,
    queue: EventQueue,
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            queue: EventQueue::new(),
        }
    }

    /// Ingest one raw transition.
    ///
    /// May be called at any point in the frame and has no effect on queries
    /// until the next flush. Repeated `down` notifications from OS
    /// auto-repeat are appended as-is; replay makes them redundant inserts.
    pub fn record(&mut self, key: &str, down: bool, time: f64) {
        self.queue.push(KeyEvent {
            key: key.to_uppercase(),
            down,
            time,
        });
    }

    /// Apply every buffered transition in arrival order, then empty the
    /// queue.
    ///
    /// The sole mutation point of the pressed set. Call exactly once per
    /// frame, before any game logic polls [`is_pressed`](Self::is_pressed).
    /// A no-op when the queue is empty.
    pub fn process_events(&mut self) {
        let applied = self.queue.len();
        for event in self.queue.drain() {
            if event.down {
                self.pressed.insert(event.key);
            } else {
                self.pressed.remove(&event.key);
            }
        }
        if applied > 0 {
            trace!("applied {} buffered key transitions", applied);
        }
    }

    /// True iff every listed key is currently held.
    ///
    /// An empty list is trivially true. Identifiers are matched
    /// case-insensitively.
    pub fn is_pressed(&self, keys: &[&str]) -> bool {
        keys.iter().all(|key| self.pressed.contains(&key.to_uppercase()))
    }

    /// Number of buffered, not-yet-applied transitions.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_query_is_true() {
        let tracker = InputTracker::new();
        assert!(tracker.is_pressed(&[]));
    }

    #[test]
    fn test_press_visible_after_flush() {
        let mut tracker = InputTracker::new();
        tracker.record("A", true, 0.0);
        tracker.process_events();
        assert!(tracker.is_pressed(&["A"]));
    }

    #[test]
    fn test_events_invisible_before_flush() {
        let mut tracker = InputTracker::new();
        tracker.record("X", true, 0.0);
        assert!(!tracker.is_pressed(&["X"]));
        assert_eq!(tracker.pending_events(), 1);
    }

    #[test]
    fn test_last_event_wins_within_one_flush() {
        let mut tracker = InputTracker::new();
        tracker.record("A", true, 0.0);
        tracker.process_events();

        tracker.record("A", false, 0.1);
        tracker.record("A", true, 0.2);
        tracker.process_events();
        assert!(tracker.is_pressed(&["A"]));

        tracker.record("A", true, 0.3);
        tracker.record("A", false, 0.4);
        tracker.process_events();
        assert!(!tracker.is_pressed(&["A"]));
    }

    #[test]
    fn test_multi_key_query_is_an_and() {
        let mut tracker = InputTracker::new();
        tracker.record("A", true, 0.0);
        tracker.record("B", true, 0.0);
        tracker.process_events();

        assert!(tracker.is_pressed(&["A", "B"]));

        tracker.record("B", false, 0.1);
        tracker.process_events();
        assert!(tracker.is_pressed(&["A"]));
        assert!(!tracker.is_pressed(&["A", "B"]));
    }

    #[test]
    fn test_identifiers_are_case_normalized() {
        let mut tracker = InputTracker::new();
        tracker.record("a", true, 0.0);
        tracker.process_events();
        assert!(tracker.is_pressed(&["A"]));
        assert!(tracker.is_pressed(&["a"]));
    }

    #[test]
    fn test_flush_is_idempotent_without_new_events() {
        let mut tracker = InputTracker::new();
        tracker.record("A", true, 0.0);
        tracker.process_events();
        tracker.process_events();
        assert!(tracker.is_pressed(&["A"]));
        assert_eq!(tracker.pending_events(), 0);
    }

    #[test]
    fn test_auto_repeat_down_is_harmless() {
        let mut tracker = InputTracker::new();
        tracker.record("A", true, 0.0);
        tracker.record("A", true, 0.1);
        tracker.record("A", true, 0.2);
        tracker.process_events();
        assert!(tracker.is_pressed(&["A"]));

        tracker.record("A", false, 0.3);
        tracker.process_events();
        assert!(!tracker.is_pressed(&["A"]));
    }

    proptest! {
        /// After a flush, each key's pressed state equals the last buffered
        /// transition for that key.
        #[test]
        fn test_flush_matches_last_transition_per_key(
            events in prop::collection::vec((0usize..4, any::<bool>()), 0..64),
        ) {
            const KEYS: [&str; 4] = ["a", "b", "c", "d"];

            let mut tracker = InputTracker::new();
            let mut model: HashMap<&str, bool> = HashMap::new();
            for (i, (k, down)) in events.iter().enumerate() {
                tracker.record(KEYS[*k], *down, i as f64);
                model.insert(KEYS[*k], *down);
            }
            tracker.process_events();

            for key in KEYS {
                let expected = model.get(key).copied().unwrap_or(false);
                prop_assert_eq!(tracker.is_pressed(&[key]), expected);
            }
        }
    }
}
