use std::collections::HashSet;

use macroquad::prelude::{KeyCode, get_keys_down};

use crate::input::key_name::key_name;
use crate::input::tracker::InputTracker;

/// Bridge from the platform's keyboard state to the tracker.
///
/// The platform exposes the currently-down key set once per frame; diffing
/// it against the previous frame's snapshot yields one transition per
/// change, recorded into the tracker's buffer. A press and release completed
/// entirely inside one frame is not observable at this boundary.
pub struct KeyboardSource {
    held: HashSet<KeyCode>,
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
        }
    }

    /// Record every key transition observed since the previous pump.
    pub fn pump(&mut self, tracker: &mut InputTracker, now: f64) {
        let down = get_keys_down();
        for key in down.difference(&self.held) {
            tracker.record(key_name(*key), true, now);
        }
        for key in self.held.difference(&down) {
            tracker.record(key_name(*key), false, now);
        }
        self.held = down;
    }
}

impl Default for KeyboardSource {
    fn default() -> Self {
        Self::new()
    }
}
