use tracing::debug;

use crate::input::KeyTrigger;

/// Driver-owned pause toggle: flips once per press of its binding.
pub struct PauseSwitch {
    key: String,
    held: bool,
    paused: bool,
}

impl PauseSwitch {
    pub fn new(key: String) -> Self {
        Self {
            key,
            held: false,
            paused: false,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }
}

impl KeyTrigger for PauseSwitch {
    fn watched_key(&self) -> &str {
        &self.key
    }

    fn key_held(&self) -> bool {
        self.held
    }

    fn set_key_held(&mut self, held: bool) {
        self.held = held;
    }

    fn on_key_down(&mut self, _time: f64) {
        self.paused = !self.paused;
        debug!("pause toggled: {}", self.paused);
    }

    fn on_key_up(&mut self, _time: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputTracker;
    use crate::test_utils::script::KeyScript;

    #[test]
    fn test_toggles_once_per_press() {
        let mut tracker = InputTracker::new();
        let mut pause = PauseSwitch::new("P".to_string());

        KeyScript::new().down("p").run(&mut tracker);
        for frame in 0..4 {
            pause.poll(&tracker, frame as f64);
        }
        assert!(pause.paused());

        KeyScript::new().up("p").run(&mut tracker);
        pause.poll(&tracker, 4.0);
        assert!(pause.paused());

        KeyScript::new().down("p").run(&mut tracker);
        pause.poll(&tracker, 5.0);
        assert!(!pause.paused());
    }
}
