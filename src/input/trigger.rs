use crate::input::tracker::InputTracker;

/// Capability contract for "fire once per press" consumers.
///
/// An implementor owns its watched key and a held flag;
/// [`poll`](Self::poll) drives a two-state level-to-edge detector from the
/// tracker's frame-stable view, so each hook fires exactly once per
/// transition no matter how many frames the key stays in one state. Call it
/// once per frame per consumer, after the tracker flush. A key that toggles
/// down-up-down inside one frame's buffer is only seen at its final resting
/// state.
pub trait KeyTrigger {
    /// Key identifier this consumer watches.
    fn watched_key(&self) -> &str;

    /// Held flag stored from the previous poll.
    fn key_held(&self) -> bool;

    fn set_key_held(&mut self, held: bool);

    /// Invoked once when the watched key transitions to pressed.
    fn on_key_down(&mut self, time: f64);

    /// Invoked once when the watched key transitions to released.
    fn on_key_up(&mut self, time: f64);

    /// Compare the current pressed state against the stored flag and fire at
    /// most one hook.
    fn poll(&mut self, input: &InputTracker, time: f64) {
        let down = input.is_pressed(&[self.watched_key()]);
        if down && !self.key_held() {
            self.set_key_held(true);
            self.on_key_down(time);
        } else if !down && self.key_held() {
            self.set_key_held(false);
            self.on_key_up(time);
        }
    }
}
