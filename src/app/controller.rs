use macroquad::prelude::*;

use crate::app::pause::PauseSwitch;
use crate::config::Settings;
use crate::game::World;
use crate::input::{InputTracker, KeyTrigger, KeyboardSource};

/// Application context owning the input pipeline and the running world.
///
/// Everything a frame touches is constructed here and passed down
/// explicitly; there is no global state.
pub struct App {
    input: InputTracker,
    keyboard: KeyboardSource,
    pause: PauseSwitch,
    world: World,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            input: InputTracker::new(),
            keyboard: KeyboardSource::new(),
            pause: PauseSwitch::new(settings.bindings.pause.clone()),
            world: World::new(
                settings.window.width as f32,
                settings.window.height as f32,
                &settings.bindings,
            ),
        }
    }

    /// Advance one frame.
    ///
    /// Ordering is a hard contract: clear, ingest and flush buffered key
    /// events, then everything downstream polls a key state that cannot
    /// change until the next frame.
    pub fn frame(&mut self) {
        clear_background(BLACK);

        let now = get_time();
        self.keyboard.pump(&mut self.input, now);
        self.input.process_events();

        let dt = get_frame_time();
        self.pause.poll(&self.input, now);
        if !self.pause.paused() {
            self.world.update(dt, &self.input, now);
        }
        self.world.draw(self.pause.paused());
    }
}
