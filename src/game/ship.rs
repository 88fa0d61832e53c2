use macroquad::prelude::*;

use crate::config::KeyBindings;
use crate::game::shot::Shot;
use crate::input::{InputTracker, KeyTrigger};

const SHIP_SPEED: f32 = 320.0;
const SHIP_HALF_W: f32 = 14.0;
const SHIP_H: f32 = 18.0;

/// Player ship.
///
/// Movement polls the held bindings level-triggered every frame; firing goes
/// through [`KeyTrigger`], so holding the key spawns exactly one shot per
/// press regardless of OS auto-repeat.
pub struct Ship {
    pub x: f32,
    pub y: f32,
    left_key: String,
    right_key: String,
    fire_key: String,
    fire_held: bool,
    fire_queued: bool,
    last_press: f64,
    last_release: f64,
}

impl Ship {
    pub fn new(x: f32, y: f32, bindings: &KeyBindings) -> Self {
        Self {
            x,
            y,
            left_key: bindings.left.clone(),
            right_key: bindings.right.clone(),
            fire_key: bindings.fire.clone(),
            fire_held: false,
            fire_queued: false,
            last_press: 0.0,
            last_release: 0.0,
        }
    }

    /// Per-frame step: movement, then the fire edge detector. Expects the
    /// tracker to be flushed for this frame already.
    pub fn update(&mut self, dt: f32, input: &InputTracker, now: f64, screen_width: f32) {
        let mut dx = 0.0;
        if input.is_pressed(&[self.left_key.as_str()]) {
            dx -= 1.0;
        }
        if input.is_pressed(&[self.right_key.as_str()]) {
            dx += 1.0;
        }
        self.x = (self.x + dx * SHIP_SPEED * dt).clamp(SHIP_HALF_W, screen_width - SHIP_HALF_W);

        self.poll(input, now);
    }

    /// Take the shot queued by the last press edge, if any.
    pub fn take_queued_shot(&mut self) -> Option<Shot> {
        if std::mem::take(&mut self.fire_queued) {
            Some(Shot {
                x: self.x,
                y: self.y - SHIP_H,
            })
        } else {
            None
        }
    }

    /// Duration of the last completed fire press, in seconds.
    pub fn last_hold_secs(&self) -> f64 {
        (self.last_release - self.last_press).max(0.0)
    }

    pub fn draw(&self) {
        draw_triangle(
            vec2(self.x, self.y - SHIP_H),
            vec2(self.x - SHIP_HALF_W, self.y),
            vec2(self.x + SHIP_HALF_W, self.y),
            LIME,
        );
    }
}

impl KeyTrigger for Ship {
    fn watched_key(&self) -> &str {
        &self.fire_key
    }

    fn key_held(&self) -> bool {
        self.fire_held
    }

    fn set_key_held(&mut self, held: bool) {
        self.fire_held = held;
    }

    fn on_key_down(&mut self, time: f64) {
        self.fire_queued = true;
        self.last_press = time;
    }

    fn on_key_up(&mut self, time: f64) {
        self.last_release = time;
    }
}
