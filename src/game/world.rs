use macroquad::prelude::*;
use macroquad::rand::gen_range;
use tracing::debug;

use crate::config::KeyBindings;
use crate::game::drifter::Drifter;
use crate::game::ship::Ship;
use crate::game::shot::Shot;
use crate::input::InputTracker;

const SPAWN_INTERVAL: f32 = 1.4;
const DRIFTER_RADIUS: f32 = 12.0;

/// The running simulation: ship, shots, falling targets, score.
///
/// `update` and `draw` are each consumed once per frame by the driver, after
/// the input flush; all key polling inside is frame-stable.
pub struct World {
    width: f32,
    height: f32,
    ship: Ship,
    shots: Vec<Shot>,
    drifters: Vec<Drifter>,
    spawn_clock: f32,
    score: u32,
    missed: u32,
}

impl World {
    pub fn new(width: f32, height: f32, bindings: &KeyBindings) -> Self {
        Self {
            width,
            height,
            ship: Ship::new(width / 2.0, height - 40.0, bindings),
            shots: Vec::new(),
            drifters: Vec::new(),
            spawn_clock: 0.0,
            score: 0,
            missed: 0,
        }
    }

    pub fn update(&mut self, dt: f32, input: &InputTracker, now: f64) {
        self.ship.update(dt, input, now, self.width);
        if let Some(shot) = self.ship.take_queued_shot() {
            debug!("shot fired at x={:.0}", shot.x);
            self.shots.push(shot);
        }

        for shot in &mut self.shots {
            shot.update(dt);
        }
        self.shots.retain(|shot| !shot.offscreen());

        self.spawn_clock += dt;
        while self.spawn_clock >= SPAWN_INTERVAL {
            self.spawn_clock -= SPAWN_INTERVAL;
            self.spawn_drifter();
        }
        for drifter in &mut self.drifters {
            drifter.update(dt);
        }

        let drifters = &mut self.drifters;
        let score = &mut self.score;
        self.shots.retain(|shot| {
            if let Some(i) = drifters.iter().position(|d| d.hit_by(shot)) {
                drifters.swap_remove(i);
                *score += 1;
                false
            } else {
                true
            }
        });

        let before = self.drifters.len();
        self.drifters.retain(|d| !d.escaped(self.height));
        self.missed += (before - self.drifters.len()) as u32;
    }

    fn spawn_drifter(&mut self) {
        let x = gen_range(DRIFTER_RADIUS, self.width - DRIFTER_RADIUS);
        self.drifters.push(Drifter::new(x, -DRIFTER_RADIUS, DRIFTER_RADIUS));
    }

    pub fn draw(&self, paused: bool) {
        self.ship.draw();
        for shot in &self.shots {
            shot.draw();
        }
        for drifter in &self.drifters {
            drifter.draw();
        }

        draw_text(&format!("SCORE {}", self.score), 16.0, 28.0, 28.0, WHITE);
        draw_text(&format!("MISSED {}", self.missed), 16.0, 52.0, 22.0, GRAY);
        draw_text(
            &format!("HOLD {:.2}s", self.ship.last_hold_secs()),
            16.0,
            74.0,
            22.0,
            DARKGRAY,
        );

        if paused {
            draw_text(
                "PAUSED",
                self.width / 2.0 - 72.0,
                self.height / 2.0,
                48.0,
                YELLOW,
            );
        }
    }
}
