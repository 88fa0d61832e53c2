use macroquad::prelude::*;

use crate::game::shot::Shot;

const DRIFT_SPEED: f32 = 90.0;

/// Falling target. Reaching the bottom edge counts as a miss.
#[derive(Debug, Clone, Copy)]
pub struct Drifter {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Drifter {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn update(&mut self, dt: f32) {
        self.y += DRIFT_SPEED * dt;
    }

    pub fn escaped(&self, screen_height: f32) -> bool {
        self.y - self.radius > screen_height
    }

    /// Circle-vs-point test against a shot's tip.
    pub fn hit_by(&self, shot: &Shot) -> bool {
        let dx = self.x - shot.x;
        let dy = self.y - shot.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    pub fn draw(&self) {
        draw_circle(self.x, self.y, self.radius, SKYBLUE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drifter_falls() {
        let mut drifter = Drifter::new(50.0, 0.0, 12.0);
        drifter.update(1.0);
        assert_eq!(drifter.y, DRIFT_SPEED);
    }

    #[test]
    fn test_escaped_past_bottom() {
        let drifter = Drifter::new(50.0, 733.0, 12.0);
        assert!(drifter.escaped(720.0));

        let inside = Drifter::new(50.0, 720.0, 12.0);
        assert!(!inside.escaped(720.0));
    }

    #[test]
    fn test_hit_detection() {
        let drifter = Drifter::new(100.0, 100.0, 12.0);
        assert!(drifter.hit_by(&Shot { x: 105.0, y: 95.0 }));
        assert!(!drifter.hit_by(&Shot { x: 130.0, y: 100.0 }));
    }
}
