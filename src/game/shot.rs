use macroquad::prelude::*;

const SHOT_SPEED: f32 = 540.0;
const SHOT_HALF_W: f32 = 2.0;
const SHOT_LEN: f32 = 10.0;

/// Player projectile, rising until it leaves the screen.
#[derive(Debug, Clone, Copy)]
pub struct Shot {
    pub x: f32,
    pub y: f32,
}

impl Shot {
    pub fn update(&mut self, dt: f32) {
        self.y -= SHOT_SPEED * dt;
    }

    pub fn offscreen(&self) -> bool {
        self.y + SHOT_LEN < 0.0
    }

    pub fn draw(&self) {
        draw_rectangle(self.x - SHOT_HALF_W, self.y, SHOT_HALF_W * 2.0, SHOT_LEN, GOLD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_rises() {
        let mut shot = Shot { x: 100.0, y: 200.0 };
        shot.update(0.1);
        assert!(shot.y < 200.0);
        assert_eq!(shot.x, 100.0);
    }

    #[test]
    fn test_shot_offscreen_above_top() {
        let shot = Shot { x: 0.0, y: -20.0 };
        assert!(shot.offscreen());

        let visible = Shot { x: 0.0, y: 5.0 };
        assert!(!visible.offscreen());
    }
}
