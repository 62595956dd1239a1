use glam::Vec2;

/// Bird component - a triangle drifting along its heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub pos: Vec2,
    pub heading: f32, // radians, 0 = +x, PI/2 = +y (down on screen)
    pub speed: f32,   // units per second
}

impl Bird {
    pub fn new(pos: Vec2, heading: f32, speed: f32) -> Self {
        Self {
            pos,
            heading,
            speed,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::from_angle(self.heading) * self.speed
    }

    /// Spawn somewhere inside `bounds` with a random heading and a speed
    /// within `jitter` (fraction) of `speed`
    pub fn random(rng: &mut crate::SketchRng, bounds: &crate::Rect, speed: f32, jitter: f32) -> Self {
        use rand::Rng;
        let pos = Vec2::new(
            rng.0.gen_range(bounds.min.x..bounds.max.x),
            rng.0.gen_range(bounds.min.y..bounds.max.y),
        );
        let heading = rng.0.gen_range(0.0..std::f32::consts::TAU);
        let scale = if jitter > 0.0 {
            rng.0.gen_range(1.0 - jitter..=1.0 + jitter)
        } else {
            1.0
        };

        Self::new(pos, heading, speed * scale)
    }
}
