use crate::{ConfigError, Params};
use glam::Vec2;

/// Sketch configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub world_width: f32,
    pub world_height: f32,
    pub bird_count: usize,
    pub bird_size: f32,
    pub bird_speed: f32,
    pub bird_skew: f32,
    pub cull: bool,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: Params::WORLD_WIDTH,
            world_height: Params::WORLD_HEIGHT,
            bird_count: Params::FLOCK_SIZE,
            bird_size: Params::BIRD_SIZE,
            bird_speed: Params::BIRD_SPEED,
            bird_skew: Params::BIRD_SKEW,
            cull: true,
            seed: Params::DEFAULT_SEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    /// How far outside the camera a bird's center may be while part of its
    /// stroked glyph is still on screen
    pub fn cull_margin(&self) -> f32 {
        let widest = Params::GHOST_WIDTH.max(Params::OUTLINE_WIDTH);
        self.bird_size * 3.0 + self.bird_skew.abs() + widest / 2.0 * Params::MITER_LIMIT
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("bird_size", self.bird_size),
            ("bird_speed", self.bird_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.bird_count > Params::MAX_BIRDS {
            return Err(ConfigError::TooManyBirds {
                count: self.bird_count,
                max: Params::MAX_BIRDS,
            });
        }

        Ok(())
    }
}
