pub mod components;
pub mod config;
pub mod error;
pub mod math;
pub mod params;
pub mod resources;
pub mod shapes;
pub mod sketch;
pub mod systems;
pub mod view;

pub use components::*;
pub use config::*;
pub use error::*;
pub use math::*;
pub use params::*;
pub use resources::*;
pub use shapes::*;
pub use sketch::*;
pub use systems::*;
pub use view::*;

use hecs::World;

/// Advance the birds by `time.dt`, wrapping them around `bounds` if given
pub fn step(world: &mut World, time: &mut Time, bounds: Option<&Rect>) {
    // Clamp dt to prevent large jumps, and ignore clocks running backwards
    let clamped_dt = if time.dt.is_finite() {
        time.dt.clamp(0.0, Params::MAX_DT)
    } else {
        0.0
    };

    // Fixed micro-steps so fast birds cannot skip across the wrap seam
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        move_birds(world, &step_time);

        if let Some(bounds) = bounds {
            wrap_birds(world, bounds);
        }
    }

    time.now = (time.now + clamped_dt).rem_euclid(Params::CLOCK_PERIOD);
}

/// Helper to create a bird entity
pub fn create_bird(world: &mut World, pos: glam::Vec2, heading: f32, speed: f32) -> hecs::Entity {
    world.spawn((Bird::new(pos, heading, speed),))
}

/// Spawn `config.bird_count` birds at random inside `bounds`
pub fn spawn_flock(world: &mut World, rng: &mut SketchRng, bounds: &Rect, config: &Config) {
    for _ in 0..config.bird_count {
        let bird = Bird::random(rng, bounds, config.bird_speed, Params::BIRD_SPEED_JITTER);
        world.spawn((bird,));
    }
}
