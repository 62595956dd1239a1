use clap::Parser;
use sketch_core::{Config, Params, SketchKind};

/// Procedural vector sketches: a wavy void and drifting birds
#[derive(Debug, Clone, Parser)]
#[command(name = "murmur", version, about)]
pub struct Args {
    /// Which sketch to run: void, pair, flock or world
    #[arg(short, long, default_value_t = SketchKind::default())]
    pub sketch: SketchKind,

    /// Number of birds in the flock and world sketches
    #[arg(short, long, default_value_t = Params::FLOCK_SIZE)]
    pub birds: usize,

    /// Seed for bird placement
    #[arg(long, default_value_t = Params::DEFAULT_SEED)]
    pub seed: u64,

    /// World width for the world sketch
    #[arg(long, default_value_t = Params::WORLD_WIDTH)]
    pub world_width: f32,

    /// World height for the world sketch
    #[arg(long, default_value_t = Params::WORLD_HEIGHT)]
    pub world_height: f32,

    /// Bird speed in world units per second
    #[arg(long, default_value_t = Params::BIRD_SPEED)]
    pub speed: f32,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = Params::WINDOW_WIDTH)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = Params::WINDOW_HEIGHT)]
    pub height: u32,

    /// Draw birds even when they are outside the camera
    #[arg(long)]
    pub no_cull: bool,

    /// Present as fast as possible instead of syncing to the display
    #[arg(long)]
    pub no_vsync: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            world_width: self.world_width,
            world_height: self.world_height,
            bird_count: self.birds,
            bird_speed: self.speed,
            cull: !self.no_cull,
            seed: self.seed,
            ..Config::default()
        }
    }
}
