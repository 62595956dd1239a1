/// Tuning parameters for the sketches
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_WIDTH: u32 = 1000;
    pub const WINDOW_HEIGHT: u32 = 600;

    // World (only the panning sketch uses a world larger than the window)
    pub const WORLD_WIDTH: f32 = 4000.0;
    pub const WORLD_HEIGHT: f32 = 3000.0;

    // Birds
    pub const BIRD_SIZE: f32 = 15.0;
    pub const BIRD_SPEED: f32 = 100.0; // units per second
    pub const BIRD_SPEED_JITTER: f32 = 0.25; // +/- fraction for random flocks
    pub const BIRD_SKEW: f32 = 0.5;
    pub const FLOCK_SIZE: usize = 64;
    pub const MAX_BIRDS: usize = 10_000;

    // Strokes
    pub const VOID_WIDTH: f32 = 4.0;
    pub const GHOST_WIDTH: f32 = 2.0;
    pub const OUTLINE_WIDTH: f32 = 1.0;
    pub const MITER_LIMIT: f32 = 4.0; // Joins reach at most this many half-widths past the path

    // Animation clock wraps at the common period of every sine the void uses
    pub const CLOCK_PERIOD: f32 = 20.0 * std::f32::consts::PI;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps

    pub const DEFAULT_SEED: u64 = 12345;
}
