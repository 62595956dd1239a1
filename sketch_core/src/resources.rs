/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Elapsed time, wrapped to Params::CLOCK_PERIOD
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Random number generator
pub struct SketchRng(pub rand::rngs::StdRng);

impl SketchRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Per-frame culling counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub visible_birds: usize,
    pub culled_birds: usize,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.visible_birds + self.culled_birds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_time_default_starts_at_zero() {
        let time = Time::default();
        assert_eq!(time.now, 0.0);
        assert_eq!(time.dt, 0.0);
    }

    #[test]
    fn test_rng_same_seed_same_sequence() {
        let mut a = SketchRng::new(99);
        let mut b = SketchRng::new(99);
        let xs: Vec<u32> = (0..4).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_frame_stats_total() {
        let stats = FrameStats {
            visible_birds: 3,
            culled_birds: 4,
        };
        assert_eq!(stats.total(), 7);
        assert_eq!(FrameStats::new().total(), 0);
    }
}
