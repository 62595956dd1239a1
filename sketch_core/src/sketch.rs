//! A running sketch: birds in an ECS world, the view onto them and the clock

use crate::{
    compose_frame, create_bird, spawn_flock, step, Bird, Config, Frame, Rect, SketchError,
    SketchRng, Time, View, ViewError,
};
use glam::Vec2;
use hecs::World;
use std::fmt;
use std::str::FromStr;

/// The sketch variants, from the bare void up to the pannable world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SketchKind {
    /// Just the void curves
    Void,
    /// Two birds crossing paths, flying off screen
    Pair,
    /// A random flock wrapping around the window edges
    Flock,
    /// A flock in a world larger than the window, panned by dragging
    #[default]
    World,
}

impl SketchKind {
    pub const ALL: [SketchKind; 4] = [
        SketchKind::Void,
        SketchKind::Pair,
        SketchKind::Flock,
        SketchKind::World,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SketchKind::Void => "void",
            SketchKind::Pair => "pair",
            SketchKind::Flock => "flock",
            SketchKind::World => "world",
        }
    }

    /// The world is the window itself rather than a fixed-size domain
    pub fn world_tracks_window(&self) -> bool {
        !matches!(self, SketchKind::World)
    }

    pub fn wraps(&self) -> bool {
        matches!(self, SketchKind::Flock | SketchKind::World)
    }

    pub fn pans(&self) -> bool {
        matches!(self, SketchKind::World)
    }

    pub fn culls(&self) -> bool {
        matches!(self, SketchKind::World)
    }
}

impl fmt::Display for SketchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SketchKind {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SketchKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SketchError::UnknownKind(s.to_string()))
    }
}

pub struct Sketch {
    kind: SketchKind,
    config: Config,
    world: World,
    view: View,
    time: Time,
    rng: SketchRng,
}

impl Sketch {
    /// Set up a sketch for a viewport of `phy_size` logical pixels
    pub fn new(kind: SketchKind, config: Config, phy_size: Vec2) -> Result<Self, SketchError> {
        config.validate()?;

        let phy = Rect::from_origin_size(Vec2::ZERO, phy_size);
        let bounds = if kind.world_tracks_window() {
            phy
        } else {
            Rect::from_origin_size(Vec2::ZERO, config.world_size())
        };
        let view = View::new(bounds, phy)?;

        let mut world = World::new();
        let mut rng = SketchRng::new(config.seed);

        match kind {
            SketchKind::Void => {}
            SketchKind::Pair => {
                create_bird(&mut world, Vec2::new(300.0, 400.0), 1.0, config.bird_speed);
                create_bird(
                    &mut world,
                    Vec2::new(600.0, 400.0),
                    std::f32::consts::PI,
                    config.bird_speed,
                );
            }
            SketchKind::Flock | SketchKind::World => {
                spawn_flock(&mut world, &mut rng, &view.world(), &config);
            }
        }

        log::debug!(
            "sketch {} ready: {} birds, world {:?}, camera {:?}",
            kind,
            world.len(),
            view.world(),
            view.camera()
        );

        Ok(Self {
            kind,
            config,
            world,
            view,
            time: Time::default(),
            rng,
        })
    }

    pub fn kind(&self) -> SketchKind {
        self.kind
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Advance the simulation by `dt` seconds of wall time
    pub fn update(&mut self, dt: f32) {
        self.time.dt = dt;
        let bounds = self.kind.wraps().then(|| self.view.world());
        step(&mut self.world, &mut self.time, bounds.as_ref());
    }

    /// Pan the camera by a pointer drag of `phy_delta` pixels. Ignored by
    /// sketches whose camera is fixed.
    pub fn pan(&mut self, phy_delta: Vec2) {
        if self.kind.pans() {
            self.view.pan(phy_delta);
            log::trace!("camera panned to {:?}", self.view.camera());
        }
    }

    pub fn resize(&mut self, phy_size: Vec2) -> Result<(), ViewError> {
        self.view.resize(phy_size)?;
        if self.kind.world_tracks_window() {
            self.view
                .set_world(Rect::from_origin_size(Vec2::ZERO, phy_size))?;
        }
        Ok(())
    }

    /// Replace the flock with a fresh one from the sketch's generator
    pub fn respawn(&mut self) {
        if !self.kind.wraps() {
            return;
        }
        self.world.clear();
        spawn_flock(&mut self.world, &mut self.rng, &self.view.world(), &self.config);
    }

    pub fn frame(&self) -> Frame {
        compose_frame(&self.world, &self.view, &self.time, self.kind, &self.config)
    }

    pub fn birds(&self) -> Vec<Bird> {
        self.world
            .query::<&Bird>()
            .iter()
            .map(|(_entity, bird)| *bird)
            .collect()
    }
}
