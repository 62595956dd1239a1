//! World/camera/viewport mapping
//!
//! The world is the logical domain birds live in, the camera is the part of
//! the world currently on screen and the physical viewport is the window area
//! (in logical pixels) the camera is stretched onto.

use crate::{map_range, Rect, ViewError};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    world: Rect,
    camera: Rect,
    phy: Rect,
}

impl View {
    /// Create a view whose camera matches the viewport size and sits at the
    /// center of the world
    pub fn new(world: Rect, phy: Rect) -> Result<Self, ViewError> {
        if world.is_degenerate() {
            return Err(ViewError::DegenerateWorld(world));
        }
        if phy.is_degenerate() {
            return Err(ViewError::DegenerateViewport(phy));
        }

        let mut view = Self {
            world,
            camera: Rect::from_center_size(world.center(), phy.size()),
            phy,
        };
        view.clamp_camera();
        Ok(view)
    }

    pub fn world(&self) -> Rect {
        self.world
    }

    pub fn camera(&self) -> Rect {
        self.camera
    }

    pub fn phy(&self) -> Rect {
        self.phy
    }

    /// World units per physical pixel on each axis
    pub fn scale(&self) -> Vec2 {
        self.camera.size() / self.phy.size()
    }

    /// Map a world-space point into the physical viewport
    pub fn world_to_phy(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            map_range(
                point.x,
                self.camera.min.x,
                self.camera.max.x,
                self.phy.min.x,
                self.phy.max.x,
            ),
            map_range(
                point.y,
                self.camera.min.y,
                self.camera.max.y,
                self.phy.min.y,
                self.phy.max.y,
            ),
        )
    }

    /// Map a physical viewport point back into world space
    pub fn phy_to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            map_range(
                point.x,
                self.phy.min.x,
                self.phy.max.x,
                self.camera.min.x,
                self.camera.max.x,
            ),
            map_range(
                point.y,
                self.phy.min.y,
                self.phy.max.y,
                self.camera.min.y,
                self.camera.max.y,
            ),
        )
    }

    /// Whether a world point falls inside the camera grown by `margin`
    pub fn is_in_view(&self, point: Vec2, margin: f32) -> bool {
        self.camera.expand(margin).contains(point)
    }

    /// Drag the world under the cursor: the camera moves opposite to the
    /// pointer motion so the grabbed point follows it.
    pub fn pan(&mut self, phy_delta: Vec2) {
        let world_delta = phy_delta * self.scale();
        self.camera = self.camera.translate(-world_delta);
        self.clamp_camera();
    }

    /// Follow a window resize, keeping the camera centered where it was
    pub fn resize(&mut self, phy_size: Vec2) -> Result<(), ViewError> {
        let phy = Rect::from_origin_size(Vec2::ZERO, phy_size);
        if phy.is_degenerate() {
            return Err(ViewError::DegenerateViewport(phy));
        }

        let scale = self.scale();
        self.camera = Rect::from_center_size(self.camera.center(), phy_size * scale);
        self.phy = phy;
        self.clamp_camera();
        Ok(())
    }

    pub fn set_world(&mut self, world: Rect) -> Result<(), ViewError> {
        if world.is_degenerate() {
            return Err(ViewError::DegenerateWorld(world));
        }
        self.world = world;
        self.clamp_camera();
        Ok(())
    }

    /// Keep the camera inside the world, or centered on it along an axis
    /// where the camera is the larger of the two
    fn clamp_camera(&mut self) {
        let size = self.camera.size();
        let origin = Vec2::new(
            clamp_axis(self.camera.min.x, size.x, self.world.min.x, self.world.max.x),
            clamp_axis(self.camera.min.y, size.y, self.world.min.y, self.world.max.y),
        );
        self.camera = Rect::from_origin_size(origin, size);
    }
}

fn clamp_axis(origin: f32, extent: f32, lo: f32, hi: f32) -> f32 {
    if extent >= hi - lo {
        lo + (hi - lo - extent) / 2.0
    } else {
        origin.clamp(lo, hi - extent)
    }
}
