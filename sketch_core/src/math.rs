use glam::Vec2;

/// Linearly remap `value` from `low1..high1` into `low2..high2`
pub fn map_range(value: f32, low1: f32, high1: f32, low2: f32, high2: f32) -> f32 {
    low2 + (value - low1) * (high2 - low2) / (high1 - low1)
}

/// Sine shifted into 0..=1
pub fn msin(x: f32) -> f32 {
    (x.sin() + 1.0) / 2.0
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive on all edges
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Grow by `margin` on every side (negative shrinks)
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    pub fn translate(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// True if any extent is non-positive or any corner is not finite
    pub fn is_degenerate(&self) -> bool {
        !(self.min.is_finite() && self.max.is_finite())
            || self.width() <= 0.0
            || self.height() <= 0.0
    }
}

/// Wrap a point around `bounds` as if its edges were glued together.
///
/// The result always lies in `[min, max)` on both axes.
pub fn wrap_point(point: Vec2, bounds: &Rect) -> Vec2 {
    Vec2::new(
        wrap_axis(point.x, bounds.min.x, bounds.width()),
        wrap_axis(point.y, bounds.min.y, bounds.height()),
    )
}

fn wrap_axis(value: f32, min: f32, extent: f32) -> f32 {
    let mut offset = (value - min).rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative offsets
    if offset >= extent {
        offset = 0.0;
    }
    min + offset
}
